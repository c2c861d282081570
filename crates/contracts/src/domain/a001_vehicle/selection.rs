use super::aggregate::VehicleCatalogEntry;
use super::specs::VehicleSpecs;
use serde::{Deserialize, Serialize};

/// The vehicle the visitor is currently looking at or booking.
///
/// Owned by the booking flow. Every selection is a full overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedVehicle {
    pub name: String,
    pub price: String,
    pub img: String,
    pub specs: VehicleSpecs,
}

impl SelectedVehicle {
    pub fn from_entry(entry: &VehicleCatalogEntry) -> Self {
        Self {
            name: entry.title.clone(),
            price: entry.price_per_day.clone(),
            img: entry.image_ref.clone(),
            specs: entry.specs.clone(),
        }
    }

    pub fn select(&mut self, entry: &VehicleCatalogEntry) {
        *self = Self::from_entry(entry);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vehicle::RawCatalogEntry;

    #[test]
    fn test_select_overwrites_previous() {
        let first = VehicleCatalogEntry::from_raw(RawCatalogEntry {
            title: "Range Rover".into(),
            price_per_day: "450".into(),
            specs: Some(r#"{"engine":"V8"}"#.into()),
            ..Default::default()
        });
        let second = VehicleCatalogEntry::from_raw(RawCatalogEntry {
            title: "Mini Cooper".into(),
            price_per_day: "90".into(),
            ..Default::default()
        });

        let mut selected = SelectedVehicle::default();
        assert!(selected.is_empty());
        selected.select(&first);
        selected.select(&second);
        assert_eq!(selected.name, "Mini Cooper");
        assert_eq!(selected.price, "90");
        assert!(selected.specs.is_empty());

        selected.clear();
        assert!(selected.is_empty());
    }
}
