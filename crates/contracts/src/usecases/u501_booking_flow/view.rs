use crate::domain::a001_vehicle::{SelectedVehicle, SpecField, VehicleCatalogEntry};
use crate::domain::a002_booking::pricing::{format_money_grouped, format_rate, total_price};
use crate::domain::a002_booking::search::{format_day_count, SearchCriteria};
use crate::shared::error::BookingError;
use serde::{Deserialize, Serialize};

/// Content of the vehicle detail modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    /// "$450/day"
    pub price_label: String,
    /// Every recognised spec, `N/A` when absent
    pub specs: Vec<(SpecField, String)>,
}

impl DetailView {
    pub fn from_entry(entry: &VehicleCatalogEntry) -> Self {
        Self {
            title: entry.title.clone(),
            description: entry.description.clone(),
            image_ref: entry.image_ref.clone(),
            price_label: format_rate(&entry.price_per_day),
            specs: SpecField::all()
                .into_iter()
                .map(|f| (f, entry.specs.display(f)))
                .collect(),
        }
    }
}

/// Vehicle header and price summary of the booking form modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSummary {
    pub vehicle_name: String,
    pub vehicle_img: String,
    pub rate_label: String,
    /// "Miami Airport (January 10, 2024, 10:00 AM)"
    pub pickup: String,
    #[serde(rename = "return")]
    pub return_: String,
    pub days: i64,
    pub days_label: String,
    pub total: f64,
    /// "$3,600.00"
    pub total_label: String,
}

impl BookingSummary {
    pub fn build(vehicle: &SelectedVehicle, criteria: &SearchCriteria) -> Result<Self, BookingError> {
        let days = criteria.rental_days();
        if days <= 0 {
            return Err(BookingError::NonPositiveDuration);
        }
        let total = total_price(&vehicle.price, days)?;
        Ok(Self {
            vehicle_name: vehicle.name.clone(),
            vehicle_img: vehicle.img.clone(),
            rate_label: format_rate(&vehicle.price),
            pickup: criteria.pickup_summary(),
            return_: criteria.return_summary(),
            days,
            days_label: format_day_count(days),
            total,
            total_label: format_money_grouped(total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_vehicle::RawCatalogEntry;
    use crate::domain::a002_booking::SearchInput;

    fn entry() -> VehicleCatalogEntry {
        VehicleCatalogEntry::from_raw(RawCatalogEntry {
            title: "Porsche 911".into(),
            description: "Iconic".into(),
            image_ref: "img/911.jpg".into(),
            price_per_day: "1,200".into(),
            category: "sports".into(),
            specs: Some(r#"{"speed":"293 km/h"}"#.into()),
        })
    }

    #[test]
    fn test_detail_view_renders_fallbacks() {
        let view = DetailView::from_entry(&entry());
        assert_eq!(view.price_label, "$1,200/day");
        assert_eq!(view.specs.len(), 6);
        assert_eq!(view.specs[0], (SpecField::Speed, "293 km/h".to_string()));
        assert!(view.specs[1..].iter().all(|(_, v)| v == "N/A"));
    }

    #[test]
    fn test_summary() {
        let search = SearchInput {
            pickup_location: "Airport".into(),
            return_location: "Hotel".into(),
            start_date: "2024-01-10".into(),
            end_date: "2024-01-13".into(),
        };
        let vehicle = SelectedVehicle::from_entry(&entry());
        let summary = BookingSummary::build(&vehicle, &search.criteria().unwrap()).unwrap();
        assert_eq!(summary.days_label, "3 days");
        assert_eq!(summary.rate_label, "$1,200/day");
        assert_eq!(summary.total_label, "$3,600.00");
        assert_eq!(summary.pickup, "Airport (January 10, 2024, 12:00 AM)");
    }
}
