use super::specs::VehicleSpecs;
use serde::{Deserialize, Serialize};

// ============================================================================
// Markup boundary
// ============================================================================

/// A catalog card exactly as read from the host page markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalogEntry {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    /// `data-price`, decimal with optional thousands separators
    pub price_per_day: String,
    /// `data-category`
    pub category: String,
    /// `data-specs`, serialized JSON object
    pub specs: Option<String>,
}

// ============================================================================
// Catalog entry
// ============================================================================

/// A vehicle listing. Read-only for the page lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCatalogEntry {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub price_per_day: String,
    pub category: String,
    pub specs: VehicleSpecs,
}

impl VehicleCatalogEntry {
    /// Typed decode at the catalog boundary
    pub fn from_raw(raw: RawCatalogEntry) -> Self {
        let specs = VehicleSpecs::decode_or_default(raw.specs.as_deref());
        Self {
            title: raw.title.trim().to_string(),
            description: raw.description.trim().to_string(),
            image_ref: raw.image_ref,
            price_per_day: raw.price_per_day.trim().to_string(),
            category: raw.category.trim().to_string(),
            specs,
        }
    }

    /// Decode every card read from the page.
    ///
    /// A card without a title cannot be selected (an empty name means "nothing
    /// selected"), so it is skipped with a warning.
    pub fn decode_all(raw: impl IntoIterator<Item = RawCatalogEntry>) -> Vec<Self> {
        raw.into_iter()
            .enumerate()
            .filter_map(|(position, raw)| {
                let entry = Self::from_raw(raw);
                if entry.title.is_empty() {
                    log::warn!(
                        "Skipping catalog card #{} without a title (image {:?})",
                        position,
                        entry.image_ref
                    );
                    return None;
                }
                Some(entry)
            })
            .collect()
    }
}

// ============================================================================
// Filter
// ============================================================================

/// Category filter of the catalog
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CatalogFilter {
    #[default]
    All,
    Category(String),
}

impl CatalogFilter {
    pub const ALL_KEY: &'static str = "all";

    /// Build from a filter button's `data-category` value
    pub fn from_key(key: &str) -> Self {
        if key == Self::ALL_KEY {
            CatalogFilter::All
        } else {
            CatalogFilter::Category(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            CatalogFilter::All => Self::ALL_KEY,
            CatalogFilter::Category(c) => c,
        }
    }

    pub fn matches(&self, entry: &VehicleCatalogEntry) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Category(c) => entry.category == *c,
        }
    }

    /// Button label: "All", or the category with its first letter upper-cased
    pub fn label(&self) -> String {
        let key = match self {
            CatalogFilter::All => "all",
            CatalogFilter::Category(c) => c.as_str(),
        };
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// `all` followed by every category in first-seen order
    pub fn available(entries: &[VehicleCatalogEntry]) -> Vec<CatalogFilter> {
        let mut filters = vec![CatalogFilter::All];
        for entry in entries {
            if entry.category.is_empty() {
                continue;
            }
            let filter = CatalogFilter::from_key(&entry.category);
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: &str) -> VehicleCatalogEntry {
        VehicleCatalogEntry::from_raw(RawCatalogEntry {
            title: format!("{category} car"),
            price_per_day: "100".into(),
            category: category.into(),
            ..Default::default()
        })
    }

    #[test]
    fn test_from_raw_trims_and_decodes() {
        let e = VehicleCatalogEntry::from_raw(RawCatalogEntry {
            title: "  Lamborghini Huracan \n".into(),
            description: "Fast".into(),
            image_ref: "img/huracan.jpg".into(),
            price_per_day: " 1,200 ".into(),
            category: "luxury".into(),
            specs: Some(r#"{"engine":"V10"}"#.into()),
        });
        assert_eq!(e.title, "Lamborghini Huracan");
        assert_eq!(e.price_per_day, "1,200");
        assert_eq!(e.specs.engine.as_deref(), Some("V10"));
    }

    #[test]
    fn test_decode_all_skips_untitled_cards() {
        let raw = vec![
            RawCatalogEntry {
                title: "Range Rover".into(),
                category: "suv".into(),
                ..Default::default()
            },
            RawCatalogEntry {
                title: "   ".into(),
                image_ref: "img/blank.jpg".into(),
                ..Default::default()
            },
            RawCatalogEntry {
                title: "Mini".into(),
                category: "economy".into(),
                ..Default::default()
            },
        ];
        let titles: Vec<String> = VehicleCatalogEntry::decode_all(raw)
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Range Rover", "Mini"]);
    }

    #[test]
    fn test_filter_matches() {
        let suv = entry("suv");
        let sports = entry("sports");
        for filter in [
            CatalogFilter::All,
            CatalogFilter::from_key("suv"),
            CatalogFilter::from_key("sports"),
            CatalogFilter::from_key("van"),
        ] {
            for e in [&suv, &sports] {
                let expected = filter == CatalogFilter::All || filter.key() == e.category;
                assert_eq!(filter.matches(e), expected);
            }
        }
    }

    #[test]
    fn test_available_filters_keep_first_seen_order() {
        let entries = vec![entry("suv"), entry("sports"), entry("suv"), entry("luxury")];
        let keys: Vec<String> = CatalogFilter::available(&entries)
            .iter()
            .map(|f| f.key().to_string())
            .collect();
        assert_eq!(keys, vec!["all", "suv", "sports", "luxury"]);
    }

    #[test]
    fn test_label() {
        assert_eq!(CatalogFilter::All.label(), "All");
        assert_eq!(CatalogFilter::from_key("suv").label(), "Suv");
    }
}
