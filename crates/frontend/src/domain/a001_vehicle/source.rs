//! Reads the vehicle listings the host page ships in its markup.
//!
//! ```html
//! <div id="vehicle-catalog-source" hidden>
//!   <div class="vehicle-card" data-price="1,200" data-category="sports"
//!        data-specs='{"speed":"293 km/h","engine":"3.0L Flat-6"}'>
//!     <img src="img/911.jpg">
//!     <h3 class="vehicle-title">Porsche 911</h3>
//!     <p>Iconic rear-engine sports car.</p>
//!   </div>
//! </div>
//! ```

use crate::shared::dom;
use contracts::domain::a001_vehicle::{RawCatalogEntry, VehicleCatalogEntry};
use web_sys::Element;

pub const CATALOG_SOURCE_ID: &str = "vehicle-catalog-source";
const CARD_SELECTOR: &str = "#vehicle-catalog-source .vehicle-card";

fn read_card(card: &Element) -> RawCatalogEntry {
    RawCatalogEntry {
        title: dom::child_text(card, ".vehicle-title"),
        description: dom::child_text(card, "p"),
        image_ref: dom::child_attribute(card, "img", "src").unwrap_or_default(),
        price_per_day: card.get_attribute("data-price").unwrap_or_default(),
        category: card.get_attribute("data-category").unwrap_or_default(),
        specs: card.get_attribute("data-specs"),
    }
}

/// Decode every listing and drop the source markup so it is rendered only once
pub fn load_catalog() -> Vec<VehicleCatalogEntry> {
    let Some(document) = dom::document() else {
        return Vec::new();
    };

    let cards = dom::query_all(&document, CARD_SELECTOR);
    let entries = VehicleCatalogEntry::decode_all(cards.iter().map(read_card));

    if let Some(source) = document.get_element_by_id(CATALOG_SOURCE_ID) {
        source.remove();
    }

    log::info!("Loaded {} vehicles from page markup", entries.len());
    entries
}
