use crate::shared::dom;
use contracts::shared::config::RentalConfig;
use leptos::prelude::*;

/// Id of the optional `<script type="application/json">` element with overrides
pub const CONFIG_ELEMENT_ID: &str = "rental-config";

/// Read page overrides, falling back to defaults on any problem
pub fn load_config() -> RentalConfig {
    let Some(raw) = dom::document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content())
    else {
        return RentalConfig::default();
    };

    match RentalConfig::from_json(&raw) {
        Ok(cfg) => {
            log::debug!("Loaded page config: {:?}", cfg);
            cfg
        }
        Err(e) => {
            log::warn!("Invalid #{} JSON, using defaults: {}", CONFIG_ELEMENT_ID, e);
            RentalConfig::default()
        }
    }
}

pub fn use_config() -> StoredValue<RentalConfig> {
    use_context::<StoredValue<RentalConfig>>().expect("RentalConfig not provided in context")
}
