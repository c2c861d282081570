use serde::{Deserialize, Serialize};

/// Placeholder rendered for a spec the listing does not provide
pub const SPEC_FALLBACK: &str = "N/A";

/// Technical specifications attached to a catalog listing.
///
/// Decoded from the flat JSON object in the card's `data-specs` attribute.
/// Unknown keys are ignored. Numbers and booleans are kept as their text, so
/// one non-string value does not discard the other specs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpecs {
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub speed: Option<String>,
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub acceleration: Option<String>,
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub engine: Option<String>,
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub transmission: Option<String>,
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub fuel_economy: Option<String>,
    #[serde(default, deserialize_with = "deserialize_spec_text")]
    pub features: Option<String>,
}

/// Any scalar as display text; arrays are joined, objects and `null` count as absent
fn deserialize_spec_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde_json::Value;

    fn scalar_text(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    let text = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(items)) => {
            let parts: Vec<String> = items.iter().filter_map(scalar_text).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Some(value) => scalar_text(&value),
        None => None,
    };
    Ok(text)
}

/// The recognised spec keys, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecField {
    Speed,
    Acceleration,
    Engine,
    Transmission,
    FuelEconomy,
    Features,
}

impl SpecField {
    pub fn all() -> [SpecField; 6] {
        [
            SpecField::Speed,
            SpecField::Acceleration,
            SpecField::Engine,
            SpecField::Transmission,
            SpecField::FuelEconomy,
            SpecField::Features,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpecField::Speed => "Top Speed",
            SpecField::Acceleration => "Acceleration",
            SpecField::Engine => "Engine",
            SpecField::Transmission => "Transmission",
            SpecField::FuelEconomy => "Fuel Economy",
            SpecField::Features => "Features",
        }
    }

    /// Key used in the markup JSON
    pub fn key(&self) -> &'static str {
        match self {
            SpecField::Speed => "speed",
            SpecField::Acceleration => "acceleration",
            SpecField::Engine => "engine",
            SpecField::Transmission => "transmission",
            SpecField::FuelEconomy => "fuelEconomy",
            SpecField::Features => "features",
        }
    }
}

impl VehicleSpecs {
    /// Decode the serialized specs attribute.
    ///
    /// Malformed data degrades to an empty spec set; the failure is only logged.
    pub fn decode_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Self::default();
        };
        match serde_json::from_str::<VehicleSpecs>(raw) {
            Ok(specs) => specs,
            Err(e) => {
                log::warn!("Error parsing vehicle specs {:?}: {}", raw, e);
                Self::default()
            }
        }
    }

    pub fn get(&self, field: SpecField) -> Option<&str> {
        let value = match field {
            SpecField::Speed => &self.speed,
            SpecField::Acceleration => &self.acceleration,
            SpecField::Engine => &self.engine,
            SpecField::Transmission => &self.transmission,
            SpecField::FuelEconomy => &self.fuel_economy,
            SpecField::Features => &self.features,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    /// Value to render, with the `N/A` fallback
    pub fn display(&self, field: SpecField) -> String {
        self.get(field).unwrap_or(SPEC_FALLBACK).to_string()
    }

    pub fn is_empty(&self) -> bool {
        SpecField::all().iter().all(|f| self.get(*f).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_specs() {
        let specs = VehicleSpecs::decode_or_default(Some(
            r#"{"speed":"250 km/h","acceleration":"3.5s","engine":"V8","transmission":"Auto","fuelEconomy":"9 L/100km","features":"GPS"}"#,
        ));
        assert_eq!(specs.get(SpecField::FuelEconomy), Some("9 L/100km"));
        assert_eq!(specs.display(SpecField::Engine), "V8");
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let specs = VehicleSpecs::decode_or_default(Some(r#"{"engine":"V6","color":"red"}"#));
        assert_eq!(specs.display(SpecField::Engine), "V6");
        assert_eq!(specs.display(SpecField::Speed), SPEC_FALLBACK);
        assert_eq!(specs.display(SpecField::Features), SPEC_FALLBACK);
    }

    #[test]
    fn test_malformed_specs_degrade_to_empty() {
        let specs = VehicleSpecs::decode_or_default(Some("{speed: fast"));
        assert!(specs.is_empty());
        assert_eq!(VehicleSpecs::decode_or_default(None), VehicleSpecs::default());
        // valid JSON, wrong shape
        assert!(VehicleSpecs::decode_or_default(Some("[1,2,3]")).is_empty());
    }

    #[test]
    fn test_non_string_values_keep_other_specs() {
        let specs = VehicleSpecs::decode_or_default(Some(
            r#"{"speed":300,"engine":"V8","features":["GPS","Bluetooth"],"transmission":null,"acceleration":{"s":3}}"#,
        ));
        assert_eq!(specs.display(SpecField::Engine), "V8");
        assert_eq!(specs.display(SpecField::Speed), "300");
        assert_eq!(specs.display(SpecField::Features), "GPS, Bluetooth");
        assert_eq!(specs.display(SpecField::Transmission), SPEC_FALLBACK);
        assert_eq!(specs.display(SpecField::Acceleration), SPEC_FALLBACK);
    }

    #[test]
    fn test_empty_value_renders_fallback() {
        let specs = VehicleSpecs::decode_or_default(Some(r#"{"speed":""}"#));
        assert_eq!(specs.display(SpecField::Speed), SPEC_FALLBACK);
    }
}
