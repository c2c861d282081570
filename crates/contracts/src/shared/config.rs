use serde::{Deserialize, Serialize};

/// Tunables of the rental page.
///
/// Every field has a default, so a host page may override any subset of them
/// with a JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RentalConfig {
    /// Prefix of generated booking references ("HS" for Heaven Star)
    pub reference_prefix: String,
    /// How long a toast stays on screen
    pub notification_ttl_ms: u32,
    /// Delay between fading a filtered-out card and removing it from layout
    pub filter_fade_ms: u32,
    /// Delay between re-adding a card to layout and fading it in
    pub filter_reveal_ms: u32,
    /// Delay before forms are cleared after a successful submission
    pub deferred_reset_ms: u32,
    /// Header hides when scrolling down past this offset
    pub header_hide_threshold_px: f64,
    /// Header gets a shadow past this offset
    pub header_shadow_threshold_px: f64,
    /// Duration of the staggered card entrance animation
    pub card_loading_ms: u32,
    /// Visible fraction of a card that triggers its scroll fade-in
    pub reveal_threshold: f64,
}

impl Default for RentalConfig {
    fn default() -> Self {
        Self {
            reference_prefix: "HS".to_string(),
            notification_ttl_ms: 5000,
            filter_fade_ms: 300,
            filter_reveal_ms: 50,
            deferred_reset_ms: 2000,
            header_hide_threshold_px: 200.0,
            header_shadow_threshold_px: 50.0,
            card_loading_ms: 1000,
            reveal_threshold: 0.1,
        }
    }
}

impl RentalConfig {
    /// Parse host-page overrides; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let cfg = RentalConfig::from_json(r#"{"referencePrefix":"XR","notificationTtlMs":1000}"#)
            .unwrap();
        assert_eq!(cfg.reference_prefix, "XR");
        assert_eq!(cfg.notification_ttl_ms, 1000);
        assert_eq!(cfg.filter_fade_ms, 300);
        assert_eq!(cfg.reveal_threshold, 0.1);
    }

    #[test]
    fn test_reveal_threshold_override() {
        let cfg = RentalConfig::from_json(r#"{"revealThreshold":0.5}"#).unwrap();
        assert_eq!(cfg.reveal_threshold, 0.5);
        assert_eq!(cfg.card_loading_ms, 1000);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(RentalConfig::from_json("{not json").is_err());
    }
}
