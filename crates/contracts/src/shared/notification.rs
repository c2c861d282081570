use serde::{Deserialize, Serialize};

/// Severity of a toast message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Error,
    Success,
}

impl NotificationKind {
    /// CSS modifier used by the page stylesheet (`notification error`, ...)
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
            NotificationKind::Success => "success",
        }
    }
}

/// A single toast message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub message: String,
    pub kind: NotificationKind,
}

impl NotificationRecord {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Error).unwrap();
        assert_eq!(json, "\"error\"");
        assert_eq!(NotificationKind::Success.css_class(), "success");
    }
}
