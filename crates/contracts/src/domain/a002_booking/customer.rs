use crate::shared::error::BookingError;
use serde::{Deserialize, Serialize};

/// Customer section of the booking form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub license: String,
    // optional
    pub hotel: String,
    pub flight: String,
    pub country: String,
}

impl CustomerInput {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        let trim = |v: &String| v.trim().to_string();
        Self {
            name: trim(&self.name),
            email: trim(&self.email),
            phone: trim(&self.phone),
            license: trim(&self.license),
            hotel: trim(&self.hotel),
            flight: trim(&self.flight),
            country: trim(&self.country),
        }
    }

    pub fn validate(&self) -> Result<(), BookingError> {
        let required = [&self.name, &self.email, &self.phone, &self.license];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(BookingError::MissingCustomerFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(BookingError::InvalidEmail);
        }
        Ok(())
    }
}

/// Local part, a single `@`, and a domain with a dot that has text on both sides.
/// No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // some dot in the domain must be neither its first nor its last character
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
