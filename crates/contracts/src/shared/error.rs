//! Error taxonomy of the booking page.
//!
//! Nothing here is fatal: every variant is surfaced to the visitor as an error
//! notification and the flow state is left exactly as it was.

use super::notification::NotificationRecord;
use thiserror::Error;

/// Broad class of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Missing or malformed visitor input
    Validation,
    /// Malformed data coming from the page markup
    Parse,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Please select both start and end dates")]
    MissingDates,

    #[error("Please enter both pickup and return locations")]
    MissingLocations,

    #[error("Please enter valid pickup and return dates")]
    InvalidDate(String),

    #[error("Please ensure your return date is after your pickup date")]
    NonPositiveDuration,

    #[error("Pricing for this vehicle is currently unavailable")]
    MalformedPrice(String),

    #[error("Please select a vehicle before booking")]
    NoVehicleSelected,

    #[error("Please fill in all personal information fields")]
    MissingCustomerFields,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("The booking form is not open")]
    FormNotOpen,
}

impl BookingError {
    pub fn class(&self) -> ErrorClass {
        match self {
            BookingError::MalformedPrice(_) | BookingError::InvalidDate(_) => ErrorClass::Parse,
            _ => ErrorClass::Validation,
        }
    }

    /// Toast shown to the visitor for this error
    pub fn notification(&self) -> NotificationRecord {
        NotificationRecord::error(self.to_string())
    }
}
