use super::view::BookingSummary;
use crate::domain::a002_booking::{BookingReference, CustomerInput};
use serde::{Deserialize, Serialize};

/// Everything the visitor confirmed, handed to the external form handler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingSubmission {
    pub reference: BookingReference,
    pub summary: BookingSummary,
    pub customer: CustomerInput,
}

/// External receiver of validated booking forms.
///
/// Delivery is fire-and-forget; the flow never waits on it.
pub trait SubmissionSink {
    fn deliver(&self, submission: &BookingSubmission);
}
