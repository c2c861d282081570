use contracts::usecases::u501_booking_flow::{BookingSubmission, SubmissionSink};

/// Default form handler: the page's real backend is an external form service,
/// so the submission is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn deliver(&self, submission: &BookingSubmission) {
        match serde_json::to_string(submission) {
            Ok(json) => log::info!("booking submitted: {}", json),
            Err(e) => log::error!("Failed to serialize booking {}: {}", submission.reference, e),
        }
    }
}
