pub mod flow;
pub mod sink;
pub mod view;

pub use flow::{BookingFlow, BookingForms, BookingStep, FlowModal, FlowState, ResetTicket};
pub use sink::{BookingSubmission, SubmissionSink};
pub use view::{BookingSummary, DetailView};

use crate::usecases::common::UseCaseMetadata;

pub struct BookVehicle;

impl UseCaseMetadata for BookVehicle {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "booking_flow"
    }

    fn display_name() -> &'static str {
        "Book a vehicle"
    }

    fn description() -> &'static str {
        "Search dates and locations, pick a vehicle, enter customer details, get a reference"
    }
}
