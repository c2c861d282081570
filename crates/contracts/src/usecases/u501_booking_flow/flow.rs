use super::sink::BookingSubmission;
use super::view::{BookingSummary, DetailView};
use super::BookVehicle;
use crate::domain::a001_vehicle::{SelectedVehicle, VehicleCatalogEntry};
use crate::domain::a002_booking::{BookingReference, CustomerInput, SearchInput};
use crate::shared::error::BookingError;
use crate::shared::notification::NotificationRecord;
use crate::usecases::common::UseCaseMetadata;
use rand::Rng;

/// Which of the three booking modals is on screen.
///
/// At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Closed,
    DetailOpen,
    BookingFormOpen,
    ConfirmationOpen,
}

impl FlowState {
    /// Background scroll is suspended while any modal is open
    pub fn suspends_scroll(&self) -> bool {
        !matches!(self, FlowState::Closed)
    }
}

/// A modal addressed by a close control or an overlay click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowModal {
    Detail,
    BookingForm,
    Confirmation,
}

/// Outcome of the general "book now" action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStep {
    FormOpened,
    /// Search is complete but no vehicle was picked yet
    VehicleRequired,
}

impl BookingStep {
    pub fn notification(&self) -> Option<NotificationRecord> {
        match self {
            BookingStep::FormOpened => None,
            BookingStep::VehicleRequired => Some(NotificationRecord::info(
                "Please select a vehicle first by clicking \"View Details\" on one of our vehicles",
            )),
        }
    }
}

/// Token for the reset scheduled after a submission.
///
/// Stale once a new vehicle is opened or a new booking form is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResetTicket(u64);

/// Values of every input the booking flow reads and clears
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForms {
    pub search: SearchInput,
    pub customer: CustomerInput,
}

impl BookingForms {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// State machine behind the detail, booking-form and confirmation modals.
///
/// `Closed → DetailOpen → BookingFormOpen → ConfirmationOpen → Closed`, with
/// `Closed → BookingFormOpen` reachable from the search bar. Every failed
/// transition leaves the state untouched.
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    state: FlowState,
    selected: SelectedVehicle,
    forms: BookingForms,
    detail: Option<DetailView>,
    summary: Option<BookingSummary>,
    reference: Option<BookingReference>,
    generation: u64,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn selected(&self) -> &SelectedVehicle {
        &self.selected
    }

    pub fn forms(&self) -> &BookingForms {
        &self.forms
    }

    /// Input bindings write through here
    pub fn forms_mut(&mut self) -> &mut BookingForms {
        &mut self.forms
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn summary(&self) -> Option<&BookingSummary> {
        self.summary.as_ref()
    }

    pub fn reference(&self) -> Option<&BookingReference> {
        self.reference.as_ref()
    }

    pub fn is_open(&self, modal: FlowModal) -> bool {
        matches!(
            (self.state, modal),
            (FlowState::DetailOpen, FlowModal::Detail)
                | (FlowState::BookingFormOpen, FlowModal::BookingForm)
                | (FlowState::ConfirmationOpen, FlowModal::Confirmation)
        )
    }

    fn transition(&mut self, to: FlowState) {
        log::debug!(
            "{}: {:?} -> {:?}",
            BookVehicle::full_name(),
            self.state,
            to
        );
        self.state = to;
    }

    // ========================================================================
    // Detail modal
    // ========================================================================

    /// Select the vehicle and show its detail modal
    pub fn open_detail(&mut self, entry: &VehicleCatalogEntry) -> &DetailView {
        self.selected.select(entry);
        self.generation += 1;
        self.transition(FlowState::DetailOpen);
        self.detail.insert(DetailView::from_entry(entry))
    }

    /// No-op unless the detail modal is the open one
    pub fn close_detail(&mut self) -> bool {
        self.close(FlowModal::Detail)
    }

    // ========================================================================
    // Booking form
    // ========================================================================

    /// The general "book now" action of the search bar
    pub fn request_booking(&mut self) -> Result<BookingStep, BookingError> {
        self.forms.search.check_required()?;
        if self.selected.is_empty() {
            return Ok(BookingStep::VehicleRequired);
        }
        self.open_booking_form()?;
        Ok(BookingStep::FormOpened)
    }

    /// Validate the current search and show the booking form for the selected vehicle
    pub fn open_booking_form(&mut self) -> Result<&BookingSummary, BookingError> {
        if self.selected.is_empty() {
            return Err(BookingError::NoVehicleSelected);
        }
        let criteria = self.forms.search.criteria()?;
        let summary = BookingSummary::build(&self.selected, &criteria)?;

        self.generation += 1;
        self.transition(FlowState::BookingFormOpen);
        Ok(self.summary.insert(summary))
    }

    pub fn close_booking_form(&mut self) -> bool {
        self.close(FlowModal::BookingForm)
    }

    /// Validate the customer section and move to the confirmation.
    ///
    /// The returned submission is meant for the external form handler.
    pub fn submit_customer_form<R: Rng + ?Sized>(
        &mut self,
        reference_prefix: &str,
        rng: &mut R,
    ) -> Result<BookingSubmission, BookingError> {
        let summary = match (self.state, &self.summary) {
            (FlowState::BookingFormOpen, Some(summary)) => summary.clone(),
            _ => return Err(BookingError::FormNotOpen),
        };
        let customer = self.forms.customer.trimmed();
        customer.validate()?;

        let reference = BookingReference::generate(reference_prefix, rng);
        self.reference = Some(reference.clone());
        self.transition(FlowState::ConfirmationOpen);

        Ok(BookingSubmission {
            reference,
            summary,
            customer,
        })
    }

    // ========================================================================
    // Confirmation and reset
    // ========================================================================

    /// Ticket for the reset that follows a successful submission
    pub fn reset_ticket(&self) -> ResetTicket {
        ResetTicket(self.generation)
    }

    /// Clear forms and selection unless a new booking started since `ticket`.
    ///
    /// The confirmation stays on screen.
    pub fn apply_deferred_reset(&mut self, ticket: ResetTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        self.clear_forms_and_selection();
        true
    }

    /// Close the confirmation and reset everything immediately
    pub fn close_confirmation(&mut self) -> bool {
        if !self.is_open(FlowModal::Confirmation) {
            return false;
        }
        self.reset();
        true
    }

    /// Close control or overlay click on `modal`; other modals are untouched
    pub fn dismiss(&mut self, modal: FlowModal) -> bool {
        match modal {
            FlowModal::Detail => self.close_detail(),
            FlowModal::BookingForm => self.close_booking_form(),
            FlowModal::Confirmation => self.close_confirmation(),
        }
    }

    /// Back to `Closed` with empty forms and no selection
    pub fn reset(&mut self) {
        self.clear_forms_and_selection();
        self.reference = None;
        // a pending deferred reset must not clear what is typed next
        self.generation += 1;
        self.transition(FlowState::Closed);
    }

    fn clear_forms_and_selection(&mut self) {
        self.forms = BookingForms::default();
        self.selected.clear();
        self.detail = None;
        self.summary = None;
    }

    fn close(&mut self, modal: FlowModal) -> bool {
        if !self.is_open(modal) {
            return false;
        }
        self.transition(FlowState::Closed);
        true
    }
}
