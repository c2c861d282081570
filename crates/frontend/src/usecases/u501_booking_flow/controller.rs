use crate::shared::config::use_config;
use crate::shared::dom;
use crate::shared::notifications::NotificationService;
use crate::shared::timers;
use contracts::domain::a001_vehicle::VehicleCatalogEntry;
use contracts::domain::a002_booking::{CustomerInput, SearchInput};
use contracts::shared::config::RentalConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_booking_flow::{
    BookVehicle, BookingFlow, BookingStep, FlowModal, FlowState, SubmissionSink,
};
use leptos::prelude::*;
use std::sync::Arc;

/// Section the visitor is sent to when booking without a vehicle
pub const CATALOG_SECTION_ID: &str = "cars";

/// Drives [`BookingFlow`] from UI events and turns its outcomes into toasts,
/// scrolling and deferred resets.
#[derive(Clone, Copy)]
pub struct BookingController {
    flow: RwSignal<BookingFlow>,
    notifications: NotificationService,
    config: StoredValue<RentalConfig>,
    sink: StoredValue<Arc<dyn SubmissionSink + Send + Sync>>,
}

impl BookingController {
    pub fn new(
        notifications: NotificationService,
        config: StoredValue<RentalConfig>,
        sink: Arc<dyn SubmissionSink + Send + Sync>,
    ) -> Self {
        Self {
            flow: RwSignal::new(BookingFlow::new()),
            notifications,
            config,
            sink: StoredValue::new(sink),
        }
    }

    /// Controller provided at the app root
    pub fn expect() -> Self {
        use_context::<BookingController>()
            .expect("BookingController not provided in context (provide it in app root)")
    }

    pub fn with_flow<T>(&self, f: impl FnOnce(&BookingFlow) -> T) -> T {
        self.flow.with(f)
    }

    pub fn state(&self) -> FlowState {
        self.flow.with(|f| f.state())
    }

    // ========================================================================
    // Form bindings
    // ========================================================================

    pub fn search_field(&self, f: impl FnOnce(&SearchInput) -> String) -> String {
        self.flow.with(|flow| f(&flow.forms().search))
    }

    pub fn update_search(&self, f: impl FnOnce(&mut SearchInput)) {
        self.flow.update(|flow| f(&mut flow.forms_mut().search));
    }

    pub fn customer_field(&self, f: impl FnOnce(&CustomerInput) -> String) -> String {
        self.flow.with(|flow| f(&flow.forms().customer))
    }

    pub fn update_customer(&self, f: impl FnOnce(&mut CustomerInput)) {
        self.flow.update(|flow| f(&mut flow.forms_mut().customer));
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    pub fn open_detail(&self, entry: &VehicleCatalogEntry) {
        self.flow.update(|f| {
            f.open_detail(entry);
        });
    }

    /// Close control or overlay click of `modal`
    pub fn dismiss(&self, modal: FlowModal) {
        self.flow.update(|f| {
            f.dismiss(modal);
        });
    }

    /// "Book now" in the search bar
    pub fn request_booking(&self) {
        let Some(result) = self.flow.try_update(|f| f.request_booking()) else {
            return;
        };
        match result {
            Ok(BookingStep::FormOpened) => {}
            Ok(step @ BookingStep::VehicleRequired) => {
                dom::scroll_to_id(CATALOG_SECTION_ID);
                if let Some(record) = step.notification() {
                    self.notifications.show(record);
                }
            }
            Err(e) => self.notifications.error(&e),
        }
    }

    /// "Book now" in the detail modal
    pub fn open_booking_form(&self) {
        let result = self
            .flow
            .try_update(|f| f.open_booking_form().map(|_| ()));
        if let Some(Err(e)) = result {
            self.notifications.error(&e);
        }
    }

    /// Validate the customer section, hand the booking to the sink and show
    /// the confirmation. Forms are cleared after a short delay.
    pub fn submit_customer_form(&self) {
        let prefix = self.config.with_value(|c| c.reference_prefix.clone());
        let result = self.flow.try_update(|f| {
            let mut rng = rand::thread_rng();
            f.submit_customer_form(&prefix, &mut rng)
                .map(|submission| (submission, f.reset_ticket()))
        });

        match result {
            Some(Ok((submission, ticket))) => {
                log::info!("booking confirmed: {}", submission.reference);
                self.sink.with_value(|sink| sink.deliver(&submission));

                let flow = self.flow;
                let delay = self.config.with_value(|c| c.deferred_reset_ms);
                timers::schedule(delay, move || {
                    let _ = flow.try_update(|f| f.apply_deferred_reset(ticket));
                });
            }
            Some(Err(e)) => self.notifications.error(&e),
            None => {}
        }
    }

    pub fn close_confirmation(&self) {
        self.flow.update(|f| {
            f.close_confirmation();
        });
    }
}

/// Build the controller from the root contexts
pub fn provide_booking_controller(
    notifications: NotificationService,
    sink: Arc<dyn SubmissionSink + Send + Sync>,
) -> BookingController {
    log::info!(
        "{}: {} ({})",
        BookVehicle::full_name(),
        BookVehicle::display_name(),
        BookVehicle::description()
    );
    let ctl = BookingController::new(notifications, use_config(), sink);
    provide_context(ctl);
    ctl
}
