pub mod booking_form;
pub mod confirmation;
pub mod controller;
pub mod search_bar;
pub mod sink;

pub use booking_form::BookingFormModal;
pub use confirmation::ConfirmationModal;
pub use controller::BookingController;
pub use search_bar::SearchBar;
pub use sink::ConsoleSink;
