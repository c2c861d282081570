pub mod customer;
pub mod pricing;
pub mod reference;
pub mod search;

pub use customer::CustomerInput;
pub use reference::BookingReference;
pub use search::{SearchCriteria, SearchInput};
