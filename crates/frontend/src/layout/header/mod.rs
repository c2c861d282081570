pub mod header;
pub mod state;

pub use header::{AnchorLink, Header, NavLink};
pub use state::{HeaderAppearance, HeaderScrollState, MobileNavState};
