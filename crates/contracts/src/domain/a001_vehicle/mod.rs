pub mod aggregate;
pub mod selection;
pub mod specs;

pub use aggregate::{CatalogFilter, RawCatalogEntry, VehicleCatalogEntry};
pub use selection::SelectedVehicle;
pub use specs::{SpecField, VehicleSpecs, SPEC_FALLBACK};
