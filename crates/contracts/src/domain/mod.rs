pub mod a001_vehicle;
pub mod a002_booking;
