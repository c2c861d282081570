pub mod a001_vehicle;
