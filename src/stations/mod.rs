pub mod catalog;
pub mod locate_station;
