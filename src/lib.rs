mod error;
mod hkweather;
mod location;
mod report;
mod stations;
mod types;
mod weather_data;

pub use error::HkWeatherError;
pub use hkweather::*;

pub use location::{acquire_location, LocationError, LocationProvider, LOCATION_TIMEOUT};
pub use report::*;
pub use stations::catalog::StationCatalog;
pub use stations::locate_station::{distance_km, find_nearest};
pub use types::current::*;
pub use types::forecast::*;
pub use weather_data::error::WeatherDataError;
pub use weather_data::fetcher::WeatherFetcher;
