use crate::weather_data::error::WeatherDataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HkWeatherError {
    #[error(transparent)]
    WeatherData(#[from] WeatherDataError),

    #[error("No reporting station near {lat}, {lon} matches the station catalog")]
    NoStationResolved { lat: f64, lon: f64 },
}
