//! Report assembly: turns the two feed payloads into plain structured data
//! for a rendering sink. The library owns none of the presentation; the
//! only texts it defines are the feed-language fallback markers.

use crate::types::current::CurrentConditions;
use crate::types::forecast::LocalForecast;
use chrono::{DateTime, FixedOffset};

/// Fallback text for a station without a temperature reading.
pub const NO_TEMPERATURE_TEXT: &str = "沒有數據";
/// Fallback text for a station without a rainfall range.
pub const NO_RAINFALL_TEXT: &str = "沒有雨量數據";

/// A fully-formed weather report.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// The personalized section; present when a nearest station was resolved
    /// for the caller's location.
    pub station: Option<StationReport>,
    /// Territory-wide conditions.
    pub overview: Overview,
    /// Today's forecast.
    pub forecast: ForecastSummary,
    /// Publication time of the current-conditions feed.
    pub update_time: Option<DateTime<FixedOffset>>,
}

/// Conditions at the station closest to the user.
#[derive(Debug, Clone)]
pub struct StationReport {
    pub name: String,
    /// Temperature in degrees Celsius, when the station is reporting one.
    pub temperature: Option<f64>,
    /// Past-hour rainfall range, when the station's gauge reported one.
    pub rainfall: Option<RainfallRange>,
}

impl StationReport {
    /// Display text for the temperature reading, falling back to
    /// [`NO_TEMPERATURE_TEXT`].
    pub fn temperature_text(&self) -> String {
        match self.temperature {
            Some(value) => format_reading(value),
            None => NO_TEMPERATURE_TEXT.to_string(),
        }
    }

    /// Display text for the rainfall range, falling back to
    /// [`NO_RAINFALL_TEXT`].
    pub fn rainfall_text(&self) -> String {
        match &self.rainfall {
            Some(range) => range.text(),
            None => NO_RAINFALL_TEXT.to_string(),
        }
    }
}

/// A past-hour rainfall range in the feed's unit. The lower bound defaults
/// to the upper when the feed omits it.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallRange {
    pub min: Option<f64>,
    pub max: f64,
    pub unit: String,
}

impl RainfallRange {
    pub fn text(&self) -> String {
        format!(
            "{}-{} {}",
            format_reading(self.min.unwrap_or(self.max)),
            format_reading(self.max),
            self.unit
        )
    }
}

/// Territory-wide conditions.
#[derive(Debug, Clone)]
pub struct Overview {
    /// The Observatory headquarters reading, the feed's first temperature
    /// entry.
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub uv_index: Option<UvSummary>,
    /// Warning statements in force; empty when there are none.
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct UvSummary {
    pub value: Option<f64>,
    pub desc: Option<String>,
}

/// The forecast section of a report.
#[derive(Debug, Clone)]
pub struct ForecastSummary {
    pub general_situation: Option<String>,
    pub forecast_desc: Option<String>,
    pub outlook: Option<String>,
}

impl WeatherReport {
    /// Assembles a report from the two feed payloads, personalized for
    /// `station` when one was resolved.
    ///
    /// Extraction matches on exact station-name equality; a missing entry,
    /// a reading without a value, or a rainfall entry without its upper
    /// bound leaves that field absent, which the text accessors turn into
    /// the fallback markers.
    pub fn from_feeds(
        current: &CurrentConditions,
        forecast: &LocalForecast,
        station: Option<&str>,
    ) -> Self {
        let station = station.map(|name| StationReport {
            name: name.to_string(),
            temperature: current.temperature_at(name),
            rainfall: current.rainfall_at(name).and_then(|reading| {
                reading.max.map(|max| RainfallRange {
                    min: reading.min,
                    max,
                    unit: reading.unit.clone().unwrap_or_else(|| "毫米".to_string()),
                })
            }),
        });

        let uv_index = current.uvindex.as_ref().map(|uv| UvSummary {
            value: uv.data.first().and_then(|r| r.value),
            desc: uv
                .desc
                .clone()
                .or_else(|| uv.data.first().and_then(|r| r.desc.clone())),
        });

        WeatherReport {
            station,
            overview: Overview {
                temperature: current.temperature.data.first().and_then(|r| r.value),
                humidity: current.humidity.data.first().and_then(|r| r.value),
                uv_index,
                warnings: current.warning_message.clone().unwrap_or_default(),
            },
            forecast: ForecastSummary {
                general_situation: forecast.general_situation.clone(),
                forecast_desc: forecast.forecast_desc.clone(),
                outlook: forecast.outlook.clone(),
            },
            update_time: current.update_time,
        }
    }
}

/// Readings print the way the feed wrote them: no trailing `.0` on whole
/// numbers.
fn format_reading(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
