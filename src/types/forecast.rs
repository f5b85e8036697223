//! Data structures for the `flw` local-forecast feed.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The local weather forecast document (`dataType=flw`). Every section is
/// free text and any of them may be absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalForecast {
    pub general_situation: Option<String>,
    pub forecast_period: Option<String>,
    pub forecast_desc: Option<String>,
    pub outlook: Option<String>,
    #[serde(default)]
    pub update_time: Option<DateTime<FixedOffset>>,
}
