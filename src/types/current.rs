//! Data structures for the `rhrread` current-conditions feed.

use crate::types::de::empty_as_none;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

/// The current-conditions document (`dataType=rhrread`).
///
/// Optional blocks arrive either as JSON values or as an empty string when
/// there is nothing to report (the UV index outside daylight hours, the
/// warning list when no warnings are in force); those fields deserialize to
/// `None` in the latter case.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    /// Per-station air temperature readings. The first entry is the
    /// Observatory headquarters reading.
    pub temperature: ReadingSet,
    /// Relative humidity readings.
    pub humidity: ReadingSet,
    /// UV index block, absent outside reporting hours.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub uvindex: Option<UvIndex>,
    /// Warning statements currently in force.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub warning_message: Option<Vec<String>>,
    /// Past-hour rainfall per station.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub rainfall: Option<Rainfall>,
    /// Publication time of this document.
    #[serde(default)]
    pub update_time: Option<DateTime<FixedOffset>>,
}

impl CurrentConditions {
    /// Station names currently reporting a temperature, in feed order.
    /// This is the candidate list for nearest-station resolution.
    pub fn reporting_stations(&self) -> impl Iterator<Item = &str> {
        self.temperature.data.iter().map(|r| r.place.as_str())
    }

    /// Temperature reading for an exact station name, when that station is
    /// in the list and currently reporting a value.
    pub fn temperature_at(&self, place: &str) -> Option<f64> {
        self.temperature
            .data
            .iter()
            .find(|r| r.place == place)
            .and_then(|r| r.value)
    }

    /// Past-hour rainfall entry for an exact station name.
    pub fn rainfall_at(&self, place: &str) -> Option<&RainfallReading> {
        self.rainfall
            .as_ref()?
            .data
            .iter()
            .find(|r| r.place == place)
    }
}

/// A list of readings plus the time they were recorded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSet {
    pub data: Vec<Reading>,
    #[serde(default)]
    pub record_time: Option<DateTime<FixedOffset>>,
}

/// One reading at one station. `value` is absent when the station is
/// temporarily not reporting.
#[derive(Debug, Clone, Deserialize)]
pub struct Reading {
    pub place: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// The UV index block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UvIndex {
    pub data: Vec<UvReading>,
    /// Qualitative description of the index level.
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub record_desc: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UvReading {
    pub place: String,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub desc: Option<String>,
}

/// The past-hour rainfall block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rainfall {
    pub data: Vec<RainfallReading>,
    #[serde(default)]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub end_time: Option<DateTime<FixedOffset>>,
}

/// Rainfall range at one station. `max` is absent when the gauge is under
/// maintenance (`main` carries the feed's maintenance flag).
#[derive(Debug, Clone, Deserialize)]
pub struct RainfallReading {
    pub place: String,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub main: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> CurrentConditions {
        serde_json::from_value(json!({
            "temperature": {
                "data": [
                    {"place": "香港天文台", "value": 28.3, "unit": "C"},
                    {"place": "京士柏", "value": 28.1, "unit": "C"},
                    {"place": "沙田", "unit": "C"}
                ],
                "recordTime": "2026-08-07T11:00:00+08:00"
            },
            "humidity": {
                "data": [{"unit": "percent", "value": 81, "place": "香港天文台"}],
                "recordTime": "2026-08-07T11:00:00+08:00"
            },
            "uvindex": {
                "data": [{"place": "京士柏", "value": 4, "desc": "中"}],
                "recordDesc": "過去一小時"
            },
            "warningMessage": ["酷熱天氣警告現正生效"],
            "rainfall": {
                "data": [
                    {"unit": "毫米", "place": "沙田", "max": 5, "min": 0, "main": "FALSE"},
                    {"unit": "毫米", "place": "京士柏", "main": "TRUE"}
                ],
                "startTime": "2026-08-07T10:00:00+08:00",
                "endTime": "2026-08-07T11:00:00+08:00"
            },
            "updateTime": "2026-08-07T11:02:00+08:00"
        }))
        .unwrap()
    }

    #[test]
    fn temperature_lookup_matches_exact_place() {
        let current = fixture();
        assert_eq!(current.temperature_at("京士柏"), Some(28.1));
        assert_eq!(current.temperature_at("打鼓嶺"), None);
    }

    #[test]
    fn reading_without_value_is_absent() {
        let current = fixture();
        assert_eq!(current.temperature_at("沙田"), None);
    }

    #[test]
    fn reporting_stations_preserve_feed_order() {
        let current = fixture();
        let names: Vec<&str> = current.reporting_stations().collect();
        assert_eq!(names, ["香港天文台", "京士柏", "沙田"]);
    }

    #[test]
    fn rainfall_lookup_keeps_the_raw_range() {
        let current = fixture();
        let sha_tin = current.rainfall_at("沙田").unwrap();
        assert_eq!(sha_tin.max, Some(5.0));
        assert_eq!(sha_tin.min, Some(0.0));
        // gauge under maintenance: entry exists but has no upper bound
        let kings_park = current.rainfall_at("京士柏").unwrap();
        assert_eq!(kings_park.max, None);
        assert!(current.rainfall_at("長洲").is_none());
    }

    #[test]
    fn empty_string_blocks_deserialize_as_absent() {
        let current: CurrentConditions = serde_json::from_value(json!({
            "temperature": {"data": [{"place": "香港天文台", "value": 17.0, "unit": "C"}]},
            "humidity": {"data": [{"unit": "percent", "value": 60, "place": "香港天文台"}]},
            "uvindex": "",
            "warningMessage": "",
            "updateTime": "2026-01-12T22:02:00+08:00"
        }))
        .unwrap();
        assert!(current.uvindex.is_none());
        assert!(current.warning_message.is_none());
        assert!(current.rainfall.is_none());
    }

    #[test]
    fn update_time_parses_with_the_feed_offset() {
        let current = fixture();
        let update_time = current.update_time.unwrap();
        assert_eq!(update_time.offset().local_minus_utc(), 8 * 3600);
    }
}
