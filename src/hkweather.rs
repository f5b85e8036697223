//! This module provides the main entry point for building Hong Kong weather
//! reports: fetching the Observatory feeds, resolving the station nearest to
//! the user, and assembling the result into plain report data.

use crate::error::HkWeatherError;
use crate::location::{acquire_location, LocationError, LocationProvider};
use crate::report::WeatherReport;
use crate::stations::catalog::StationCatalog;
use crate::stations::locate_station::find_nearest;
use crate::types::current::CurrentConditions;
use crate::weather_data::fetcher::WeatherFetcher;
use bon::bon;
use log::{info, warn};

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64`.
///
/// # Examples
///
/// ```
/// use hkweather::LatLon;
///
/// let observatory = LatLon(22.302, 114.174);
/// assert_eq!(observatory.0, 22.302); // Latitude
/// assert_eq!(observatory.1, 114.174); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The main client for building Hong Kong weather reports.
///
/// Holds the feed fetcher and the station catalog. Create one with
/// [`HkWeather::new()`] for the built-in Hong Kong table, or
/// [`HkWeather::with_catalog()`] to inject a different table (tests swap in
/// synthetic catalogs this way).
///
/// # Examples
///
/// ```no_run
/// # use hkweather::{HkWeather, HkWeatherError, LatLon};
/// # async fn run() -> Result<(), HkWeatherError> {
/// let client = HkWeather::new();
/// let report = client.report().location(LatLon(22.294, 114.172)).call().await?;
/// if let Some(station) = &report.station {
///     println!("{}: {} °C", station.name, station.temperature_text());
/// }
/// # Ok(())
/// # }
/// ```
pub struct HkWeather {
    fetcher: WeatherFetcher,
    catalog: StationCatalog,
}

/// The result of [`HkWeather::report_auto`]: the report, plus the location
/// failure (if any) so a rendering sink can explain why the personalized
/// section is missing.
#[derive(Debug)]
pub struct AutoReport {
    pub report: WeatherReport,
    pub location_failure: Option<LocationError>,
}

#[bon]
impl HkWeather {
    /// A client over the built-in Hong Kong station catalog.
    pub fn new() -> Self {
        Self::with_catalog(StationCatalog::hong_kong())
    }

    /// A client over a caller-supplied catalog.
    pub fn with_catalog(catalog: StationCatalog) -> Self {
        Self {
            fetcher: WeatherFetcher::new(),
            catalog,
        }
    }

    /// Builds a weather report.
    ///
    /// Fetches the current-conditions and forecast feeds concurrently and
    /// joins them; the first failure aborts the whole flow (there is no
    /// retry and no partial report). With a location, the report is
    /// personalized to the nearest catalog station among the stations
    /// currently reporting a temperature.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.location(LatLon)`: Optional. The caller's coordinates. When
    ///   omitted, the report carries only the territory-wide sections.
    ///
    /// # Errors
    ///
    /// Returns [`HkWeatherError::WeatherData`] when either feed fetch fails.
    /// Returns [`HkWeatherError::NoStationResolved`] when a location was
    /// given but no reporting station matches the catalog; in the
    /// personalized flow that absence is fatal rather than silently ignored.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use hkweather::{HkWeather, HkWeatherError, LatLon};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), HkWeatherError> {
    /// let client = HkWeather::new();
    ///
    /// // Territory-wide report only
    /// let overview = client.report().call().await?;
    /// assert!(overview.station.is_none());
    ///
    /// // Personalized to the Tsim Sha Tsui waterfront
    /// let personalized = client
    ///     .report()
    ///     .location(LatLon(22.294, 114.172))
    ///     .call()
    ///     .await?;
    /// assert!(personalized.station.is_some());
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn report(&self, location: Option<LatLon>) -> Result<WeatherReport, HkWeatherError> {
        let (current, forecast) =
            tokio::try_join!(self.fetcher.current(), self.fetcher.local_forecast())?;

        let station = match location {
            Some(target) => match self.nearest_reporting_station(target, &current) {
                Some(name) => {
                    info!("Resolved nearest reporting station: {}", name);
                    Some(name)
                }
                None => {
                    return Err(HkWeatherError::NoStationResolved {
                        lat: target.0,
                        lon: target.1,
                    })
                }
            },
            None => None,
        };

        Ok(WeatherReport::from_feeds(&current, &forecast, station))
    }

    /// Builds a report for wherever `provider` says the user is.
    ///
    /// The provider runs under the bounded wait ([`crate::LOCATION_TIMEOUT`]).
    /// On success this is the personalized flow of [`HkWeather::report`]; on
    /// any location failure the territory-wide report is built instead and
    /// the failure is preserved on the returned [`AutoReport`], so the sink
    /// can tell a declined permission apart from a timeout.
    pub async fn report_auto(
        &self,
        provider: &impl LocationProvider,
    ) -> Result<AutoReport, HkWeatherError> {
        match acquire_location(provider).await {
            Ok(location) => {
                let report = self.report().location(location).call().await?;
                Ok(AutoReport {
                    report,
                    location_failure: None,
                })
            }
            Err(failure) => {
                warn!(
                    "Location unavailable ({}), falling back to the overview report",
                    failure
                );
                let report = self.report().call().await?;
                Ok(AutoReport {
                    report,
                    location_failure: Some(failure),
                })
            }
        }
    }

    /// The resolution step of the personalized flow: candidate names are the
    /// stations currently reporting a temperature, in feed order.
    fn nearest_reporting_station<'c>(
        &self,
        target: LatLon,
        current: &'c CurrentConditions,
    ) -> Option<&'c str> {
        find_nearest(target, current.reporting_stations(), &self.catalog)
    }
}

impl Default for HkWeather {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn current_fixture() -> CurrentConditions {
        serde_json::from_value(json!({
            "temperature": {
                "data": [
                    {"place": "香港天文台", "value": 28.3, "unit": "C"},
                    {"place": "京士柏", "value": 28.1, "unit": "C"},
                    {"place": "沙田", "value": 27.5, "unit": "C"},
                    {"place": "天氣測試場", "value": 30.0, "unit": "C"}
                ]
            },
            "humidity": {"data": [{"unit": "percent", "value": 81, "place": "香港天文台"}]},
            "updateTime": "2026-08-07T11:02:00+08:00"
        }))
        .unwrap()
    }

    #[test]
    fn resolver_prefers_the_closest_reporting_station() {
        let client = HkWeather::new();
        let current = current_fixture();
        // Sha Tin town centre
        let got = client.nearest_reporting_station(LatLon(22.39, 114.19), &current);
        assert_eq!(got, Some("沙田"));
    }

    #[test]
    fn names_outside_the_catalog_never_resolve() {
        let client = HkWeather::new();
        let current = current_fixture();
        // 天氣測試場 is reporting but unknown to the catalog; the known
        // stations still win.
        let got = client.nearest_reporting_station(LatLon(22.302, 114.174), &current);
        assert_eq!(got, Some("香港天文台"));
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let client = HkWeather::with_catalog(StationCatalog::from_entries(std::iter::empty()));
        let current = current_fixture();
        let got = client.nearest_reporting_station(LatLon(22.302, 114.174), &current);
        assert_eq!(got, None);
    }
}
