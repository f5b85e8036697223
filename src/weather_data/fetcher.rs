//! Downloads the Observatory's open-data feeds.

use crate::types::current::CurrentConditions;
use crate::types::forecast::LocalForecast;
use crate::weather_data::error::WeatherDataError;
use log::{info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;

const API_URL: &str = "https://data.weather.gov.hk/weatherAPI/opendata/weather.php";
// The station catalog is keyed by traditional-Chinese names, so the feeds
// must be requested in the same language for candidate names to resolve.
const LANG: &str = "tc";

/// Fetches the two feed documents a report is built from. Holds one shared
/// HTTP client; no response is cached or retried.
#[derive(Debug, Clone)]
pub struct WeatherFetcher {
    client: Client,
}

impl WeatherFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    /// Uses a caller-configured HTTP client (proxies, timeouts).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Current observations (`rhrread`): per-station temperatures, humidity,
    /// the UV index, active warnings, and past-hour rainfall.
    pub async fn current(&self) -> Result<CurrentConditions, WeatherDataError> {
        self.fetch("rhrread").await
    }

    /// The local weather forecast (`flw`).
    pub async fn local_forecast(&self) -> Result<LocalForecast, WeatherDataError> {
        self.fetch("flw").await
    }

    async fn fetch<T: DeserializeOwned>(&self, data_type: &str) -> Result<T, WeatherDataError> {
        let url = format!("{API_URL}?dataType={data_type}&lang={LANG}");
        info!("Downloading {} feed from {}", data_type, url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WeatherDataError::NetworkRequest(url.clone(), e))?;
        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    WeatherDataError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    WeatherDataError::NetworkRequest(url, e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherDataError::BodyRead(url.clone(), e))?;
        serde_json::from_slice(&body).map_err(|e| WeatherDataError::JsonParse(url, e))
    }
}

impl Default for WeatherFetcher {
    fn default() -> Self {
        Self::new()
    }
}
