// demos/auto_report.rs
use hkweather::{
    AutoReport, HkWeather, HkWeatherError, LatLon, LocationError, LocationProvider,
};
use std::future::Future;

/// Stands in for a real positioning service; answers as if the user had
/// declined the permission prompt.
struct DeniedLocation;

impl LocationProvider for DeniedLocation {
    fn current_location(&self) -> impl Future<Output = Result<LatLon, LocationError>> + Send {
        std::future::ready(Err(LocationError::PermissionDenied))
    }
}

#[tokio::main]
async fn main() -> Result<(), HkWeatherError> {
    env_logger::init();

    let client = HkWeather::new();
    let AutoReport {
        report,
        location_failure,
    } = client.report_auto(&DeniedLocation).await?;

    // The rendering side decides what each failure cause means to the user.
    match &location_failure {
        Some(LocationError::PermissionDenied) => {
            println!("您已拒絕位置資訊請求，將顯示香港整體天氣。")
        }
        Some(_) => println!("無法偵測您的位置，將顯示香港整體天氣。"),
        None => {}
    }

    assert!(report.station.is_none());
    println!(
        "香港天文台總部氣溫：{} °C",
        report
            .overview
            .temperature
            .map(|v| v.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    );
    println!(
        "天氣概況：{}",
        report.forecast.general_situation.as_deref().unwrap_or("")
    );

    Ok(())
}
