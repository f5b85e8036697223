// demos/print_report.rs
use hkweather::{HkWeather, HkWeatherError, LatLon};

fn text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "N/A".to_string())
}

#[tokio::main]
async fn main() -> Result<(), HkWeatherError> {
    // Initialize logger to see informational messages
    // Set RUST_LOG=info (or debug, trace) environment variable to control level
    env_logger::init();

    // Tsim Sha Tsui waterfront; the Observatory headquarters station should win.
    let here = LatLon(22.294, 114.172);

    let client = HkWeather::new();
    let report = client.report().location(here).call().await?;

    if let Some(station) = &report.station {
        println!("根據您的位置所做的天氣報告 (數據來自最接近的 {} 氣象站)", station.name);
        println!("氣溫：{} °C", station.temperature_text());
        println!("過去一小時雨量：{}", station.rainfall_text());
        println!();
    }

    println!("香港整體天氣報告");
    println!("香港天文台總部氣溫：{} °C", text(report.overview.temperature));
    println!("相對濕度：{} %", text(report.overview.humidity));
    if let Some(uv) = &report.overview.uv_index {
        println!(
            "紫外線指數：{} ({})",
            text(uv.value),
            uv.desc.as_deref().unwrap_or("N/A")
        );
    }
    if report.overview.warnings.is_empty() {
        println!("天氣警告：現時沒有天氣警告生效。");
    } else {
        println!("天氣警告：");
        for warning in &report.overview.warnings {
            println!("  - {warning}");
        }
    }

    println!();
    println!("今日天氣預測");
    println!("天氣概況：{}", report.forecast.general_situation.as_deref().unwrap_or(""));
    println!("預測詳情：{}", report.forecast.forecast_desc.as_deref().unwrap_or(""));
    println!("展望：{}", report.forecast.outlook.as_deref().unwrap_or(""));

    if let Some(update_time) = report.update_time {
        println!();
        println!("即時天氣資料發布時間：{update_time}");
    }

    Ok(())
}
