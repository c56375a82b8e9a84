use common::ForecastData;

use crate::api_client;
use crate::settings;

const CURRENT_FIELDS: &str =
    "temperature_2m,relative_humidity_2m,is_day,precipitation,rain,showers,weather_code,wind_speed_10m";
const HOURLY_FIELDS: &str = "temperature_2m,weather_code,is_day";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_sum,wind_speed_10m_max";

/// Fetch the full forecast bundle for a coordinate pair.
///
/// `timezone=auto` makes every timestamp in the response location-local; the
/// response's `timezone` field is authoritative for clock rendering until
/// the next successful fetch.
pub async fn get_forecast(latitude: f64, longitude: f64) -> Result<ForecastData, String> {
    log::trace!("Fetching forecast for {:.2}, {:.2}", latitude, longitude);

    let url = format!(
        "{}/v1/forecast?latitude={}&longitude={}&current={}&hourly={}&daily={}&timezone=auto&forecast_days={}",
        settings::get_settings().forecast_api,
        latitude,
        longitude,
        CURRENT_FIELDS,
        HOURLY_FIELDS,
        DAILY_FIELDS,
        settings::get_settings().forecast_days
    );

    let result = api_client::get_json::<ForecastData>(&url).await;

    match &result {
        Ok(data) => log::info!(
            "Forecast loaded: {} hourly samples, {} days, timezone {}",
            data.hourly.len(),
            data.daily.len(),
            data.timezone
        ),
        Err(e) => log::error!("Failed to fetch forecast: {}", e),
    }

    result
}
