pub mod forecast;
pub mod geocoding;

use gloo_net::http::Request;
use serde::Deserialize;

/// Common GET-and-decode helper for the public weather APIs.
///
/// These endpoints return their payload directly — no envelope — so decoding
/// is a single step. Errors are stringly typed at this boundary: everything
/// the UI does with them is log and display.
pub async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: for<'de> Deserialize<'de>,
{
    log::debug!("GET request to: {}", url);

    let response = Request::get(url).send().await.map_err(|e| {
        let error_msg = format!("Request failed: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })?;

    if !response.ok() {
        let error_msg = format!("HTTP error: {}", response.status());
        log::error!("GET {} - {}", url, error_msg);
        return Err(error_msg);
    }

    log::trace!("GET {} - Response received, parsing JSON", url);
    let payload: T = response.json().await.map_err(|e| {
        let error_msg = format!("Failed to parse response: {}", e);
        log::error!("GET {} - {}", url, error_msg);
        error_msg
    })?;

    log::trace!("GET {} - Success", url);
    Ok(payload)
}
