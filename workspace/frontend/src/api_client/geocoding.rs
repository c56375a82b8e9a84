use serde::{Deserialize, Serialize};

use common::Place;

use crate::api_client;
use crate::settings;

/// One match from the Open-Meteo geocoding search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodingMatch {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

impl GeocodingMatch {
    pub fn place(&self) -> Place {
        Place::new(self.name.clone(), self.country.clone().unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    /// Absent entirely when the query matches nothing.
    results: Option<Vec<GeocodingMatch>>,
}

/// Look up a city by name. `Ok(None)` means the city was not found.
pub async fn search_city(city: &str) -> Result<Option<GeocodingMatch>, String> {
    log::trace!("Searching for city: {}", city);

    let url = format!(
        "{}/v1/search?name={}&count=1&language=en&format=json",
        settings::get_settings().geocoding_api,
        urlencoding::encode(city)
    );

    let response: GeocodingResponse = api_client::get_json(&url).await?;
    let first = response
        .results
        .and_then(|mut results| (!results.is_empty()).then(|| results.remove(0)));

    match &first {
        Some(m) => log::info!(
            "Geocoded '{}' to {:.2}, {:.2}",
            city,
            m.latitude,
            m.longitude
        ),
        None => log::info!("No geocoding results for '{}'", city),
    }

    Ok(first)
}

/// Reverse-geocoding payload. All fields are best-effort on the upstream
/// side, so each one may be absent or empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReverseGeocodeResult {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default, rename = "countryName")]
    pub country_name: Option<String>,
}

impl ReverseGeocodeResult {
    /// Display place: city, then locality, then a generic label.
    pub fn place(&self) -> Place {
        let name = self
            .city
            .clone()
            .filter(|c| !c.is_empty())
            .or_else(|| self.locality.clone().filter(|l| !l.is_empty()))
            .unwrap_or_else(|| "Current Location".to_string());
        Place::new(name, self.country_name.clone().unwrap_or_default())
    }
}

/// Resolve coordinates into a display name.
pub async fn reverse_geocode(latitude: f64, longitude: f64) -> Result<ReverseGeocodeResult, String> {
    log::trace!("Reverse geocoding {:.2}, {:.2}", latitude, longitude);

    let url = format!(
        "{}/data/reverse-geocode-client?latitude={}&longitude={}&localityLanguage=en",
        settings::get_settings().reverse_geocode_api,
        latitude,
        longitude
    );

    let result = api_client::get_json::<ReverseGeocodeResult>(&url).await;

    if let Err(ref e) = result {
        log::warn!("Reverse geocoding failed: {}", e);
    }

    result
}
