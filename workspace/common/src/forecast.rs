use chrono::{NaiveDate, NaiveDateTime};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::converters;

/// Conditions at the observation time, from the response's `current` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Observation time, already expressed in the location's own timezone.
    #[serde(with = "converters::iso_minute")]
    pub time: NaiveDateTime,
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    #[serde(with = "converters::int_bool")]
    pub is_day: bool,
    pub precipitation: f64,
    pub rain: f64,
    pub showers: f64,
    pub weather_code: u8,
    pub wind_speed_10m: f64,
}

/// Hour-indexed forecast series. All vectors are parallel: entry `i` of each
/// describes the same hour. Times are timezone-local and ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    #[serde(with = "converters::iso_minute_vec")]
    pub time: Vec<NaiveDateTime>,
    pub temperature_2m: Vec<f64>,
    pub weather_code: Vec<u8>,
    #[serde(with = "converters::int_bool_vec")]
    pub is_day: Vec<bool>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// True when every parallel vector has the same length as `time`.
    pub fn is_consistent(&self) -> bool {
        let n = self.time.len();
        self.temperature_2m.len() == n && self.weather_code.len() == n && self.is_day.len() == n
    }
}

/// Day-indexed aggregates, one entry per forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySeries {
    pub time: Vec<NaiveDate>,
    pub weather_code: Vec<u8>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub wind_speed_10m_max: Vec<f64>,
}

impl DailySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// One full forecast bundle as returned by the forecast endpoint. Replaced
/// wholesale on every successful fetch; never mutated incrementally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastData {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name resolved by the API (`timezone=auto`). Authoritative
    /// for local-time rendering until the next successful fetch.
    pub timezone: String,
    pub current: CurrentConditions,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

impl ForecastData {
    /// Logs and reports whether the series are well-formed enough to chart.
    pub fn check_shape(&self) -> bool {
        if !self.hourly.is_consistent() {
            warn!(
                "Hourly series has mismatched parallel vectors ({} times)",
                self.hourly.len()
            );
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Trimmed-down Open-Meteo response: hour-precision timestamps, 0/1 flags.
    const FIXTURE: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.41,
        "timezone": "Europe/Berlin",
        "current": {
            "time": "2024-03-01T14:00",
            "temperature_2m": 11.3,
            "relative_humidity_2m": 62.0,
            "is_day": 1,
            "precipitation": 0.0,
            "rain": 0.0,
            "showers": 0.0,
            "weather_code": 2,
            "wind_speed_10m": 14.8
        },
        "hourly": {
            "time": ["2024-03-01T00:00", "2024-03-01T01:00", "2024-03-01T02:00"],
            "temperature_2m": [6.1, 5.8, 5.5],
            "weather_code": [3, 3, 61],
            "is_day": [0, 0, 0]
        },
        "daily": {
            "time": ["2024-03-01", "2024-03-02"],
            "weather_code": [61, 3],
            "temperature_2m_max": [11.4, 9.2],
            "temperature_2m_min": [4.9, 3.1],
            "precipitation_sum": [2.4, 0.0],
            "wind_speed_10m_max": [22.0, 17.5]
        }
    }"#;

    #[test]
    fn deserializes_wire_fixture() {
        let data: ForecastData = serde_json::from_str(FIXTURE).expect("fixture should parse");

        assert_eq!(data.timezone, "Europe/Berlin");
        assert_eq!(data.current.weather_code, 2);
        assert!(data.current.is_day);
        assert_eq!(
            data.current.time,
            NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(14, 0, 0)
                .unwrap()
        );

        assert_eq!(data.hourly.len(), 3);
        assert!(data.hourly.is_consistent());
        assert_eq!(data.hourly.is_day, vec![false, false, false]);
        assert_eq!(data.hourly.time[2].format("%H:%M").to_string(), "02:00");

        assert_eq!(data.daily.len(), 2);
        assert_eq!(
            data.daily.time[1],
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
        assert!(data.check_shape());
    }

    #[test]
    fn shape_check_flags_ragged_hourly_vectors() {
        let mut data: ForecastData = serde_json::from_str(FIXTURE).unwrap();
        data.hourly.temperature_2m.pop();

        assert!(!data.hourly.is_consistent());
        assert!(!data.check_shape());
    }
}
