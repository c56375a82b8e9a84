//! Serde adapters for Open-Meteo's wire formats.
//!
//! The forecast API emits hour-precision timestamps (`2024-03-01T14:00`,
//! no seconds, no offset — chrono's default `NaiveDateTime` format rejects
//! these) and encodes day/night flags as 0/1 integers. The adapters here
//! bridge both into the chrono/bool fields of the model types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Timestamp format used by the `current` and `hourly` blocks.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// `with`-module for a single hour-precision timestamp.
pub mod iso_minute {
    use super::*;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// `with`-module for a vector of hour-precision timestamps.
pub mod iso_minute_vec {
    use super::*;

    pub fn serialize<S>(values: &[NaiveDateTime], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|v| v.format(TIME_FORMAT).to_string()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|s| NaiveDateTime::parse_from_str(s, TIME_FORMAT).map_err(serde::de::Error::custom))
            .collect()
    }
}

/// `with`-module for a 0/1 integer flag.
pub mod int_bool {
    use super::*;

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

/// `with`-module for a vector of 0/1 integer flags.
pub mod int_bool_vec {
    use super::*;

    pub fn serialize<S>(values: &[bool], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().map(|v| u8::from(*v)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<u8>::deserialize(deserializer)?;
        Ok(raw.into_iter().map(|v| v != 0).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "iso_minute")]
        at: NaiveDateTime,
        #[serde(with = "iso_minute_vec")]
        times: Vec<NaiveDateTime>,
        #[serde(with = "int_bool")]
        flag: bool,
        #[serde(with = "int_bool_vec")]
        flags: Vec<bool>,
    }

    fn hour(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn round_trips_hour_precision_timestamps() {
        let json = r#"{
            "at": "2024-03-01T14:00",
            "times": ["2024-03-01T00:00", "2024-03-01T01:00"],
            "flag": 1,
            "flags": [0, 1, 1]
        }"#;

        let sample: Sample = serde_json::from_str(json).expect("sample should parse");
        assert_eq!(sample.at, hour(14));
        assert_eq!(sample.times, vec![hour(0), hour(1)]);
        assert!(sample.flag);
        assert_eq!(sample.flags, vec![false, true, true]);

        let back = serde_json::to_string(&sample).unwrap();
        assert!(back.contains("\"2024-03-01T14:00\""));
        assert!(back.contains("\"flag\":1"));
    }

    #[test]
    fn rejects_second_precision_timestamps() {
        let result: Result<Sample, _> = serde_json::from_str(
            r#"{"at": "2024-03-01T14:00:30", "times": [], "flag": 0, "flags": []}"#,
        );
        assert!(result.is_err());
    }
}
