//! WMO weather-code classification and time-of-day buckets.

use serde::{Deserialize, Serialize};

/// Base URL of the Basmilius weather icon set (fill/3D style).
pub const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/basmilius/weather-icons/dev/design/fill/final/";

/// Condition group for an Open-Meteo WMO weather interpretation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl Condition {
    /// Classify a WMO code. Total over `u8`: unmapped codes read as clear.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Condition::Clear,
            1 | 2 => Condition::PartlyCloudy,
            3 => Condition::Overcast,
            45 | 48 => Condition::Fog,
            51 | 53 | 55 | 61 | 63 | 65 | 80 | 81 | 82 => Condition::Rain,
            71 | 73 | 75 | 77 | 85 | 86 => Condition::Snow,
            95 | 96 | 99 => Condition::Thunderstorm,
            _ => Condition::Clear,
        }
    }

    /// Display text. Independent of day or night.
    pub fn description(self) -> &'static str {
        match self {
            Condition::Clear => "Clear Sky",
            Condition::PartlyCloudy => "Partly Cloudy",
            Condition::Overcast => "Overcast",
            Condition::Fog => "Fog",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
            Condition::Thunderstorm => "Thunderstorm",
        }
    }

    /// Icon file stem. Only clear and partly-cloudy art has a night variant.
    pub fn icon_stem(self, is_day: bool) -> &'static str {
        match (self, is_day) {
            (Condition::Clear, true) => "clear-day",
            (Condition::Clear, false) => "clear-night",
            (Condition::PartlyCloudy, true) => "partly-cloudy-day",
            (Condition::PartlyCloudy, false) => "partly-cloudy-night",
            (Condition::Overcast, _) => "overcast",
            (Condition::Fog, _) => "fog",
            (Condition::Rain, _) => "rain",
            (Condition::Snow, _) => "snow",
            (Condition::Thunderstorm, _) => "thunderstorms",
        }
    }

    pub fn icon_url(self, is_day: bool) -> String {
        format!("{}{}.svg", ICON_BASE_URL, self.icon_stem(is_day))
    }
}

/// Coarse time-of-day bucket driving the ambient background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayPart {
    Morning,
    Day,
    Night,
}

impl DayPart {
    pub fn from_hour(hour: u32) -> Self {
        if (5..11).contains(&hour) {
            DayPart::Morning
        } else if (11..18).contains(&hour) {
            DayPart::Day
        } else {
            DayPart::Night
        }
    }

    /// Body class selecting the matching gradient/star styling.
    pub fn css_class(self) -> &'static str {
        match self {
            DayPart::Morning => "bg-morning",
            DayPart::Day => "bg-day",
            DayPart::Night => "bg-night",
        }
    }

    pub fn video_source(self) -> &'static str {
        match self {
            DayPart::Morning => "bg-morning.mp4",
            DayPart::Day => "bg-day.mp4",
            DayPart::Night => "bg-night.mp4",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_documented_code_bands() {
        assert_eq!(Condition::from_code(0), Condition::Clear);
        assert_eq!(Condition::from_code(1), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(2), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(3), Condition::Overcast);
        assert_eq!(Condition::from_code(45), Condition::Fog);
        assert_eq!(Condition::from_code(61), Condition::Rain);
        assert_eq!(Condition::from_code(82), Condition::Rain);
        assert_eq!(Condition::from_code(77), Condition::Snow);
        assert_eq!(Condition::from_code(86), Condition::Snow);
        assert_eq!(Condition::from_code(99), Condition::Thunderstorm);
    }

    #[test]
    fn unmapped_codes_fall_back_to_clear() {
        assert_eq!(Condition::from_code(200), Condition::Clear);
        assert_eq!(Condition::from_code(200).description(), "Clear Sky");
    }

    #[test]
    fn day_flag_selects_icon_variant_but_not_description() {
        assert_eq!(Condition::from_code(0).icon_stem(true), "clear-day");
        assert_eq!(Condition::from_code(0).icon_stem(false), "clear-night");
        assert_eq!(Condition::from_code(2).icon_stem(false), "partly-cloudy-night");
        assert_eq!(Condition::from_code(61).icon_stem(true), "rain");
        assert_eq!(Condition::from_code(61).icon_stem(false), "rain");
        assert!(Condition::from_code(0).icon_url(true).ends_with("clear-day.svg"));
    }

    #[test]
    fn day_part_boundaries() {
        assert_eq!(DayPart::from_hour(4), DayPart::Night);
        assert_eq!(DayPart::from_hour(5), DayPart::Morning);
        assert_eq!(DayPart::from_hour(10), DayPart::Morning);
        assert_eq!(DayPart::from_hour(11), DayPart::Day);
        assert_eq!(DayPart::from_hour(17), DayPart::Day);
        assert_eq!(DayPart::from_hour(18), DayPart::Night);
        assert_eq!(DayPart::from_hour(23), DayPart::Night);
    }

    #[test]
    fn day_part_assets_line_up() {
        assert_eq!(DayPart::Morning.css_class(), "bg-morning");
        assert_eq!(DayPart::Day.video_source(), "bg-day.mp4");
        assert_eq!(DayPart::Night.video_source(), "bg-night.mp4");
    }
}
