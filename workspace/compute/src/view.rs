//! View models for the day selection: what the hero card and the weekly
//! list show, and how the chart windows, once a day is picked.

use chrono::{NaiveDate, NaiveDateTime};

use common::{Condition, DailySeries, ForecastData};

use crate::window::WindowMode;

/// Values the hero card shows for the selected day.
///
/// Day 0 reads the live observation; later days read the daily aggregates,
/// where the headline number is the day's maximum and humidity is not
/// reported.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub temperature: f64,
    pub weather_code: u8,
    pub is_day: bool,
    pub wind_speed: f64,
    pub humidity: Option<f64>,
    pub precipitation: f64,
    pub high: f64,
    pub low: f64,
}

impl DayOverview {
    pub fn condition(&self) -> Condition {
        Condition::from_code(self.weather_code)
    }
}

/// Build the hero view for a selected day. `None` when the index is out of
/// range or the daily vectors are ragged.
pub fn day_overview(data: &ForecastData, day_index: usize) -> Option<DayOverview> {
    let daily = &data.daily;
    let date = *daily.time.get(day_index)?;
    let high = *daily.temperature_2m_max.get(day_index)?;
    let low = *daily.temperature_2m_min.get(day_index)?;

    if day_index == 0 {
        let current = &data.current;
        Some(DayOverview {
            date,
            temperature: current.temperature_2m,
            weather_code: current.weather_code,
            is_day: current.is_day,
            wind_speed: current.wind_speed_10m,
            humidity: Some(current.relative_humidity_2m),
            precipitation: current.precipitation,
            high,
            low,
        })
    } else {
        Some(DayOverview {
            date,
            temperature: high,
            weather_code: *daily.weather_code.get(day_index)?,
            is_day: true,
            wind_speed: *daily.wind_speed_10m_max.get(day_index)?,
            humidity: None,
            precipitation: *daily.precipitation_sum.get(day_index)?,
            high,
            low,
        })
    }
}

/// Chart window for a selected day: day 0 charts the next 24 hours from
/// `now`, any other day charts that calendar day. An index past the daily
/// series also falls back to "now" rather than charting nothing.
pub fn window_mode_for_day(daily: &DailySeries, day_index: usize, now: NaiveDateTime) -> WindowMode {
    if day_index == 0 {
        return WindowMode::FromHour(now);
    }
    match daily.time.get(day_index) {
        Some(&date) => WindowMode::ForDate(date),
        None => WindowMode::FromHour(now),
    }
}

/// One row of the weekly forecast list.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub index: usize,
    /// "Today" for the first entry, abbreviated weekday otherwise.
    pub label: String,
    pub date: NaiveDate,
    pub weather_code: u8,
    pub high: i64,
    pub low: i64,
}

/// Rows for the weekly list, skipping any day whose aggregates are missing.
pub fn weekly_rows(daily: &DailySeries) -> Vec<WeeklyRow> {
    daily
        .time
        .iter()
        .enumerate()
        .filter_map(|(index, &date)| {
            Some(WeeklyRow {
                index,
                label: if index == 0 {
                    "Today".to_string()
                } else {
                    date.format("%a").to_string()
                },
                date,
                weather_code: *daily.weather_code.get(index)?,
                high: daily.temperature_2m_max.get(index)?.round() as i64,
                low: daily.temperature_2m_min.get(index)?.round() as i64,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CurrentConditions, HourlySeries};
    use chrono::Duration;

    fn fixture() -> ForecastData {
        let day1 = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let first_hour = day1.and_hms_opt(0, 0, 0).unwrap();
        let hours = 7 * 24;

        ForecastData {
            latitude: 52.52,
            longitude: 13.41,
            timezone: "Europe/Berlin".to_string(),
            current: CurrentConditions {
                time: day1.and_hms_opt(14, 0, 0).unwrap(),
                temperature_2m: 11.3,
                relative_humidity_2m: 62.0,
                is_day: true,
                precipitation: 0.2,
                rain: 0.2,
                showers: 0.0,
                weather_code: 2,
                wind_speed_10m: 14.8,
            },
            hourly: HourlySeries {
                time: (0..hours)
                    .map(|h| first_hour + Duration::hours(h as i64))
                    .collect(),
                temperature_2m: (0..hours).map(|h| (h % 24) as f64).collect(),
                weather_code: vec![2; hours],
                is_day: vec![true; hours],
            },
            daily: DailySeries {
                time: (0..7).map(|d| day1 + Duration::days(d)).collect(),
                weather_code: vec![2, 3, 61, 71, 0, 95, 45],
                temperature_2m_max: vec![11.4, 9.2, 7.6, 3.2, 8.9, 12.1, 10.0],
                temperature_2m_min: vec![4.9, 3.1, 1.4, -1.8, 2.0, 5.5, 4.2],
                precipitation_sum: vec![0.0, 0.4, 6.1, 3.8, 0.0, 12.6, 0.2],
                wind_speed_10m_max: vec![22.0, 17.5, 31.2, 28.0, 15.3, 40.1, 19.9],
            },
        }
    }

    #[test]
    fn today_reads_the_live_observation() {
        let data = fixture();
        let overview = day_overview(&data, 0).unwrap();

        assert_eq!(overview.temperature, 11.3);
        assert_eq!(overview.humidity, Some(62.0));
        assert_eq!(overview.weather_code, 2);
        assert_eq!(overview.high, 11.4);
        assert_eq!(overview.low, 4.9);
        assert_eq!(overview.condition(), Condition::PartlyCloudy);
    }

    #[test]
    fn future_days_read_the_daily_aggregates() {
        let data = fixture();
        let overview = day_overview(&data, 3).unwrap();

        assert_eq!(overview.temperature.round() as i64, 3);
        assert_eq!(overview.high.round() as i64, 3);
        assert_eq!(overview.low.round() as i64, -2);
        assert_eq!(overview.wind_speed, 28.0);
        assert_eq!(overview.humidity, None);
        assert_eq!(overview.precipitation, 3.8);
        // Aggregates carry no observation flag; future days use the day art.
        assert!(overview.is_day);
        assert_eq!(overview.condition(), Condition::Snow);
    }

    #[test]
    fn out_of_range_day_is_none() {
        assert!(day_overview(&fixture(), 7).is_none());
    }

    #[test]
    fn day_zero_windows_from_now_and_others_from_their_date() {
        let data = fixture();
        let now = data.current.time;

        assert_eq!(
            window_mode_for_day(&data.daily, 0, now),
            WindowMode::FromHour(now)
        );
        assert_eq!(
            window_mode_for_day(&data.daily, 3, now),
            WindowMode::ForDate(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
        );
        assert_eq!(
            window_mode_for_day(&data.daily, 99, now),
            WindowMode::FromHour(now)
        );
    }

    #[test]
    fn selecting_a_day_charts_its_midnight_slice() {
        let data = fixture();
        let mode = window_mode_for_day(&data.daily, 3, data.current.time);
        let window = crate::window::select_window(&data.hourly.time, mode);

        assert_eq!(window.start, 3 * 24);
        assert_eq!(window.len(), 24);
        assert_eq!(
            data.hourly.time[window.start].format("%H:%M").to_string(),
            "00:00"
        );
    }

    #[test]
    fn weekly_rows_round_and_label() {
        let data = fixture();
        let rows = weekly_rows(&data.daily);

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].label, "Today");
        assert_eq!(rows[1].label, "Sat");
        assert_eq!(rows[3].high, 3);
        assert_eq!(rows[3].low, -2);
        assert_eq!(rows[2].weather_code, 61);
    }
}
