//! Pure forecast windowing and chart building.
//!
//! Everything here is DOM-free: the frontend hands in the series it holds
//! and gets back data structures ready to render, which keeps the geometry
//! unit-testable without a browser.

pub mod chart;
pub mod error;
pub mod view;
pub mod window;

pub use chart::{
    area_path, axis_labels, chart_points, line_path, AxisLabel, ChartPoint, PlotArea,
    AXIS_LABEL_TARGET,
};
pub use error::{ComputeError, Result};
pub use view::{day_overview, weekly_rows, window_mode_for_day, DayOverview, WeeklyRow};
pub use window::{select_window, SelectionWindow, WindowMode};

use common::HourlySeries;

/// Everything the chart needs for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartGeometry {
    pub points: Vec<ChartPoint>,
    pub line: String,
    pub area: String,
    pub labels: Vec<AxisLabel>,
    pub plot: PlotArea,
}

/// Window the series and project it in one step.
///
/// `Ok(None)` means there is nothing to draw for this mode (an absent day,
/// or an empty series) and the caller should skip the chart entirely.
pub fn chart_geometry(
    hourly: &HourlySeries,
    mode: WindowMode,
    plot: PlotArea,
) -> Result<Option<ChartGeometry>> {
    let window = select_window(&hourly.time, mode);
    let points = chart_points(hourly, &window, &plot)?;
    if points.is_empty() {
        return Ok(None);
    }

    let line = line_path(&points);
    let area = area_path(&points, &plot);
    let labels = axis_labels(&hourly.time, &window, AXIS_LABEL_TARGET);

    Ok(Some(ChartGeometry {
        points,
        line,
        area,
        labels,
        plot,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn series(hours: usize) -> HourlySeries {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        HourlySeries {
            time: (0..hours)
                .map(|h| first + Duration::hours(h as i64))
                .collect(),
            temperature_2m: (0..hours).map(|h| (h % 24) as f64 / 2.0).collect(),
            weather_code: vec![0; hours],
            is_day: vec![true; hours],
        }
    }

    #[test]
    fn assembles_a_full_day_of_geometry() {
        let hourly = series(7 * 24);
        let reference = NaiveDate::from_ymd_opt(2024, 3, 2)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();

        let geometry = chart_geometry(&hourly, WindowMode::FromHour(reference), PlotArea::default())
            .unwrap()
            .expect("reference hour is in the series");

        assert_eq!(geometry.points.len(), 24);
        assert_eq!(geometry.points[0].timestamp, reference);
        assert!(geometry.line.starts_with("M 0,"));
        assert!(geometry.area.ends_with("Z"));
        assert_eq!(geometry.labels.len(), 6);
    }

    #[test]
    fn absent_day_renders_nothing() {
        let hourly = series(24);
        let missing = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();

        let geometry =
            chart_geometry(&hourly, WindowMode::ForDate(missing), PlotArea::default()).unwrap();
        assert!(geometry.is_none());
    }
}
