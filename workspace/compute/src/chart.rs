//! Projection of a selected hourly slice into drawing coordinates.

use chrono::{NaiveDateTime, Timelike};

use common::HourlySeries;

use crate::error::{ComputeError, Result};
use crate::window::SelectionWindow;

/// Drawing surface for the temperature graph, in SVG user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
    /// Vertical padding: the curve stays `padding` away from both edges.
    pub padding: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 100.0,
            padding: 10.0,
        }
    }
}

impl PlotArea {
    /// Tooltip anchor for a point, as percentages of the plot box.
    pub fn anchor_percent(&self, point: &ChartPoint) -> (f64, f64) {
        (
            point.x / self.width * 100.0,
            point.y / self.height * 100.0,
        )
    }
}

/// One charted hour, projected into drawing coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub temperature: f64,
    pub timestamp: NaiveDateTime,
}

impl ChartPoint {
    /// Tooltip text: local time and temperature rounded to the nearest degree.
    pub fn tooltip_label(&self) -> String {
        format!(
            "{} • {}°",
            self.timestamp.format("%H:%M"),
            self.temperature.round() as i64
        )
    }
}

/// Project the window's temperatures into the plot area.
///
/// x runs from 0 to `width` with the first and last hour pinned to the
/// edges; a single-hour window sits at the horizontal centre. y is inverted
/// (drawing coordinates grow downward) and scaled so the observed min/max
/// touch the padded edges; a flat slice draws a flat line instead of
/// dividing by a zero range.
pub fn chart_points(
    hourly: &HourlySeries,
    window: &SelectionWindow,
    area: &PlotArea,
) -> Result<Vec<ChartPoint>> {
    if !hourly.is_consistent() {
        return Err(ComputeError::SeriesShape(format!(
            "{} times / {} temperatures",
            hourly.time.len(),
            hourly.temperature_2m.len()
        )));
    }
    if window.end > hourly.len() || window.start > window.end {
        return Err(ComputeError::WindowOutOfBounds(format!(
            "{}..{} into {} hours",
            window.start,
            window.end,
            hourly.len()
        )));
    }
    if window.is_empty() {
        return Ok(Vec::new());
    }

    let temps = &hourly.temperature_2m[window.start..window.end];
    let times = &hourly.time[window.start..window.end];

    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let n = temps.len();
    let span = area.height - 2.0 * area.padding;

    Ok(temps
        .iter()
        .zip(times)
        .enumerate()
        .map(|(i, (&temperature, &timestamp))| {
            let x = if n == 1 {
                area.width / 2.0
            } else {
                i as f64 / (n - 1) as f64 * area.width
            };
            let y = area.height - area.padding - (temperature - min) / range * span;
            ChartPoint {
                x,
                y,
                temperature,
                timestamp,
            }
        })
        .collect())
}

/// `M x,y L x,y …` polyline through the charted points.
pub fn line_path(points: &[ChartPoint]) -> String {
    let mut d = String::new();
    for (i, point) in points.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M {},{}", point.x, point.y));
        } else {
            d.push_str(&format!(" L {},{}", point.x, point.y));
        }
    }
    d
}

/// Line path closed down to the baseline, for the filled area under the curve.
pub fn area_path(points: &[ChartPoint], area: &PlotArea) -> String {
    if points.is_empty() {
        return String::new();
    }
    format!(
        "{} L {},{} L 0,{} Z",
        line_path(points),
        area.width,
        area.height,
        area.height
    )
}

/// Hour tick rendered under the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLabel {
    /// Index into the window, 0-based.
    pub offset: usize,
    /// Hour of day at that sample.
    pub hour: u32,
}

/// How many hour labels the axis aims for.
pub const AXIS_LABEL_TARGET: usize = 5;

/// Evenly strided hour labels for the window. The stride is floored at 1 so
/// windows shorter than the target label every hour instead of never
/// advancing.
pub fn axis_labels(
    times: &[NaiveDateTime],
    window: &SelectionWindow,
    target: usize,
) -> Vec<AxisLabel> {
    if window.is_empty() || window.end > times.len() {
        return Vec::new();
    }

    let len = window.len();
    let stride = (len / target.max(1)).max(1);

    times[window.start..window.end]
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(offset, t)| AxisLabel {
            offset,
            hour: t.hour(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{select_window, SelectionWindow, WindowMode};
    use chrono::NaiveDate;

    fn series(temps: &[f64]) -> HourlySeries {
        let first = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        HourlySeries {
            time: (0..temps.len())
                .map(|h| first + chrono::Duration::hours(h as i64))
                .collect(),
            temperature_2m: temps.to_vec(),
            weather_code: vec![0; temps.len()],
            is_day: vec![true; temps.len()],
        }
    }

    fn full_window(hourly: &HourlySeries) -> SelectionWindow {
        SelectionWindow {
            start: 0,
            end: hourly.len().min(SelectionWindow::MAX_HOURS),
        }
    }

    #[test]
    fn extreme_temperatures_touch_the_padded_edges() {
        let hourly = series(&[4.0, 9.0, 1.0, 6.0]);
        let area = PlotArea::default();
        let points = chart_points(&hourly, &full_window(&hourly), &area).unwrap();

        assert_eq!(points.len(), 4);
        // Coldest hour sits lowest (largest y), warmest highest.
        assert_eq!(points[2].y, area.height - area.padding);
        assert_eq!(points[1].y, area.padding);
        assert!(points[0].y > points[3].y);

        // First and last x pinned to the plot edges.
        assert_eq!(points[0].x, 0.0);
        assert_eq!(points[3].x, area.width);
    }

    #[test]
    fn y_ordering_tracks_temperature_ordering() {
        let hourly = series(&[3.0, 7.0, 5.0, 12.0, -2.0]);
        let points = chart_points(&hourly, &full_window(&hourly), &PlotArea::default()).unwrap();

        for a in &points {
            for b in &points {
                if a.temperature < b.temperature {
                    assert!(a.y > b.y, "{} should draw below {}", a.temperature, b.temperature);
                }
            }
        }
    }

    #[test]
    fn flat_slice_draws_a_flat_line() {
        let hourly = series(&[8.0; 24]);
        let points = chart_points(&hourly, &full_window(&hourly), &PlotArea::default()).unwrap();

        let first_y = points[0].y;
        assert!(points.iter().all(|p| p.y == first_y));
        assert!(points.iter().all(|p| p.y.is_finite()));
    }

    #[test]
    fn single_sample_is_centred() {
        let hourly = series(&[8.0]);
        let area = PlotArea::default();
        let points = chart_points(&hourly, &full_window(&hourly), &area).unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, area.width / 2.0);
        assert!(points[0].x.is_finite() && points[0].y.is_finite());
    }

    #[test]
    fn empty_window_yields_no_points() {
        let hourly = series(&[5.0, 6.0]);
        let missing = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
        let window = select_window(&hourly.time, WindowMode::ForDate(missing));

        let points = chart_points(&hourly, &window, &PlotArea::default()).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn ragged_series_is_rejected() {
        let mut hourly = series(&[5.0, 6.0, 7.0]);
        hourly.temperature_2m.pop();

        let result = chart_points(&hourly, &full_window(&hourly), &PlotArea::default());
        assert!(matches!(result, Err(ComputeError::SeriesShape(_))));
    }

    #[test]
    fn oversized_window_is_rejected() {
        let hourly = series(&[5.0, 6.0]);
        let window = SelectionWindow { start: 0, end: 10 };

        let result = chart_points(&hourly, &window, &PlotArea::default());
        assert!(matches!(result, Err(ComputeError::WindowOutOfBounds(_))));
    }

    #[test]
    fn paths_trace_every_point() {
        let hourly = series(&[4.0, 9.0, 1.0]);
        let area = PlotArea::default();
        let points = chart_points(&hourly, &full_window(&hourly), &area).unwrap();

        let line = line_path(&points);
        assert!(line.starts_with("M 0,"));
        assert_eq!(line.matches(" L ").count(), 2);

        let filled = area_path(&points, &area);
        assert!(filled.starts_with(&line));
        assert!(filled.ends_with("Z"));

        assert_eq!(area_path(&[], &area), "");
    }

    #[test]
    fn tooltip_label_rounds_to_whole_degrees() {
        let hourly = series(&[11.6]);
        let points = chart_points(&hourly, &full_window(&hourly), &PlotArea::default()).unwrap();

        assert_eq!(points[0].tooltip_label(), "00:00 • 12°");
    }

    #[test]
    fn anchor_percent_spans_the_plot_box() {
        let area = PlotArea::default();
        let hourly = series(&[1.0, 2.0]);
        let points = chart_points(&hourly, &full_window(&hourly), &area).unwrap();

        let (left, top) = area.anchor_percent(&points[1]);
        assert_eq!(left, 100.0);
        assert_eq!(top, area.padding / area.height * 100.0);
    }

    #[test]
    fn axis_labels_use_the_expected_stride() {
        let hourly = series(&[0.0; 24]);
        let labels = axis_labels(&hourly.time, &full_window(&hourly), AXIS_LABEL_TARGET);

        // 24 / 5 floors to a stride of 4.
        let offsets: Vec<usize> = labels.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0, 4, 8, 12, 16, 20]);
        assert_eq!(labels[1].hour, 4);
    }

    #[test]
    fn short_windows_label_every_hour() {
        let hourly = series(&[0.0, 1.0, 2.0]);
        let labels = axis_labels(&hourly.time, &full_window(&hourly), AXIS_LABEL_TARGET);

        assert_eq!(labels.len(), 3);
        let offsets: Vec<usize> = labels.iter().map(|l| l.offset).collect();
        assert_eq!(offsets, vec![0, 1, 2]);
    }

    #[test]
    fn axis_labels_for_empty_window_are_empty() {
        let hourly = series(&[0.0, 1.0]);
        let labels = axis_labels(&hourly.time, &SelectionWindow::empty(), AXIS_LABEL_TARGET);
        assert!(labels.is_empty());
    }
}
