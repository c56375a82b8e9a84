//! Selection of the charted slice of an hourly series.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use log::debug;

/// Half-open index range into an hourly series. At most [`MAX_HOURS`] long.
///
/// Invariant: `end - start == min(MAX_HOURS, hours available from start)`,
/// or zero when nothing matched.
///
/// [`MAX_HOURS`]: SelectionWindow::MAX_HOURS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionWindow {
    pub start: usize,
    pub end: usize,
}

impl SelectionWindow {
    /// One day of hourly samples.
    pub const MAX_HOURS: usize = 24;

    /// Window that selects nothing. Callers render no chart for it.
    pub fn empty() -> Self {
        Self { start: 0, end: 0 }
    }

    fn starting_at(start: usize, available: usize) -> Self {
        Self {
            start,
            end: (start + Self::MAX_HOURS).min(available),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How the charted slice is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowMode {
    /// Up to 24 hours starting at the sample matching the reference hour.
    FromHour(NaiveDateTime),
    /// The given calendar day, 00:00 through 23:00.
    ForDate(NaiveDate),
}

/// Select the slice to chart. A linear first-match scan: series hold at most
/// a week of hours, and "first match wins" is the contract.
///
/// `FromHour` degrades to the start of the series when the reference hour is
/// not present; `ForDate` yields an empty window when the day is absent.
pub fn select_window(times: &[NaiveDateTime], mode: WindowMode) -> SelectionWindow {
    match mode {
        WindowMode::FromHour(reference) => {
            let start = times
                .iter()
                .position(|t| t.date() == reference.date() && t.hour() == reference.hour())
                .unwrap_or_else(|| {
                    debug!(
                        "Reference hour {} not in series, charting from the first sample",
                        reference
                    );
                    0
                });
            SelectionWindow::starting_at(start, times.len())
        }
        WindowMode::ForDate(date) => match times.iter().position(|t| t.date() == date) {
            Some(start) => SelectionWindow::starting_at(start, times.len()),
            None => {
                debug!("No hourly samples for {}", date);
                SelectionWindow::empty()
            }
        },
    }
}
