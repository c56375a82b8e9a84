//! Domain types shared between the API client and the computation layer.
//! These structs mirror the Open-Meteo forecast payload so the frontend can
//! deserialize responses and hand them to `compute` without reshaping.

pub mod conditions;
pub mod converters;
mod forecast;
mod location;

pub use conditions::{Condition, DayPart, ICON_BASE_URL};
pub use forecast::{CurrentConditions, DailySeries, ForecastData, HourlySeries};
pub use location::Place;
