//! Bundled reference datasets.
//!
//! These are the fixed tables the dashboard ships with. Callers with their own
//! data build [`crate::core::HistoricalSeries`] and [`crate::core::CityTable`]
//! values directly.

mod historical;
mod revaluation;

pub use historical::historical_series;
pub use revaluation::{land_revaluation_2024, region_factors};
