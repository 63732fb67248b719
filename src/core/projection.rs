//! Projection output types.

use serde::{Deserialize, Serialize};

/// One year of a value projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    /// Years after the anchor month (0 = anchor).
    pub year_offset: u32,
    /// Short month and year, e.g. `"oct 2025"`.
    pub label: String,
    /// Projected value, rounded to whole currency units.
    pub projected: i64,
    /// Lower edge of the band.
    pub lower: i64,
    /// Upper edge of the band.
    pub upper: i64,
}

/// Headline figures of a projection: where it started, where it ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSummary {
    pub initial_value: f64,
    /// Projected value of the last point.
    pub final_value: i64,
    /// `final_value - initial_value`.
    pub gain: f64,
    /// `gain / initial_value * 100`.
    pub roi_percent: f64,
}
