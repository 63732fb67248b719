//! Interval estimates around points of the fitted line.

use serde::{Deserialize, Serialize};

/// Type of interval to compute at a point of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IntervalType {
    /// Interval for the mean response at x₀.
    /// Narrower: only coefficient uncertainty.
    Confidence,

    /// Interval for a new observation at x₀.
    /// Wider: adds the residual variance.
    #[default]
    Prediction,
}

/// Point estimate and bounds at a single index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalEstimate {
    /// Index the estimate was taken at.
    pub x0: f64,
    /// Value of the fitted line at `x0`.
    pub fit: f64,
    pub lower: f64,
    pub upper: f64,
    /// Standard error used for the bounds.
    pub se: f64,
}

impl IntervalEstimate {
    /// Half-width of the interval.
    pub fn margin(&self) -> f64 {
        (self.upper - self.lower) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }
}
