//! Descriptive statistics result.

use serde::{Deserialize, Serialize};

/// Summary of a sequence of values, recomputed on demand.
///
/// Dispersion uses the population convention (divisor `n`): the series is the
/// whole population under study, not a sample of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescriptiveStats {
    /// Number of values.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation, `sqrt(variance)`.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// `max - min`.
    pub range: f64,
    /// Coefficient of variation in percent, `std_dev / mean * 100`.
    pub cv: f64,
    /// Total growth in percent from the minimum to the maximum, `(max - min) / min * 100`.
    pub growth: f64,
}
