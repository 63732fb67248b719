//! Descriptive statistics over a value sequence.
//!
//! The free functions are shared with the regression engine (for the mean of
//! the response) and the city aggregator (for mean, dispersion and CV).

use crate::core::DescriptiveStats;
use crate::engines::StatsError;
use crate::utils::{check_finite, check_values};
use log::debug;

/// Arithmetic mean, kept within `[min, max]` of the values.
///
/// Summation rounding can push `sum / n` one ulp past the extremes
/// (`[0.1; 3]` sums to `0.30000000000000004`), so the result is clamped.
pub fn mean(values: &[f64]) -> Result<f64, StatsError> {
    check_values(values, 1)?;
    let raw = values.iter().sum::<f64>() / values.len() as f64;
    check_finite(&[raw])?;
    let (min, max) = min_max(values);
    Ok(raw.clamp(min, max))
}

/// Population variance (divisor `n`) around a precomputed `mean`.
pub fn population_variance(values: &[f64], mean: f64) -> Result<f64, StatsError> {
    check_values(values, 1)?;
    let ss: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    Ok(ss / values.len() as f64)
}

/// Standard deviation as a percentage of the mean.
pub fn coefficient_of_variation(std_dev: f64, mean: f64) -> Result<f64, StatsError> {
    if mean == 0.0 {
        return Err(StatsError::DegenerateInput(
            "mean is zero, coefficient of variation is undefined",
        ));
    }
    Ok(std_dev / mean * 100.0)
}

/// Total growth from `min` to `max` in percent.
pub fn growth_percent(min: f64, max: f64) -> Result<f64, StatsError> {
    if min == 0.0 {
        return Err(StatsError::DegenerateInput("minimum is zero, growth is undefined"));
    }
    Ok((max - min) / min * 100.0)
}

/// Smallest and largest value. Callers guarantee `values` is non-empty.
pub(crate) fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

impl DescriptiveStats {
    /// Summarize `values`.
    ///
    /// # Errors
    /// * `InsufficientData` if `values` is empty.
    /// * `DegenerateInput` if a value is not finite, if the mean or the
    ///   minimum is zero (CV and growth would divide by zero), or if an
    ///   intermediate sum overflows.
    pub fn compute(values: &[f64]) -> Result<Self, StatsError> {
        let mean = mean(values)?;
        let variance = population_variance(values, mean)?;
        let std_dev = variance.sqrt();
        let (min, max) = min_max(values);
        let cv = coefficient_of_variation(std_dev, mean)?;
        let growth = growth_percent(min, max)?;
        let range = max - min;
        check_finite(&[variance, cv, growth, range])?;

        debug!(
            "descriptive stats: n={} mean={mean:.4} std_dev={std_dev:.4} cv={cv:.2}%",
            values.len()
        );

        Ok(Self {
            n: values.len(),
            mean,
            variance,
            std_dev,
            min,
            max,
            range,
            cv,
            growth,
        })
    }
}
