//! Margin and interval calculations around the trend line.

use crate::core::{IntervalEstimate, IntervalType, ParamsError, RegressionResult};
use crate::engines::StatsError;
use crate::utils::IndexSums;
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-tailed 95% critical value of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// Standard-error factor of the legacy margin.
///
/// `sqrt(1/n + (ΣX - ΣX/n)² / ΣX²)`
///
/// This is not the textbook prediction-interval factor, which uses
/// `(x₀ - x̄)²` for a specific point x₀. It is kept as is so the published
/// margin does not move.
pub fn legacy_se_factor(sums: &IndexSums) -> f64 {
    let n = sums.n as f64;
    let shift = sums.sum_x - sums.sum_x / n;
    (1.0 / n + shift * shift / sums.sum_x2).sqrt()
}

/// `z * std_error * se`.
pub fn legacy_margin(std_error: f64, se_factor: f64, z: f64) -> f64 {
    z * std_error * se_factor
}

/// Student-t interval at index `x0`.
///
/// Confidence: `s * sqrt(1/n + (x₀ - x̄)² / Sxx)`.
/// Prediction: `s * sqrt(1 + 1/n + (x₀ - x̄)² / Sxx)`.
/// Both use `n - 2` degrees of freedom.
pub fn compute_interval(
    result: &RegressionResult,
    sums: &IndexSums,
    x0: f64,
    interval_type: IntervalType,
    level: f64,
) -> Result<IntervalEstimate, StatsError> {
    if !(level > 0.0 && level < 1.0) {
        return Err(ParamsError::InvalidConfidenceLevel(level).into());
    }
    if !x0.is_finite() {
        return Err(StatsError::DegenerateInput("interval index is not finite"));
    }

    let df = result.residual_df() as f64;
    let sxx = sums.sxx();
    if df <= 0.0 || sxx <= 0.0 {
        return Err(StatsError::DegenerateInput(
            "interval needs positive residual degrees of freedom and index spread",
        ));
    }

    let n = sums.n as f64;
    let leverage = 1.0 / n + (x0 - sums.x_mean()).powi(2) / sxx;
    let se = match interval_type {
        IntervalType::Confidence => result.std_error * leverage.sqrt(),
        IntervalType::Prediction => result.std_error * (1.0 + leverage).sqrt(),
    };

    let t_dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|_| StatsError::DegenerateInput("invalid t-distribution parameters"))?;
    let t_crit = t_dist.inverse_cdf(1.0 - (1.0 - level) / 2.0);

    let fit = result.value_at(x0);
    let margin = t_crit * se;

    Ok(IntervalEstimate {
        x0,
        fit,
        lower: fit - margin,
        upper: fit + margin,
        se,
    })
}
