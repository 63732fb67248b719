//! Trend regression result.

use serde::{Deserialize, Serialize};

/// Result of fitting `value = slope * index + intercept` to a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    // ========== Coefficients ==========
    /// Change in value per period.
    pub slope: f64,

    /// Fitted value at index 0.
    pub intercept: f64,

    // ========== Fit Statistics ==========
    /// Coefficient of determination (R²).
    pub r_squared: f64,

    /// Residual standard error, `sqrt(SSres / (n - 2))`.
    pub std_error: f64,

    /// Legacy 95% margin, `z * std_error * se`.
    ///
    /// `se` is the informal `sqrt(1/n + (ΣX - ΣX/n)² / ΣX²)` factor the
    /// dashboard has always shown. It is not a textbook prediction interval;
    /// use [`crate::inference::compute_interval`] for that.
    pub confidence_margin: f64,

    /// Number of observations the line was fit to.
    pub n_observations: usize,
}

impl RegressionResult {
    /// Residual degrees of freedom (n - 2).
    pub fn residual_df(&self) -> usize {
        self.n_observations.saturating_sub(2)
    }

    /// Index of the last observation the line was fit to.
    pub fn base_index(&self) -> usize {
        self.n_observations.saturating_sub(1)
    }

    /// Value of the fitted line at `index`. Indices past the series extrapolate.
    pub fn value_at(&self, index: f64) -> f64 {
        self.intercept + self.slope * index
    }

    /// Mean squared error, `std_error²`.
    pub fn mse(&self) -> f64 {
        self.std_error * self.std_error
    }
}
