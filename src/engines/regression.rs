//! Simple least-squares trend over an indexed series.

use crate::core::{IntervalEstimate, IntervalType, ParamsError, RegressionResult, MIN_SERIES_LEN};
use crate::engines::descriptive::mean;
use crate::engines::traits::{FittedRegressor, Regressor, StatsError};
use crate::inference::{compute_interval, legacy_margin, legacy_se_factor, Z_95};
use crate::utils::{check_finite, check_values, IndexSums};
use faer::Col;
use log::debug;

/// Ordinary least squares on `(index, value)` pairs.
///
/// # Example
///
/// ```rust
/// use valuation_stats::engines::{FittedRegressor, LinearRegressor, Regressor};
///
/// let series: Vec<f64> = (0..10).map(|i| 7.0 + 3.0 * i as f64).collect();
/// let fitted = LinearRegressor::default().fit(&series)?;
///
/// assert!((fitted.slope() - 3.0).abs() < 1e-9);
/// assert!((fitted.intercept() - 7.0).abs() < 1e-9);
/// # Ok::<(), valuation_stats::engines::StatsError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    z_value: f64,
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self { z_value: Z_95 }
    }
}

impl LinearRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> LinearRegressorBuilder {
        LinearRegressorBuilder::default()
    }

    /// Critical value applied to the legacy margin.
    pub fn z_value(&self) -> f64 {
        self.z_value
    }
}

impl Regressor for LinearRegressor {
    type Fitted = FittedLinear;

    fn fit(&self, series: &[f64]) -> Result<Self::Fitted, StatsError> {
        if !(self.z_value.is_finite() && self.z_value > 0.0) {
            return Err(ParamsError::InvalidZValue(self.z_value).into());
        }
        // n - 2 residual degrees of freedom must stay positive
        check_values(series, MIN_SERIES_LEN)?;

        let sums = IndexSums::from_series(series);
        let n = sums.n as f64;

        let denominator = n * sums.sum_x2 - sums.sum_x * sums.sum_x;
        if denominator == 0.0 {
            return Err(StatsError::DegenerateInput("index values have zero variance"));
        }
        let slope = (n * sums.sum_xy - sums.sum_x * sums.sum_y) / denominator;
        let intercept = (sums.sum_y - slope * sums.sum_x) / n;

        let fitted_values = Col::from_fn(sums.n, |i| slope * i as f64 + intercept);
        let residuals = Col::from_fn(sums.n, |i| series[i] - fitted_values[i]);

        let y_mean = mean(series)?;
        let ss_res: f64 = residuals.iter().map(|&r| r * r).sum();
        let ss_tot: f64 = series.iter().map(|&y| (y - y_mean).powi(2)).sum();
        if ss_tot == 0.0 {
            return Err(StatsError::DegenerateInput(
                "series is constant, R² is undefined",
            ));
        }

        let r_squared = 1.0 - ss_res / ss_tot;
        let std_error = (ss_res / (n - 2.0)).sqrt();
        let se = legacy_se_factor(&sums);
        let confidence_margin = legacy_margin(std_error, se, self.z_value);
        check_finite(&[slope, intercept, r_squared, std_error, confidence_margin])?;

        debug!(
            "trend fit: n={} slope={slope:.6} intercept={intercept:.6} r2={r_squared:.6} margin={confidence_margin:.4}",
            sums.n
        );

        Ok(FittedLinear {
            result: RegressionResult {
                slope,
                intercept,
                r_squared,
                std_error,
                confidence_margin,
                n_observations: sums.n,
            },
            sums,
            fitted_values,
            residuals,
        })
    }
}

/// A fitted trend line together with its in-sample fit.
#[derive(Debug, Clone)]
pub struct FittedLinear {
    result: RegressionResult,
    sums: IndexSums,
    fitted_values: Col<f64>,
    residuals: Col<f64>,
}

impl FittedLinear {
    /// Line evaluated at each observed index.
    pub fn fitted_values(&self) -> &Col<f64> {
        &self.fitted_values
    }

    /// Observed minus fitted, per index.
    pub fn residuals(&self) -> &Col<f64> {
        &self.residuals
    }

    /// Index sums the fit was computed from.
    pub fn sums(&self) -> &IndexSums {
        &self.sums
    }

    /// Consume the fit, keeping only the scalar result.
    pub fn into_result(self) -> RegressionResult {
        self.result
    }
}

impl FittedRegressor for FittedLinear {
    fn predict(&self, x: &Col<f64>) -> Col<f64> {
        Col::from_fn(x.nrows(), |i| self.result.value_at(x[i]))
    }

    fn result(&self) -> &RegressionResult {
        &self.result
    }

    fn predict_with_interval(
        &self,
        x0: f64,
        interval: IntervalType,
        level: f64,
    ) -> Result<IntervalEstimate, StatsError> {
        compute_interval(&self.result, &self.sums, x0, interval, level)
    }
}

/// Builder for `LinearRegressor`.
#[derive(Debug, Clone, Default)]
pub struct LinearRegressorBuilder {
    regressor: LinearRegressor,
}

impl LinearRegressorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the critical value used for the legacy margin (default 1.96).
    pub fn z_value(mut self, z: f64) -> Self {
        self.regressor.z_value = z;
        self
    }

    pub fn build(self) -> LinearRegressor {
        self.regressor
    }
}
