//! Error type and the regressor traits.

use crate::core::{IntervalEstimate, IntervalType, ParamsError, RegressionResult};
use faer::Col;
use thiserror::Error;

/// Errors that can occur in any of the computations.
///
/// All of them are local and deterministic: retrying with the same input
/// reproduces the same error, so callers should show a "not computable" state
/// rather than retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    #[error("insufficient data: need at least {needed} values, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    #[error("invalid parameter: {0}")]
    InvalidParameter(#[from] ParamsError),
}

/// A trend estimator over an ordered series.
///
/// The independent variable is the zero-based position of each value.
pub trait Regressor {
    /// The type of the fitted model.
    type Fitted: FittedRegressor;

    /// Fit the model to `series`.
    fn fit(&self, series: &[f64]) -> Result<Self::Fitted, StatsError>;
}

/// A fitted trend that can be evaluated anywhere along the index axis.
pub trait FittedRegressor {
    /// Evaluate the line at each index in `x`.
    fn predict(&self, x: &Col<f64>) -> Col<f64>;

    /// Access the regression result.
    fn result(&self) -> &RegressionResult;

    fn slope(&self) -> f64 {
        self.result().slope
    }

    fn intercept(&self) -> f64 {
        self.result().intercept
    }

    fn r_squared(&self) -> f64 {
        self.result().r_squared
    }

    /// R² of this line against another series indexed from 0.
    fn score(&self, series: &[f64]) -> Result<f64, StatsError> {
        if series.is_empty() {
            return Err(StatsError::InsufficientData { needed: 1, got: 0 });
        }
        let x = Col::from_fn(series.len(), |i| i as f64);
        let predictions = self.predict(&x);

        let y_mean = super::descriptive::mean(series)?;
        let tss: f64 = series.iter().map(|&yi| (yi - y_mean).powi(2)).sum();
        let rss: f64 = series
            .iter()
            .zip(predictions.iter())
            .map(|(&yi, &pi)| (yi - pi).powi(2))
            .sum();

        if tss == 0.0 {
            return Err(StatsError::DegenerateInput("total sum of squares is zero"));
        }
        Ok(1.0 - rss / tss)
    }

    /// Estimate at index `x0` with a textbook interval of the given type.
    ///
    /// `level` is the coverage, e.g. 0.95.
    fn predict_with_interval(
        &self,
        x0: f64,
        interval: IntervalType,
        level: f64,
    ) -> Result<IntervalEstimate, StatsError>;
}
