//! Residual diagnostics for a fitted trend.

use crate::engines::{FittedLinear, FittedRegressor};
use faer::Col;
use serde::{Deserialize, Serialize};

/// Actual against fitted value at one observed index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FittedRow {
    pub index: usize,
    pub actual: f64,
    pub fitted: f64,
    pub residual: f64,
}

/// In-sample table of actual, fitted and residual values.
pub fn fitted_table(fitted: &FittedLinear) -> Vec<FittedRow> {
    let values = fitted.fitted_values();
    let residuals = fitted.residuals();

    (0..values.nrows())
        .map(|i| FittedRow {
            index: i,
            actual: values[i] + residuals[i],
            fitted: values[i],
            residual: residuals[i],
        })
        .collect()
}

/// Residuals divided by the fit's residual standard error.
///
/// A perfect fit has a zero standard error; its residuals are all zero
/// and are returned as zeros.
pub fn standardized_residuals(fitted: &FittedLinear) -> Col<f64> {
    let residuals = fitted.residuals();
    let s = fitted.result().std_error;

    if s <= 0.0 || !s.is_finite() {
        return Col::zeros(residuals.nrows());
    }
    Col::from_fn(residuals.nrows(), |i| residuals[i] / s)
}

/// Indices whose standardized residual exceeds `threshold` in absolute value.
pub fn residual_outliers(standardized: &Col<f64>, threshold: f64) -> Vec<usize> {
    standardized
        .iter()
        .enumerate()
        .filter(|(_, &r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::{LinearRegressor, Regressor};

    #[test]
    fn test_fitted_table_reconstructs_actuals() {
        let series = [1.0, 3.0, 2.0, 5.0, 4.0];
        let fitted = LinearRegressor::new().fit(&series).unwrap();

        let rows = fitted_table(&fitted);
        assert_eq!(rows.len(), 5);
        for (row, &y) in rows.iter().zip(series.iter()) {
            assert!((row.actual - y).abs() < 1e-12);
            assert!((row.fitted + row.residual - y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_standardized_sum_of_squares() {
        // Σ(r/s)² = SSres / (SSres / (n - 2)) = n - 2
        let series = [1.0, 3.0, 2.0, 5.0, 4.0, 7.0, 6.0];
        let fitted = LinearRegressor::new().fit(&series).unwrap();

        let z = standardized_residuals(&fitted);
        let ss: f64 = z.iter().map(|v| v * v).sum();
        assert!((ss - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_outlier_detection() {
        let mut series: Vec<f64> = (0..12).map(|i| i as f64 + 0.1 * ((i % 3) as f64)).collect();
        series[6] += 8.0;
        let fitted = LinearRegressor::new().fit(&series).unwrap();

        let z = standardized_residuals(&fitted);
        assert_eq!(residual_outliers(&z, 2.0), vec![6]);
    }
}
