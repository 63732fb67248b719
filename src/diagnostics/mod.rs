//! Diagnostics for the fitted trend.
//!
//! # Example
//!
//! ```rust
//! use valuation_stats::diagnostics::{fitted_table, residual_outliers, standardized_residuals};
//! use valuation_stats::engines::{LinearRegressor, Regressor};
//!
//! let fitted = LinearRegressor::new().fit(&[100.0, 102.3, 105.8, 108.2, 112.4])?;
//! let rows = fitted_table(&fitted);
//! let outliers = residual_outliers(&standardized_residuals(&fitted), 3.0);
//!
//! assert_eq!(rows.len(), 5);
//! assert!(outliers.is_empty());
//! # Ok::<(), valuation_stats::engines::StatsError>(())
//! ```

mod residuals;

pub use residuals::{fitted_table, residual_outliers, standardized_residuals, FittedRow};
