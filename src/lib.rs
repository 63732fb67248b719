//! Statistics behind a land and housing valuation dashboard.
//!
//! The crate computes descriptive statistics over a historical price index,
//! fits a least-squares trend to it, projects an invested principal forward
//! along that trend with compounding inflation, and aggregates per-city land
//! revaluation tables for comparison.
//!
//! Every computation is a pure function of caller-owned input and fails with
//! an explicit [`engines::StatsError`] instead of producing NaN or infinity.
//!
//! # Example
//!
//! ```rust
//! use valuation_stats::prelude::*;
//!
//! let series = valuation_stats::data::historical_series();
//! let stats = DescriptiveStats::compute(&series.values())?;
//! let fitted = LinearRegressor::default().fit(&series.values())?;
//!
//! let params = SimulationParams::default();
//! let points = ProjectionEngine::default().project(fitted.result(), &params, 0.78)?;
//!
//! println!("growth = {:.1}%", stats.growth);
//! println!("R² = {:.4}", fitted.r_squared());
//! println!("final = {}", points[points.len() - 1].projected);
//! # Ok::<(), StatsError>(())
//! ```

pub mod core;
pub mod data;
pub mod diagnostics;
pub mod engines;
pub mod inference;
pub mod pipeline;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        CityPropertyStat, CityScore, CityTable, DescriptiveStats, HistoricalSeries,
        IntervalEstimate, IntervalType, Observation, ParamsError, ProjectionOptions,
        ProjectionPoint, ProjectionSummary, PropertyRecord, RegionFactors, RegionalAdjustment,
        RegressionResult, SimulationParams,
    };
    pub use crate::diagnostics::{fitted_table, residual_outliers, standardized_residuals, FittedRow};
    pub use crate::engines::{
        aggregate, aggregate_all, aggregate_city, aggregate_skipping_empty, comparison_scores,
        summarize, FittedLinear, FittedRegressor, LinearRegressor, ProjectionEngine, Regressor,
        StatsError,
    };
    pub use crate::pipeline::Dashboard;
}

pub use crate::core::{
    DescriptiveStats, HistoricalSeries, ProjectionPoint, RegressionResult, SimulationParams,
};
pub use crate::engines::{FittedRegressor, LinearRegressor, ProjectionEngine, Regressor, StatsError};
pub use crate::pipeline::Dashboard;
