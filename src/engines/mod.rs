//! Computation engines: descriptive statistics, trend regression,
//! projection and per-city aggregation.

pub mod aggregate;
pub mod descriptive;
pub mod projection;
mod regression;
mod traits;

pub use aggregate::{
    aggregate, aggregate_all, aggregate_city, aggregate_skipping_empty, comparison_scores,
};
pub use projection::{month_label, summarize, ProjectionEngine};
pub use regression::{FittedLinear, LinearRegressor, LinearRegressorBuilder};
pub use traits::{FittedRegressor, Regressor, StatsError};
