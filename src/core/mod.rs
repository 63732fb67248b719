//! Core types for valuation analysis.

mod city;
mod observation;
mod options;
mod params;
mod prediction;
mod projection;
mod region;
mod result;
mod stats;

pub use city::{CityPropertyStat, CityScore, CityTable, PropertyRecord};
pub use observation::{HistoricalSeries, Observation, MIN_SERIES_LEN};
pub use options::{ProjectionOptions, ProjectionOptionsBuilder, RegionalAdjustment};
pub use params::{ParamsError, SimulationParams, SimulationParamsBuilder, MAX_YEARS};
pub use prediction::{IntervalEstimate, IntervalType};
pub use projection::{ProjectionPoint, ProjectionSummary};
pub use region::{RegionFactors, DEFAULT_REGION_FACTOR};
pub use result::RegressionResult;
pub use stats::DescriptiveStats;
