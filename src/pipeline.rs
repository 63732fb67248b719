//! The full dashboard pipeline over one dataset.

use crate::core::{
    CityPropertyStat, CityScore, CityTable, DescriptiveStats, HistoricalSeries, ProjectionOptions,
    ProjectionPoint, ProjectionSummary, RegionFactors, RegressionResult, SimulationParams,
};
use crate::data;
use crate::engines::{
    aggregate, aggregate_skipping_empty, comparison_scores, summarize, FittedLinear,
    LinearRegressor, ProjectionEngine, Regressor, StatsError,
};

/// Descriptive statistics, trend, projections and city aggregates over a
/// single historical series and set of city tables.
///
/// Nothing is cached: each call recomputes from the owned data, which is
/// cheap for series of this size and keeps every call deterministic.
///
/// # Example
///
/// ```rust
/// use valuation_stats::core::SimulationParams;
/// use valuation_stats::pipeline::Dashboard;
///
/// let dashboard = Dashboard::bundled();
/// let params = SimulationParams::builder().years(5).build()?;
///
/// let points = dashboard.projection(&params)?;
/// assert_eq!(points.len(), 6);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    series: HistoricalSeries,
    regions: RegionFactors,
    cities: Vec<CityTable>,
    regressor: LinearRegressor,
    projector: ProjectionEngine,
}

impl Dashboard {
    pub fn new(series: HistoricalSeries, regions: RegionFactors, cities: Vec<CityTable>) -> Self {
        Self {
            series,
            regions,
            cities,
            regressor: LinearRegressor::default(),
            projector: ProjectionEngine::default(),
        }
    }

    /// Dashboard over the bundled price index and 2024 revaluation tables.
    pub fn bundled() -> Self {
        Self::new(
            data::historical_series(),
            data::region_factors(),
            data::land_revaluation_2024(),
        )
    }

    pub fn with_regressor(mut self, regressor: LinearRegressor) -> Self {
        self.regressor = regressor;
        self
    }

    pub fn with_projection_options(mut self, options: ProjectionOptions) -> Self {
        self.projector = ProjectionEngine::new(options);
        self
    }

    pub fn series(&self) -> &HistoricalSeries {
        &self.series
    }

    pub fn regions(&self) -> &RegionFactors {
        &self.regions
    }

    pub fn cities(&self) -> &[CityTable] {
        &self.cities
    }

    pub fn descriptive(&self) -> Result<DescriptiveStats, StatsError> {
        DescriptiveStats::compute(&self.series.values())
    }

    /// Trend fit with fitted values and residuals.
    pub fn fit(&self) -> Result<FittedLinear, StatsError> {
        self.regressor.fit(&self.series.values())
    }

    pub fn regression(&self) -> Result<RegressionResult, StatsError> {
        self.fit().map(FittedLinear::into_result)
    }

    /// Factor for `region`, falling back to the default for unknown keys.
    pub fn region_factor(&self, region: &str) -> f64 {
        self.regions.factor_or_default(region)
    }

    pub fn projection(&self, params: &SimulationParams) -> Result<Vec<ProjectionPoint>, StatsError> {
        let regression = self.regression()?;
        self.projector.project_in(&regression, params, &self.regions)
    }

    pub fn summary(&self, params: &SimulationParams) -> Result<ProjectionSummary, StatsError> {
        let points = self.projection(params)?;
        summarize(&points, params.initial_value)
    }

    /// One result per city in table order.
    pub fn city_stats(&self) -> Vec<(String, Result<CityPropertyStat, StatsError>)> {
        aggregate(&self.cities)
    }

    /// Comparison scores over the cities that can be aggregated.
    pub fn city_scores(&self) -> Vec<CityScore> {
        comparison_scores(&aggregate_skipping_empty(&self.cities))
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::bundled()
    }
}
