//! Simulation parameters supplied by the caller.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound on the projection horizon.
///
/// The form limits the slider to 30 years; this ceiling only keeps the
/// compounding exponent well inside `f64` range.
pub const MAX_YEARS: i32 = 200;

/// Errors produced when validating caller-supplied parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("initial_value must be finite and non-negative, got {0}")]
    InvalidInitialValue(f64),
    #[error("inflation_rate_percent must be finite and greater than -100, got {0}")]
    InvalidInflationRate(f64),
    #[error("years must be non-negative, got {0}")]
    NegativeYears(i32),
    #[error("years must be at most {max}, got {years}")]
    TooManyYears { years: i32, max: i32 },
    #[error("region key must not be empty")]
    EmptyRegion,
    #[error("z value must be finite and positive, got {0}")]
    InvalidZValue(f64),
    #[error("confidence level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("band must be in [0, 1), got {0}")]
    InvalidBand(f64),
    #[error("factor for region {region} must be in (0, 1], got {factor}")]
    InvalidRegionFactor { region: String, factor: f64 },
}

/// Inputs to a projection: principal, inflation, horizon and region.
///
/// Owned by the caller and passed by value or reference into the engines;
/// nothing here is shared or mutated by the computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Invested principal in currency units.
    pub initial_value: f64,
    /// Expected annual inflation in percent (the form offers 0–10).
    pub inflation_rate_percent: f64,
    /// Projection horizon in years (the form offers 1–30).
    pub years: i32,
    /// Key into the region factor table.
    pub region: String,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            initial_value: 100_000_000.0,
            inflation_rate_percent: 3.5,
            years: 10,
            region: "antofagasta".to_string(),
        }
    }
}

impl SimulationParams {
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::default()
    }

    /// Check that every field is in a computable domain.
    ///
    /// The UI ranges (0–10 % inflation, 1–30 years) are deliberately not
    /// enforced; only values that would break the arithmetic are rejected.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !self.initial_value.is_finite() || self.initial_value < 0.0 {
            return Err(ParamsError::InvalidInitialValue(self.initial_value));
        }
        if !self.inflation_rate_percent.is_finite() || self.inflation_rate_percent <= -100.0 {
            return Err(ParamsError::InvalidInflationRate(
                self.inflation_rate_percent,
            ));
        }
        if self.years < 0 {
            return Err(ParamsError::NegativeYears(self.years));
        }
        if self.years > MAX_YEARS {
            return Err(ParamsError::TooManyYears {
                years: self.years,
                max: MAX_YEARS,
            });
        }
        if self.region.trim().is_empty() {
            return Err(ParamsError::EmptyRegion);
        }
        Ok(())
    }

    /// Annual growth multiplier, `1 + inflation / 100`.
    pub fn inflation_multiplier(&self) -> f64 {
        1.0 + self.inflation_rate_percent / 100.0
    }
}

/// Builder for `SimulationParams`.
#[derive(Debug, Clone, Default)]
pub struct SimulationParamsBuilder {
    params: SimulationParams,
}

impl SimulationParamsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_value(mut self, value: f64) -> Self {
        self.params.initial_value = value;
        self
    }

    pub fn inflation_rate_percent(mut self, rate: f64) -> Self {
        self.params.inflation_rate_percent = rate;
        self
    }

    pub fn years(mut self, years: i32) -> Self {
        self.params.years = years;
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.params.region = region.into();
        self
    }

    /// Build and validate the parameters.
    pub fn build(self) -> Result<SimulationParams, ParamsError> {
        self.params.validate()?;
        Ok(self.params)
    }

    /// Build the parameters without validation.
    pub fn build_unchecked(self) -> SimulationParams {
        self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_dashboard() {
        let params = SimulationParams::default();
        assert!((params.initial_value - 100_000_000.0).abs() < 1e-6);
        assert!((params.inflation_rate_percent - 3.5).abs() < 1e-12);
        assert_eq!(params.years, 10);
        assert_eq!(params.region, "antofagasta");
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = SimulationParams::builder()
            .initial_value(5_000.0)
            .inflation_rate_percent(0.0)
            .years(0)
            .region("calama")
            .build()
            .unwrap();

        assert_eq!(params.years, 0);
        assert_eq!(params.region, "calama");
        assert!((params.inflation_multiplier() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ui_ranges_are_not_enforced() {
        let params = SimulationParams::builder()
            .inflation_rate_percent(25.0)
            .years(60)
            .build();
        assert!(params.is_ok());
    }

    #[test]
    fn test_validation_negative_initial_value() {
        let result = SimulationParams::builder().initial_value(-1.0).build();
        assert!(matches!(result, Err(ParamsError::InvalidInitialValue(_))));
    }

    #[test]
    fn test_validation_non_finite_inflation() {
        let result = SimulationParams::builder()
            .inflation_rate_percent(f64::NAN)
            .build();
        assert!(matches!(result, Err(ParamsError::InvalidInflationRate(_))));

        let result = SimulationParams::builder()
            .inflation_rate_percent(f64::INFINITY)
            .build();
        assert!(matches!(result, Err(ParamsError::InvalidInflationRate(_))));
    }

    #[test]
    fn test_validation_total_deflation() {
        let result = SimulationParams::builder()
            .inflation_rate_percent(-100.0)
            .build();
        assert!(matches!(result, Err(ParamsError::InvalidInflationRate(_))));
    }

    #[test]
    fn test_validation_years() {
        let result = SimulationParams::builder().years(-1).build();
        assert_eq!(result, Err(ParamsError::NegativeYears(-1)));

        let result = SimulationParams::builder().years(MAX_YEARS + 1).build();
        assert!(matches!(result, Err(ParamsError::TooManyYears { .. })));
    }

    #[test]
    fn test_validation_empty_region() {
        let result = SimulationParams::builder().region("  ").build();
        assert_eq!(result, Err(ParamsError::EmptyRegion));
    }

    #[test]
    fn test_build_unchecked_skips_validation() {
        let params = SimulationParams::builder().years(-3).build_unchecked();
        assert_eq!(params.years, -3);
    }
}
