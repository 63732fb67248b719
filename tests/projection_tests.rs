//! Projection tests.

mod common;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use valuation_stats::core::{
    ParamsError, ProjectionOptions, RegionalAdjustment, RegressionResult, SimulationParams,
};
use valuation_stats::data::{historical_series, region_factors};
use valuation_stats::engines::{
    summarize, FittedRegressor, LinearRegressor, ProjectionEngine, Regressor, StatsError,
};

fn historical_trend() -> RegressionResult {
    let fitted = LinearRegressor::new()
        .fit(&historical_series().values())
        .expect("bundled series should fit");
    *fitted.result()
}

// ============================================================================
// Bundled Scenario
// ============================================================================

#[test]
fn test_default_scenario_values() {
    let params = SimulationParams::default();
    let points = ProjectionEngine::default()
        .project(&historical_trend(), &params, 0.78)
        .unwrap();

    assert_eq!(points.len(), 11);

    assert_eq!(points[0].label, "oct 2025");
    assert_eq!(points[0].projected, 267_806_653);
    assert_eq!(points[0].lower, 241_025_988);
    assert_eq!(points[0].upper, 294_587_319);

    assert_eq!(points[2].projected, 299_850_175);

    assert_eq!(points[10].label, "oct 2035");
    assert_eq!(points[10].projected, 463_156_168);
    assert_eq!(points[10].lower, 416_840_551);
    assert_eq!(points[10].upper, 509_471_784);
}

#[test]
fn test_summary_of_default_scenario() {
    let params = SimulationParams::default();
    let points = ProjectionEngine::default()
        .project(&historical_trend(), &params, 0.78)
        .unwrap();
    let summary = summarize(&points, params.initial_value).unwrap();

    assert_eq!(summary.final_value, 463_156_168);
    assert_relative_eq!(summary.gain, 363_156_168.0, epsilon = 1e-6);
    assert_relative_eq!(summary.roi_percent, 363.156168, epsilon = 1e-9);
}

// ============================================================================
// Shape
// ============================================================================

#[test]
fn test_zero_years_single_point() {
    let params = SimulationParams::builder().years(0).build().unwrap();
    let points = ProjectionEngine::default()
        .project(&historical_trend(), &params, 0.78)
        .unwrap();

    assert_eq!(points.len(), 1);
    assert_eq!(points[0].year_offset, 0);
}

#[test]
fn test_length_and_band_ordering() {
    let trend = historical_trend();
    let engine = ProjectionEngine::default();

    for years in 0..=30 {
        let params = SimulationParams::builder()
            .years(years)
            .inflation_rate_percent(f64::from(years % 11))
            .build()
            .unwrap();
        let points = engine.project(&trend, &params, 0.78).unwrap();

        assert_eq!(points.len(), years as usize + 1);
        for (i, p) in points.iter().enumerate() {
            assert_eq!(p.year_offset as usize, i);
            assert!(p.lower <= p.projected && p.projected <= p.upper);
        }
    }
}

#[test]
fn test_custom_anchor_and_band() {
    let options = ProjectionOptions::builder()
        .anchor(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        .band(0.0)
        .build();
    let params = SimulationParams::builder().years(1).build().unwrap();
    let points = ProjectionEngine::new(options)
        .project(&historical_trend(), &params, 0.78)
        .unwrap();

    assert_eq!(points[0].label, "mar 2026");
    assert_eq!(points[1].label, "mar 2027");
    assert_eq!(points[1].lower, points[1].projected);
    assert_eq!(points[1].upper, points[1].projected);
}

#[test]
fn test_repeatable() {
    let trend = historical_trend();
    let params = SimulationParams::default();
    let engine = ProjectionEngine::default();

    assert_eq!(
        engine.project(&trend, &params, 0.78).unwrap(),
        engine.project(&trend, &params, 0.78).unwrap()
    );
}

// ============================================================================
// Regional Factor
// ============================================================================

#[test]
fn test_unknown_region_falls_back() {
    let regions = region_factors();
    let trend = historical_trend();
    let engine = ProjectionEngine::default();

    let unknown = SimulationParams::builder().region("atlantis").build().unwrap();
    let points = engine
        .project_in(&trend, &unknown, &regions)
        .expect("unknown region should not fail");

    let explicit = engine
        .project(&trend, &SimulationParams::default(), 0.78)
        .unwrap();
    assert_eq!(points, explicit);
}

#[test]
fn test_factor_ignored_by_default() {
    let trend = historical_trend();
    let engine = ProjectionEngine::default();
    let params = SimulationParams::default();

    assert_eq!(
        engine.project(&trend, &params, 0.65).unwrap(),
        engine.project(&trend, &params, 1.0).unwrap()
    );
}

#[test]
fn test_scale_slope_damps_growth() {
    let trend = historical_trend();
    let params = SimulationParams::builder().region("calama").build().unwrap();
    let scaled = ProjectionEngine::new(
        ProjectionOptions::builder()
            .regional_adjustment(RegionalAdjustment::ScaleSlope)
            .build(),
    );

    let plain = ProjectionEngine::default()
        .project_in(&trend, &params, &region_factors())
        .unwrap();
    let damped = scaled.project_in(&trend, &params, &region_factors()).unwrap();

    // Both start from the last fitted value.
    assert_eq!(plain[0].projected, damped[0].projected);
    assert!(damped[10].projected < plain[10].projected);
    assert!((damped[10].projected - 439_247_406).abs() <= 1);
}

#[test]
fn test_scale_slope_rejects_bad_factor() {
    let engine = ProjectionEngine::new(
        ProjectionOptions::builder()
            .regional_adjustment(RegionalAdjustment::ScaleSlope)
            .build(),
    );
    let result = engine.project(&historical_trend(), &SimulationParams::default(), 0.0);

    assert!(matches!(
        result,
        Err(StatsError::InvalidParameter(ParamsError::InvalidRegionFactor { .. }))
    ));
}

// ============================================================================
// Parameter Guards
// ============================================================================

#[test]
fn test_negative_years() {
    let params = SimulationParams::builder().years(-1).build_unchecked();
    let result = ProjectionEngine::default().project(&historical_trend(), &params, 0.78);

    assert_eq!(
        result.unwrap_err(),
        StatsError::InvalidParameter(ParamsError::NegativeYears(-1))
    );
}

#[test]
fn test_negative_initial_value() {
    let params = SimulationParams::builder()
        .initial_value(-5.0)
        .build_unchecked();
    let result = ProjectionEngine::default().project(&historical_trend(), &params, 0.78);

    assert!(matches!(
        result,
        Err(StatsError::InvalidParameter(ParamsError::InvalidInitialValue(_)))
    ));
}

#[test]
fn test_non_finite_inflation() {
    let params = SimulationParams::builder()
        .inflation_rate_percent(f64::NAN)
        .build_unchecked();
    let result = ProjectionEngine::default().project(&historical_trend(), &params, 0.78);

    assert!(matches!(
        result,
        Err(StatsError::InvalidParameter(ParamsError::InvalidInflationRate(_)))
    ));
}

#[test]
fn test_declining_trend_warns_but_projects() {
    let fitted = LinearRegressor::new()
        .fit(&common::linear_series(10, -10.0, 90.0))
        .unwrap();
    let params = SimulationParams::builder()
        .initial_value(1_000.0)
        .inflation_rate_percent(0.0)
        .years(5)
        .build()
        .unwrap();

    let points = ProjectionEngine::default()
        .project(fitted.result(), &params, 0.78)
        .unwrap();
    // line crosses zero at index 9; year offset 1 is index 10
    assert_eq!(points[0].projected, 0);
    assert_eq!(points.iter().position(|p| p.projected < 0), Some(1));
    assert_eq!(points.len(), 6);
}

#[test]
fn test_oversized_principal_is_rejected() {
    let params = SimulationParams::builder()
        .initial_value(1e20)
        .years(0)
        .build()
        .unwrap();
    let result = ProjectionEngine::default().project(&historical_trend(), &params, 0.78);

    assert!(matches!(result, Err(StatsError::DegenerateInput(_))));
}

// ============================================================================
// Serialization
// ============================================================================

#[test]
fn test_point_json_shape() {
    let params = SimulationParams::builder().years(0).build().unwrap();
    let points = ProjectionEngine::default()
        .project(&historical_trend(), &params, 0.78)
        .unwrap();

    let json = serde_json::to_value(&points[0]).unwrap();
    assert_eq!(json["yearOffset"], 0);
    assert_eq!(json["label"], "oct 2025");
    assert_eq!(json["projected"], 267_806_653);
    assert!(json.get("lower").is_some());
    assert!(json.get("upper").is_some());
}
