//! Inflation-compounded value projection along the fitted trend.

use crate::core::{
    ParamsError, ProjectionOptions, ProjectionPoint, ProjectionSummary, RegionFactors,
    RegionalAdjustment, RegressionResult, SimulationParams,
};
use crate::engines::StatsError;
use crate::utils::round_half_up;
use chrono::{Datelike, Months, NaiveDate};
use log::{debug, warn};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

/// Short Spanish month and year, e.g. `"oct 2025"`.
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTHS_ES[date.month0() as usize], date.year())
}

/// Projects an invested principal forward along a fitted trend.
///
/// For each year offset `t` in `0..=years`:
///
/// ```text
/// fit(t)       = intercept + slope * (base + t)
/// adjusted(t)  = fit(t) * (1 + inflation / 100)^t
/// projected(t) = initial_value * adjusted(t) / 100
/// ```
///
/// where `base` is the index of the last observation. The trend is on a
/// base-100 index scale, so `adjusted / 100` acts as a multiplier on the
/// principal.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    options: ProjectionOptions,
}

impl ProjectionEngine {
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// Project with the factor looked up in `regions`.
    ///
    /// Unknown regions fall back to [`crate::core::DEFAULT_REGION_FACTOR`].
    pub fn project_in(
        &self,
        regression: &RegressionResult,
        params: &SimulationParams,
        regions: &RegionFactors,
    ) -> Result<Vec<ProjectionPoint>, StatsError> {
        let factor = regions.factor_or_default(&params.region);
        self.project(regression, params, factor)
    }

    /// Project `params.years + 1` yearly points.
    ///
    /// `region_factor` only changes the values under
    /// [`RegionalAdjustment::ScaleSlope`]; by default it is reported in the
    /// logs and otherwise unused.
    pub fn project(
        &self,
        regression: &RegressionResult,
        params: &SimulationParams,
        region_factor: f64,
    ) -> Result<Vec<ProjectionPoint>, StatsError> {
        params.validate()?;
        let band = self.options.band;
        if !(0.0..1.0).contains(&band) {
            return Err(ParamsError::InvalidBand(band).into());
        }
        if regression.n_observations == 0 {
            return Err(StatsError::InsufficientData { needed: 1, got: 0 });
        }

        let scaled_slope = match self.options.regional_adjustment {
            RegionalAdjustment::Ignored => {
                debug!(
                    "region {:?} factor {region_factor} not applied to projection",
                    params.region
                );
                None
            }
            RegionalAdjustment::ScaleSlope => {
                if !(region_factor > 0.0 && region_factor <= 1.0) {
                    return Err(ParamsError::InvalidRegionFactor {
                        region: params.region.clone(),
                        factor: region_factor,
                    }
                    .into());
                }
                Some(regression.slope * region_factor)
            }
        };

        let base = regression.base_index() as f64;
        let growth = params.inflation_multiplier();
        // years is validated non-negative above
        let years = params.years as u32;

        let to_currency = |value: f64| {
            round_half_up(value).ok_or(StatsError::DegenerateInput(
                "projected value exceeds currency range",
            ))
        };

        let mut points = Vec::with_capacity(years as usize + 1);
        for year_offset in 0..=years {
            let t = f64::from(year_offset);
            let historical_fit = match scaled_slope {
                None => regression.value_at(base + t),
                Some(slope) => regression.value_at(base) + slope * t,
            };
            let inflation_adjusted = historical_fit * growth.powi(year_offset as i32);
            let projected = params.initial_value * (inflation_adjusted / 100.0);
            if !projected.is_finite() {
                return Err(StatsError::DegenerateInput("projected value overflowed"));
            }

            let date = self
                .options
                .anchor
                .checked_add_months(Months::new(12 * year_offset))
                .ok_or(StatsError::DegenerateInput("projection date out of range"))?;

            points.push(ProjectionPoint {
                year_offset,
                label: month_label(date),
                projected: to_currency(projected)?,
                lower: to_currency(projected * (1.0 - band))?,
                upper: to_currency(projected * (1.0 + band))?,
            });
        }

        if let Some(first) = points.iter().find(|p| p.projected < 0) {
            warn!(
                "trend extrapolates below zero from year offset {} ({}); band edges are inverted",
                first.year_offset, first.label
            );
        }
        debug!(
            "projection: {} points, final value {}",
            points.len(),
            points.last().map_or(0, |p| p.projected)
        );

        Ok(points)
    }
}

/// Initial versus final value of a projection.
///
/// # Errors
/// * `InsufficientData` for an empty projection.
/// * `DegenerateInput` when `initial_value` is zero (ROI is undefined).
pub fn summarize(
    points: &[ProjectionPoint],
    initial_value: f64,
) -> Result<ProjectionSummary, StatsError> {
    let last = points
        .last()
        .ok_or(StatsError::InsufficientData { needed: 1, got: 0 })?;
    if initial_value == 0.0 {
        return Err(StatsError::DegenerateInput("initial value is zero, ROI is undefined"));
    }

    let gain = last.projected as f64 - initial_value;
    Ok(ProjectionSummary {
        initial_value,
        final_value: last.projected,
        gain,
        roi_percent: gain / initial_value * 100.0,
    })
}
