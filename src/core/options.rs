//! Projection options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the regional factor enters the projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RegionalAdjustment {
    /// The factor is looked up and reported but does not change the values.
    ///
    /// This is the behavior the dashboard has always shipped: its
    /// region-adjusted slope was computed and then never used.
    #[default]
    Ignored,

    /// The factor scales the slope of the extrapolated segment.
    ///
    /// The line is anchored at the last observed index; only the growth past
    /// that point is damped: `intercept + slope * base + slope * factor * t`.
    ScaleSlope,
}

/// Options controlling projection output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionOptions {
    /// Month labelled on the year-0 point; later points add whole years.
    pub anchor: NaiveDate,
    /// Relative half-width of the band around each projected value.
    pub band: f64,
    pub regional_adjustment: RegionalAdjustment,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            band: 0.1,
            regional_adjustment: RegionalAdjustment::Ignored,
        }
    }
}

impl ProjectionOptions {
    pub fn builder() -> ProjectionOptionsBuilder {
        ProjectionOptionsBuilder::default()
    }
}

/// October 2025, the month the dashboard's projections start from.
fn default_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or(NaiveDate::MIN)
}

/// Builder for `ProjectionOptions`.
#[derive(Debug, Clone, Default)]
pub struct ProjectionOptionsBuilder {
    options: ProjectionOptions,
}

impl ProjectionOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the month shown for year 0.
    pub fn anchor(mut self, anchor: NaiveDate) -> Self {
        self.options.anchor = anchor;
        self
    }

    /// Set the band half-width as a fraction (0.1 = ±10%).
    pub fn band(mut self, band: f64) -> Self {
        self.options.band = band;
        self
    }

    pub fn regional_adjustment(mut self, adjustment: RegionalAdjustment) -> Self {
        self.options.regional_adjustment = adjustment;
        self
    }

    pub fn build(self) -> ProjectionOptions {
        self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_default_options() {
        let opts = ProjectionOptions::default();
        assert_eq!(opts.anchor.year(), 2025);
        assert_eq!(opts.anchor.month(), 10);
        assert!((opts.band - 0.1).abs() < 1e-12);
        assert_eq!(opts.regional_adjustment, RegionalAdjustment::Ignored);
    }

    #[test]
    fn test_builder() {
        let anchor = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let opts = ProjectionOptions::builder()
            .anchor(anchor)
            .band(0.2)
            .regional_adjustment(RegionalAdjustment::ScaleSlope)
            .build();

        assert_eq!(opts.anchor, anchor);
        assert!((opts.band - 0.2).abs() < 1e-12);
        assert_eq!(opts.regional_adjustment, RegionalAdjustment::ScaleSlope);
    }
}
