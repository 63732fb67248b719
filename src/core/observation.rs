//! Historical observations and the ordered series they form.

use crate::engines::StatsError;
use serde::{Deserialize, Serialize};

/// Minimum number of observations a series must hold to support a trend fit.
pub const MIN_SERIES_LEN: usize = 3;

/// A single reading of the price index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Period label, e.g. `"2010-01"`.
    pub period: String,
    /// Index value for the period (base 100 at the first reading).
    pub value: f64,
}

impl Observation {
    pub fn new(period: impl Into<String>, value: f64) -> Self {
        Self {
            period: period.into(),
            value,
        }
    }
}

/// Ordered, read-only sequence of observations.
///
/// The position of each observation is the regression's independent variable,
/// so the order is significant and never changes after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    observations: Vec<Observation>,
}

impl HistoricalSeries {
    /// Build a series, rejecting anything shorter than [`MIN_SERIES_LEN`] or
    /// carrying non-finite values.
    pub fn new(observations: Vec<Observation>) -> Result<Self, StatsError> {
        if observations.len() < MIN_SERIES_LEN {
            return Err(StatsError::InsufficientData {
                needed: MIN_SERIES_LEN,
                got: observations.len(),
            });
        }
        if observations.iter().any(|o| !o.value.is_finite()) {
            return Err(StatsError::DegenerateInput("series contains non-finite values"));
        }
        Ok(Self { observations })
    }

    /// Used by the bundled datasets, whose length and values are fixed.
    pub(crate) fn from_static(rows: &[(&str, f64)]) -> Self {
        Self {
            observations: rows
                .iter()
                .map(|&(period, value)| Observation::new(period, value))
                .collect(),
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Values in series order.
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false for a constructed series; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}
