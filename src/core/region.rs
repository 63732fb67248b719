//! Regional market multipliers.

use super::params::ParamsError;
use log::warn;
use serde::{Deserialize, Serialize};

/// Factor used for any region missing from the table.
pub const DEFAULT_REGION_FACTOR: f64 = 0.78;

/// Ordered table from region key to a dimensionless multiplier in (0, 1].
///
/// Insertion order is kept so a form can list the regions as configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionFactors {
    entries: Vec<(String, f64)>,
}

impl RegionFactors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Used by the bundled table, whose factors are known to be in range.
    pub(crate) fn from_static(rows: &[(&str, f64)]) -> Self {
        Self {
            entries: rows
                .iter()
                .map(|&(region, factor)| (region.to_string(), factor))
                .collect(),
        }
    }

    /// Add a region, replacing the factor if the key already exists.
    pub fn insert(&mut self, region: impl Into<String>, factor: f64) -> Result<(), ParamsError> {
        let region = region.into();
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ParamsError::InvalidRegionFactor { region, factor });
        }
        match self.entries.iter_mut().find(|(key, _)| *key == region) {
            Some(entry) => entry.1 = factor,
            None => self.entries.push((region, factor)),
        }
        Ok(())
    }

    /// Chainable form of [`insert`](Self::insert).
    pub fn with(mut self, region: impl Into<String>, factor: f64) -> Result<Self, ParamsError> {
        self.insert(region, factor)?;
        Ok(self)
    }

    pub fn get(&self, region: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(key, _)| key == region)
            .map(|&(_, factor)| factor)
    }

    /// Factor for `region`, or [`DEFAULT_REGION_FACTOR`] when it is unknown.
    pub fn factor_or_default(&self, region: &str) -> f64 {
        self.get(region).unwrap_or_else(|| {
            warn!(
                "unknown region {region:?}, using default factor {DEFAULT_REGION_FACTOR}"
            );
            DEFAULT_REGION_FACTOR
        })
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
