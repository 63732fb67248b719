//! Land revaluation tables and their per-city aggregates.

use serde::{Deserialize, Serialize};

/// One appraisal zone of a city's revaluation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Zone code, e.g. `"CAA002"`.
    pub code: String,
    /// Surface range in m² as published (`"50-2.000"`, `"MULTIPLE"`).
    pub surface_range: String,
    /// Appraised value per m².
    pub unit_value: f64,
}

impl PropertyRecord {
    pub fn new(code: impl Into<String>, surface_range: impl Into<String>, unit_value: f64) -> Self {
        Self {
            code: code.into(),
            surface_range: surface_range.into(),
            unit_value,
        }
    }
}

/// A city's revaluation table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityTable {
    /// Stable key (`"mariaElena"`).
    pub key: String,
    /// Display name (`"María Elena"`).
    pub city: String,
    /// Revaluation year.
    pub year: i32,
    pub properties: Vec<PropertyRecord>,
}

impl CityTable {
    pub fn unit_values(&self) -> Vec<f64> {
        self.properties.iter().map(|p| p.unit_value).collect()
    }
}

/// Descriptive aggregate of one city's unit values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPropertyStat {
    pub key: String,
    pub city: String,
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Coefficient of variation in percent.
    pub cv: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
}

/// Normalized comparison of one city against the others, each on 0–100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityScore {
    pub key: String,
    pub city: String,
    /// Mean unit value relative to the highest city mean.
    pub value_index: f64,
    /// `100 - cv`, floored at 0.
    pub stability: f64,
    /// Zone count relative to the city with the most zones.
    pub diversity: f64,
}
