//! Common test utilities and data generators.
#![allow(dead_code)]

use valuation_stats::core::{CityTable, PropertyRecord};

/// Values of `intercept + slope * i` for `i` in `0..n`.
pub fn linear_series(n: usize, slope: f64, intercept: f64) -> Vec<f64> {
    (0..n).map(|i| intercept + slope * i as f64).collect()
}

/// Deterministic pseudo-random values in `[low, high)`.
pub fn random_values(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    // Simple LCG for reproducibility
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let unit = ((state >> 33) as f64) / ((1u64 << 31) as f64);
            low + unit * (high - low)
        })
        .collect()
}

/// A trend with deterministic noise of the given amplitude.
pub fn noisy_trend(n: usize, slope: f64, intercept: f64, noise: f64, seed: u64) -> Vec<f64> {
    linear_series(n, slope, intercept)
        .into_iter()
        .zip(random_values(n, -noise, noise, seed))
        .map(|(y, e)| y + e)
        .collect()
}

/// City table with one zone per value.
pub fn city_table(key: &str, values: &[f64]) -> CityTable {
    CityTable {
        key: key.to_string(),
        city: key.to_string(),
        year: 2024,
        properties: values
            .iter()
            .enumerate()
            .map(|(i, &v)| PropertyRecord::new(format!("{key}-{i}"), "100-500", v))
            .collect(),
    }
}
