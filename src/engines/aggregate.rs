//! Per-city aggregates over revaluation tables.

use crate::core::{CityPropertyStat, CityScore, CityTable};
use crate::engines::descriptive::{coefficient_of_variation, mean, min_max, population_variance};
use crate::engines::StatsError;
use crate::utils::check_finite;
use log::{debug, warn};

/// Aggregate one city's unit values.
///
/// # Errors
/// * `InsufficientData` if the city has no properties.
/// * `DegenerateInput` if a unit value is not finite, the mean is zero or a
///   sum overflows.
pub fn aggregate_city(table: &CityTable) -> Result<CityPropertyStat, StatsError> {
    let values = table.unit_values();
    let mean = mean(&values)?;
    let std_dev = population_variance(&values, mean)?.sqrt();
    let cv = coefficient_of_variation(std_dev, mean)?;
    let (min, max) = min_max(&values);
    let sum: f64 = values.iter().sum();
    let range = max - min;
    check_finite(&[sum, std_dev, cv, range])?;

    Ok(CityPropertyStat {
        key: table.key.clone(),
        city: table.city.clone(),
        count: values.len(),
        sum,
        mean,
        std_dev,
        cv,
        max,
        min,
        range,
    })
}

/// One result per city, in table order.
///
/// A failing city does not stop the others; the caller decides whether to
/// skip it or give up.
pub fn aggregate(tables: &[CityTable]) -> Vec<(String, Result<CityPropertyStat, StatsError>)> {
    tables
        .iter()
        .map(|table| (table.key.clone(), aggregate_city(table)))
        .collect()
}

/// Aggregate every city, failing on the first city that cannot be computed.
pub fn aggregate_all(tables: &[CityTable]) -> Result<Vec<CityPropertyStat>, StatsError> {
    let stats = tables
        .iter()
        .map(aggregate_city)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("aggregated {} cities", stats.len());
    Ok(stats)
}

/// Aggregate every city that can be computed, logging and dropping the rest.
pub fn aggregate_skipping_empty(tables: &[CityTable]) -> Vec<CityPropertyStat> {
    tables
        .iter()
        .filter_map(|table| match aggregate_city(table) {
            Ok(stat) => Some(stat),
            Err(err) => {
                warn!("skipping city {}: {err}", table.key);
                None
            }
        })
        .collect()
}

/// Score each city against the best city on value, stability and zone count.
pub fn comparison_scores(stats: &[CityPropertyStat]) -> Vec<CityScore> {
    let max_mean = stats.iter().map(|s| s.mean).fold(f64::NEG_INFINITY, f64::max);
    let max_count = stats.iter().map(|s| s.count).max().unwrap_or(0);

    stats
        .iter()
        .map(|s| CityScore {
            key: s.key.clone(),
            city: s.city.clone(),
            value_index: if max_mean > 0.0 {
                s.mean / max_mean * 100.0
            } else {
                0.0
            },
            stability: (100.0 - s.cv).max(0.0),
            diversity: if max_count > 0 {
                s.count as f64 / max_count as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}
