//! Helpers over plain value slices.

use crate::engines::StatsError;

/// Reject empty input and values that would poison every downstream sum.
pub fn check_values(values: &[f64], needed: usize) -> Result<(), StatsError> {
    if values.len() < needed {
        return Err(StatsError::InsufficientData {
            needed,
            got: values.len(),
        });
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::DegenerateInput("input contains non-finite values"));
    }
    Ok(())
}

/// Reject computed outputs that overflowed to infinity or NaN.
pub fn check_finite(outputs: &[f64]) -> Result<(), StatsError> {
    if outputs.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::DegenerateInput("computation overflowed"));
    }
    Ok(())
}

/// Running sums over `(index, value)` pairs, index starting at 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndexSums {
    pub n: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x2: f64,
}

impl IndexSums {
    pub fn from_series(series: &[f64]) -> Self {
        let mut sums = Self {
            n: series.len(),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xy: 0.0,
            sum_x2: 0.0,
        };
        for (i, &y) in series.iter().enumerate() {
            let x = i as f64;
            sums.sum_x += x;
            sums.sum_y += y;
            sums.sum_xy += x * y;
            sums.sum_x2 += x * x;
        }
        sums
    }

    /// Mean of the indices, `(n - 1) / 2`.
    pub fn x_mean(&self) -> f64 {
        self.sum_x / self.n as f64
    }

    /// Centered sum of squares of the indices, `Σ(x - x̄)²`.
    pub fn sxx(&self) -> f64 {
        self.sum_x2 - self.sum_x * self.sum_x / self.n as f64
    }
}
