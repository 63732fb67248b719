//! Utility functions.

mod series;

pub use series::{check_finite, check_values, IndexSums};

/// Round half up to a whole unit, the way the dashboard's currency figures round.
///
/// Returns `None` when the rounded value does not fit in an `i64` (or is NaN).
pub fn round_half_up(value: f64) -> Option<i64> {
    let rounded = (value + 0.5).floor();
    // i64::MAX as f64 is 2^63, one past the largest representable value
    if rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), Some(3));
        assert_eq!(round_half_up(2.49), Some(2));
        assert_eq!(round_half_up(-2.5), Some(-2));
        assert_eq!(round_half_up(-2.51), Some(-3));
    }

    #[test]
    fn test_round_half_up_out_of_range() {
        assert_eq!(round_half_up(1e20), None);
        assert_eq!(round_half_up(-1e20), None);
        assert_eq!(round_half_up(9.223372036854775808e18), None);
        assert_eq!(round_half_up(f64::NAN), None);
        assert_eq!(round_half_up(-9.223372036854775808e18), Some(i64::MIN));
        assert_eq!(round_half_up(4e18), Some(4_000_000_000_000_000_000));
    }
}
