//! Margins and intervals around the fitted trend.

mod margin;

pub use margin::{compute_interval, legacy_margin, legacy_se_factor, Z_95};
