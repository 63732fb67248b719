//! Housing price index, base 100 at January 2010.

use crate::core::HistoricalSeries;

const PRICE_INDEX: [(&str, f64); 31] = [
    ("2010-01", 100.0),
    ("2010-07", 102.3),
    ("2011-01", 105.8),
    ("2011-07", 108.2),
    ("2012-01", 112.4),
    ("2012-07", 116.9),
    ("2013-01", 121.5),
    ("2013-07", 126.3),
    ("2014-01", 131.2),
    ("2014-07", 136.8),
    ("2015-01", 142.1),
    ("2015-07", 148.5),
    ("2016-01", 153.7),
    ("2016-07", 159.2),
    ("2017-01", 165.4),
    ("2017-07", 171.9),
    ("2018-01", 176.8),
    ("2018-07", 182.5),
    ("2019-01", 189.3),
    ("2019-07", 195.8),
    ("2020-01", 201.2),
    ("2020-07", 208.9),
    ("2021-01", 217.4),
    ("2021-07", 226.8),
    ("2022-01", 234.5),
    ("2022-07", 241.2),
    ("2023-01", 248.7),
    ("2023-07", 255.3),
    ("2024-01", 262.1),
    ("2024-07", 268.9),
    ("2025-09", 275.6),
];

/// Semi-annual readings from 2010-01 to 2024-07, plus the 2025-09 reading.
pub fn historical_series() -> HistoricalSeries {
    HistoricalSeries::from_static(&PRICE_INDEX)
}
