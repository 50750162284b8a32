//! Price series models

use chrono::{DateTime, Utc};

/// A single raw data point on a price chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// A price sample positioned by arrival order rather than calendar time.
///
/// `index` equals the sample's array position: strictly increasing and
/// contiguous from 0. Gaps in the source history are compressed, so the
/// index is not a day count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub index: usize,
    pub price: f64,
}
