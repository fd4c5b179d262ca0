use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::EbError;
use crate::stock::{Lookback, window};

/// One observation in a daily close-price series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Observation timestamp (UTC midnight of the trading day).
    pub ts: DateTime<Utc>,
    /// Closing price, exactly as reported by the source.
    pub close: f64,
}

/// A daily close-price history for one symbol, ascending by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    /// The symbol the series was fetched for.
    pub symbol: String,
    /// The observations, oldest first.
    pub points: Vec<PricePoint>,
}

impl DailySeries {
    /// Returns a copy of the series clipped to the lookback window ending one
    /// day before `now`. See [`window::clip_window`](crate::stock::clip_window).
    ///
    /// # Errors
    ///
    /// Returns [`EbError::InvalidWindow`] if the lookback normalizes to zero days.
    pub fn clip(&self, lookback: Lookback, now: DateTime<Utc>) -> Result<Self, EbError> {
        Ok(Self {
            symbol: self.symbol.clone(),
            points: window::clip_window(&self.points, lookback.total_days(), now)?,
        })
    }

    /// Number of points in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the series holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
