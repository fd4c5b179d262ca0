mod api;
mod lookback;
mod model;
mod window;
mod wire;

pub use lookback::{Lookback, LookbackParseError, LookbackUnit};
pub use model::{DailySeries, PricePoint};
pub use window::clip_window;

use crate::core::{EbClient, EbError};

/// How much history to request from the stock source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSize {
    /// The most recent ~100 trading days.
    Compact,
    /// The full available history. The default, since a one-year lookback
    /// needs more than the compact window covers.
    #[default]
    Full,
}

impl OutputSize {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Full => "full",
        }
    }
}

/// A builder for fetching the daily close-price history of one symbol.
pub struct HistoryBuilder {
    client: EbClient,
    symbol: String,
    output_size: OutputSize,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for `symbol`.
    pub fn new(client: &EbClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            output_size: OutputSize::default(),
        }
    }

    /// Sets how much history to request.
    #[must_use]
    pub fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Executes the request and fetches the series, ascending by date.
    ///
    /// # Errors
    ///
    /// Returns an `EbError` if no stock key is configured, the request
    /// fails, or the source reports an in-band error (unknown symbol and
    /// exhausted quota both arrive that way, with HTTP 200).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<DailySeries, EbError> {
        api::fetch_daily(&self.client, &self.symbol, self.output_size).await
    }
}
