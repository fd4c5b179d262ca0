//! The dashboard composition layer.
//!
//! One [`Dashboard`] owns the source client, the persisted-symbol store, and
//! the home location, and turns each user action into a single
//! fetch–transform cycle producing display-ready panel structures. All UI
//! state lives here explicitly; the shaping functions it calls
//! ([`layout`](crate::news::layout), [`clip_window`](crate::stock::clip_window),
//! [`WeatherReading::snapshot`](crate::weather::WeatherReading::snapshot))
//! stay pure and know nothing about it.

mod store;
mod symbol;

pub use store::SymbolStore;
pub use symbol::{REJECTED_MESSAGE, Resolution, SENTINEL, resolve};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;

use crate::{
    core::{EbClient, EbError},
    news::{self, MAX_HEADLINES, NewsBuilder, Slot, TITLE_LIMIT},
    stock::{HistoryBuilder, Lookback, PricePoint},
    weather::{WeatherBuilder, WeatherSnapshot},
};

/// Default home location, used for the weather panel and as the news
/// fallback search term.
pub const DEFAULT_LOCATION: &str = "Oakville";

/// What the symbol field should display after a failed or empty query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldMessage {
    /// No usable input and nothing persisted to fall back on.
    Prompt,
    /// A genuine symbol attempt that the source rejected (unknown symbol,
    /// auth failure, and exhausted quota all collapse here).
    Rejected,
}

impl FieldMessage {
    /// The literal text the symbol field displays.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            FieldMessage::Prompt => SENTINEL,
            FieldMessage::Rejected => REJECTED_MESSAGE,
        }
    }
}

/// The clipped series the stock panel plots.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockChart {
    /// The symbol that was queried.
    pub symbol: String,
    /// Points inside the lookback window, oldest first.
    pub points: Vec<PricePoint>,
}

impl StockChart {
    /// The chart heading, e.g. `"MSFT Stock Price"`.
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} Stock Price", self.symbol)
    }
}

/// Outcome of one stock-panel query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StockView {
    /// The query succeeded; plot this.
    Chart(StockChart),
    /// The query did not happen or failed; reset the symbol field to this
    /// message and leave the previous chart alone.
    Reset(FieldMessage),
}

/// One whole-window refresh, ready for a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Current conditions, or `None` when the weather fetch failed.
    pub weather: Option<WeatherSnapshot>,
    /// News panel rows, always at least one slot.
    pub news: Vec<Slot>,
    /// Stock panel outcome.
    pub stock: StockView,
}

/// The inputs of one refresh: what the widgets currently hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshRequest {
    /// Free-text news search term; `None` falls back to the home location.
    pub search: Option<String>,
    /// Raw text of the symbol field.
    pub symbol_input: String,
    /// Selected time range.
    pub lookback: Lookback,
}

impl Default for RefreshRequest {
    /// The widgets' startup state: no search term, the untouched symbol
    /// prompt, and the range selector at one year.
    fn default() -> Self {
        Self {
            search: None,
            symbol_input: SENTINEL.to_string(),
            lookback: Lookback::default(),
        }
    }
}

/// The dashboard's data engine: three sources, one persisted symbol, one
/// fetch–transform cycle per user action.
pub struct Dashboard {
    client: EbClient,
    store: Mutex<SymbolStore>,
    location: String,
}

impl Dashboard {
    /// Creates a dashboard over `client`, persisting the last-known symbol
    /// through `store`. The home location defaults to [`DEFAULT_LOCATION`].
    pub fn new(client: EbClient, store: SymbolStore) -> Self {
        Self {
            client,
            store: Mutex::new(store),
            location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Sets the home location used for weather and the news fallback term.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Fetches current conditions for the home location and formats them for
    /// display.
    ///
    /// # Errors
    ///
    /// Returns the underlying `EbError` on any fetch failure; no retry is
    /// attempted. [`refresh`](Self::refresh) maps the failure to an empty
    /// panel instead.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn weather_panel(&self) -> Result<WeatherSnapshot, EbError> {
        let reading = WeatherBuilder::new(&self.client, &self.location)
            .fetch()
            .await?;
        Ok(reading.snapshot())
    }

    /// Fetches headlines for `search` (or the home location when absent) and
    /// lays them out into panel rows.
    ///
    /// Total: a fetch failure is rendered the same way as an empty feed, a
    /// single "no results" row, so the panel never propagates an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn news_panel(&self, search: Option<&str>) -> Vec<Slot> {
        let term = search.unwrap_or(&self.location);
        let headlines = NewsBuilder::new(&self.client)
            .query(term)
            .fetch()
            .await
            .unwrap_or_default();
        news::layout(&headlines, MAX_HEADLINES, TITLE_LIMIT)
    }

    /// Runs one stock query: resolve the field text, fetch the history, clip
    /// it to the lookback window, and persist the symbol on success.
    ///
    /// The read–fetch–write of the persisted symbol is serialized, so
    /// concurrent callers cannot interleave around it.
    ///
    /// # Errors
    ///
    /// Returns [`EbError::InvalidWindow`] for a non-positive lookback and
    /// [`EbError::Io`] when the symbol store is unreadable or unwritable;
    /// both are caller-side faults. Source failures are not errors here;
    /// they come back as [`StockView::Reset`]`(`[`FieldMessage::Rejected`]`)`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(input = %input))
    )]
    pub async fn stock_panel(
        &self,
        input: &str,
        lookback: Lookback,
        now: DateTime<Utc>,
    ) -> Result<StockView, EbError> {
        // A bad window is caller misuse; reject it before any fetch.
        let days = lookback.total_days();
        if days <= 0 {
            return Err(EbError::InvalidWindow { days });
        }

        let store = self.store.lock().await;

        let persisted = store.load()?;
        let symbol = match resolve(input, persisted.as_deref()) {
            Resolution::Query(symbol) => symbol,
            Resolution::Prompt => return Ok(StockView::Reset(FieldMessage::Prompt)),
        };

        let Ok(fetched) = HistoryBuilder::new(&self.client, &symbol).fetch().await else {
            return Ok(StockView::Reset(FieldMessage::Rejected));
        };

        let clipped = fetched.clip(lookback, now)?;

        store.save(&symbol)?;

        Ok(StockView::Chart(StockChart {
            symbol,
            points: clipped.points,
        }))
    }

    /// Assembles a full window refresh from one request.
    ///
    /// Weather failure degrades to `weather: None`; news failure degrades to
    /// the "no results" row; only the stock panel's caller-side faults (see
    /// [`stock_panel`](Self::stock_panel)) surface as `Err`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, request), err))]
    pub async fn refresh(
        &self,
        request: &RefreshRequest,
        now: DateTime<Utc>,
    ) -> Result<DashboardView, EbError> {
        let weather = self.weather_panel().await.ok();
        let news = self.news_panel(request.search.as_deref()).await;
        let stock = self
            .stock_panel(&request.symbol_input, request.lookback, now)
            .await?;

        Ok(DashboardView {
            weather,
            news,
            stock,
        })
    }
}
