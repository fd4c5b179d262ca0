//! earlybird: the data engine behind the Early Bird morning dashboard.
//!
//! Typed async clients for three public HTTP sources (current weather, news
//! headlines, daily stock history), the pure display-shaping components that
//! turn their records into panel-ready structures, and a [`Dashboard`] that
//! composes one fetch–transform cycle per user action.
//!
//! The shaping components ([`stock::clip_window`], [`news::layout`],
//! [`weather::WeatherReading::snapshot`]) are pure functions with no HTTP,
//! clock, or state access, and can be used without any client at all.
//!
//! ```no_run
//! use earlybird::{Dashboard, EbClient, RefreshRequest, SymbolStore};
//!
//! # async fn run() -> Result<(), earlybird::EbError> {
//! let client = EbClient::builder().keys_file("apiKeys.txt").build()?;
//! let dashboard = Dashboard::new(client, SymbolStore::new("lastSymbol.txt"));
//! let view = dashboard
//!     .refresh(&RefreshRequest::default(), chrono::Utc::now())
//!     .await?;
//! # let _ = view;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod dashboard;
pub mod news;
pub mod stock;
pub mod weather;

pub use crate::core::{ApiKeys, EbClient, EbClientBuilder, EbError};
pub use dashboard::{
    Dashboard, DashboardView, FieldMessage, RefreshRequest, StockChart, StockView, SymbolStore,
};
pub use news::{Headline, NewsBuilder, Placeholder, Slot};
pub use stock::{DailySeries, HistoryBuilder, Lookback, LookbackUnit, OutputSize, PricePoint};
pub use weather::{WeatherBuilder, WeatherReading, WeatherSnapshot};
