//! API-key handling for the three upstream sources.
//!
//! Keys live in a plain line-delimited file, one key per line, and the line
//! order is the contract: weather first, news second, stock third. Lines are
//! trimmed; a blank or missing line leaves that source unkeyed.

use std::path::Path;

use crate::core::EbError;

/// API keys for the three upstream sources.
///
/// Loading never fails on an absent or blank key. The error surfaces later,
/// as [`EbError::MissingApiKey`], when the corresponding source is actually
/// queried.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    weather: Option<String>,
    news: Option<String>,
    stock: Option<String>,
}

impl ApiKeys {
    /// Creates a key set from explicit values.
    pub fn new(
        weather: impl Into<String>,
        news: impl Into<String>,
        stock: impl Into<String>,
    ) -> Self {
        Self::default()
            .with_weather(weather)
            .with_news(news)
            .with_stock(stock)
    }

    /// Reads keys from a line-delimited file (weather, news, stock).
    ///
    /// # Errors
    ///
    /// Returns [`EbError::Io`] if the file cannot be read. Short or blank
    /// files are not an error; the missing keys simply stay unset.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EbError> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_lines(&text))
    }

    fn from_lines(text: &str) -> Self {
        let mut lines = text.lines().map(str::trim);
        let mut take = || lines.next().filter(|l| !l.is_empty()).map(str::to_string);
        Self {
            weather: take(),
            news: take(),
            stock: take(),
        }
    }

    /// Sets the weather key.
    #[must_use]
    pub fn with_weather(mut self, key: impl Into<String>) -> Self {
        self.weather = Some(key.into());
        self
    }

    /// Sets the news key.
    #[must_use]
    pub fn with_news(mut self, key: impl Into<String>) -> Self {
        self.news = Some(key.into());
        self
    }

    /// Sets the stock key.
    #[must_use]
    pub fn with_stock(mut self, key: impl Into<String>) -> Self {
        self.stock = Some(key.into());
        self
    }

    pub(crate) fn weather(&self) -> Result<&str, EbError> {
        Self::get(&self.weather, "weather")
    }

    pub(crate) fn news(&self) -> Result<&str, EbError> {
        Self::get(&self.news, "news")
    }

    pub(crate) fn stock(&self) -> Result<&str, EbError> {
        Self::get(&self.stock, "stock")
    }

    fn get<'a>(slot: &'a Option<String>, source: &'static str) -> Result<&'a str, EbError> {
        slot.as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(EbError::MissingApiKey { source })
    }
}
