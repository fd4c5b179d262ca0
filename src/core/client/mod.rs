//! Public client surface + builder.
//! Endpoint defaults and the UA live in `constants`.

mod constants;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::{ApiKeys, EbError};
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_STOCK, DEFAULT_BASE_WEATHER, USER_AGENT};

/// HTTP client shared by the weather, news, and stock sources.
///
/// Holds one [`reqwest::Client`], the three endpoint bases, and the
/// [`ApiKeys`] appended to each request. Cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Debug, Clone)]
pub struct EbClient {
    http: Client,
    base_weather: Url,
    base_news: Url,
    base_stock: Url,
    keys: ApiKeys,
}

impl Default for EbClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl EbClient {
    /// Create a new builder.
    pub fn builder() -> EbClientBuilder {
        EbClientBuilder::default()
    }

    /* -------- internal getters used by the source modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_weather(&self) -> &Url {
        &self.base_weather
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_stock(&self) -> &Url {
        &self.base_stock
    }
    pub(crate) fn keys(&self) -> &ApiKeys {
        &self.keys
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct EbClientBuilder {
    user_agent: Option<String>,
    base_weather: Option<Url>,
    base_news: Option<Url>,
    base_stock: Option<Url>,
    keys: Option<ApiKeys>,
    keys_file: Option<PathBuf>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl EbClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the weather endpoint (e.g., for a mock server in tests).
    #[must_use]
    pub fn base_weather(mut self, url: Url) -> Self {
        self.base_weather = Some(url);
        self
    }

    /// Override the news endpoint.
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the stock endpoint.
    #[must_use]
    pub fn base_stock(mut self, url: Url) -> Self {
        self.base_stock = Some(url);
        self
    }

    /// Provide the API keys directly. Takes precedence over [`keys_file`](Self::keys_file).
    #[must_use]
    pub fn keys(mut self, keys: ApiKeys) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Read the API keys from a line-delimited file (weather, news, stock)
    /// when the client is built.
    #[must_use]
    pub fn keys_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.keys_file = Some(path.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint fails to parse, the key file
    /// cannot be read, or the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<EbClient, EbError> {
        let base_weather = self
            .base_weather
            .unwrap_or(Url::parse(DEFAULT_BASE_WEATHER)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_stock = self.base_stock.unwrap_or(Url::parse(DEFAULT_BASE_STOCK)?);

        let keys = match (self.keys, self.keys_file) {
            (Some(keys), _) => keys,
            (None, Some(path)) => ApiKeys::from_file(path)?,
            (None, None) => ApiKeys::default(),
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(EbClient {
            http,
            base_weather,
            base_news,
            base_stock,
            keys,
        })
    }
}
