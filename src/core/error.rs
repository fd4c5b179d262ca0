use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum EbError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON decoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error occurred reading or writing local state (the key file or the
    /// persisted symbol).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from a source was in an unexpected format, was
    /// missing a required field, or carried an in-band error message
    /// (unknown symbol, exhausted quota).
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// No API key is configured for the named source.
    #[error("no API key configured for the {source} source")]
    MissingApiKey {
        /// Which source the key was needed for (`"weather"`, `"news"`, `"stock"`).
        // Raw identifier opts out of thiserror's source-field inference;
        // this is a plain label, not an underlying error.
        r#source: &'static str,
    },

    /// An invalid lookback window was requested (the day count must be positive).
    #[error("invalid lookback window: {days} days")]
    InvalidWindow {
        /// The normalized day count that was rejected.
        days: i64,
    },
}
