mod api;
mod model;
mod wire;

pub use model::{WeatherReading, WeatherSnapshot};

use crate::core::{EbClient, EbError};

/// A builder for fetching current conditions for a location.
pub struct WeatherBuilder {
    client: EbClient,
    location: String,
}

impl WeatherBuilder {
    /// Creates a new `WeatherBuilder` for a location name (e.g., `"Oakville"`).
    pub fn new(client: &EbClient, location: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            location: location.into(),
        }
    }

    /// Executes the request and fetches the current conditions.
    ///
    /// # Errors
    ///
    /// Returns an `EbError` if no weather key is configured, the request
    /// fails, or the response is missing the temperature fields.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(location = %self.location)))]
    pub async fn fetch(self) -> Result<WeatherReading, EbError> {
        api::fetch_weather(&self.client, &self.location).await
    }
}
