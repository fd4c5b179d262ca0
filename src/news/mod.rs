mod api;
mod layout;
mod model;
mod wire;

pub use layout::{MAX_HEADLINES, TITLE_LIMIT, layout};
pub use model::{Headline, Placeholder, Slot};

use crate::core::{EbClient, EbError};

/// Search term used when the caller provides none.
pub const DEFAULT_QUERY: &str = "Oakville";

/// A builder for fetching headlines from the news source.
pub struct NewsBuilder {
    client: EbClient,
    query: Option<String>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with no search term; the fetch will fall
    /// back to [`DEFAULT_QUERY`].
    pub fn new(client: &EbClient) -> Self {
        Self {
            client: client.clone(),
            query: None,
        }
    }

    /// Sets the free-text search term.
    #[must_use]
    pub fn query(mut self, term: impl Into<String>) -> Self {
        self.query = Some(term.into());
        self
    }

    /// Executes the request and fetches the headlines, in feed order.
    ///
    /// Entries missing a title or a non-empty link are dropped, so every
    /// returned [`Headline`] is both displayable and clickable.
    ///
    /// # Errors
    ///
    /// Returns an `EbError` if no news key is configured, the request fails,
    /// or the source reports an in-band error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Vec<Headline>, EbError> {
        api::fetch_headlines(&self.client, self.query.as_deref()).await
    }
}
