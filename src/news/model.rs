use serde::Serialize;

/// A single entry from the news source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Headline {
    /// The article title, as received (untruncated).
    pub title: String,
    /// A direct link to the article. Never empty; entries without a usable
    /// link are dropped at fetch time.
    pub link: String,
}

/// One render instruction for the news panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Slot {
    /// A headline to display. The title is already clipped to the panel width.
    Article {
        /// Clipped title text.
        title: String,
        /// Link target for the row.
        link: String,
    },
    /// A fallback row shown once when the feed runs out of entries.
    Placeholder(Placeholder),
}

/// Why a placeholder row is shown instead of an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Placeholder {
    /// The feed returned nothing at all.
    NoResults,
    /// The feed returned fewer entries than the panel has rows.
    NoMoreEntries,
}

impl Placeholder {
    /// The literal text the panel displays for this placeholder.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Placeholder::NoResults => "No results found",
            Placeholder::NoMoreEntries => "No more news to display",
        }
    }
}
