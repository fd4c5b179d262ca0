//! Symbol-input resolution for the stock panel.
//!
//! The symbol field doubles as its own prompt: when nothing has been typed
//! it displays [`SENTINEL`], and after a failed query it displays one of two
//! reset messages. Resolution turns whatever the field currently holds into
//! either a symbol worth querying or the prompt outcome.

/// Placeholder text the symbol field shows when it holds no user input.
pub const SENTINEL: &str = "Enter Stock Symbol";

/// Reset message shown after a failed query of a genuine symbol attempt.
pub const REJECTED_MESSAGE: &str = "Invalid Stock Symbol/Out of api uses";

/// Outcome of resolving the raw symbol-field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A symbol to fetch.
    Query(String),
    /// Nothing fetchable; the field resets to the [`SENTINEL`] prompt.
    Prompt,
}

/// Resolves the raw symbol-field text against the persisted last-known symbol.
///
/// Tickers never contain whitespace, so all whitespace is stripped before
/// comparison; `" enter stock  symbol "` is still the sentinel, not a query.
/// Empty or sentinel input falls back to `persisted`; text matching a reset
/// message resolves straight to [`Resolution::Prompt`] rather than issuing a
/// request that can only fail.
#[must_use]
pub fn resolve(input: &str, persisted: Option<&str>) -> Resolution {
    let normalized = strip_whitespace(input);
    if normalized.is_empty() || normalized == strip_whitespace(SENTINEL) {
        return match persisted {
            Some(symbol) => Resolution::Query(symbol.to_string()),
            None => Resolution::Prompt,
        };
    }
    if normalized == strip_whitespace(REJECTED_MESSAGE) {
        return Resolution::Prompt;
    }
    Resolution::Query(normalized)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
