use std::collections::BTreeMap;

use serde::Deserialize;

/* ---- daily series envelope (only the fields we need) ---- */

// The map is keyed by ISO dates, so the BTreeMap ordering is chronological.
#[derive(Deserialize)]
pub(crate) struct DailyEnvelope {
    #[serde(rename = "Time Series (Daily)")]
    pub(crate) series: Option<BTreeMap<String, DailyBar>>,
    /// Set for unknown symbols and malformed requests.
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
    /// Set when the call quota is exhausted.
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    /// Newer quota and entitlement notices arrive under this key.
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct DailyBar {
    #[serde(rename = "4. close")]
    pub(crate) close: String,
}
