//! Lookback windows for the stock panel's time-range selector.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of a lookback window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookbackUnit {
    /// Calendar days.
    Days,
    /// Months, approximated as 30 days each.
    Months,
    /// Years, approximated as 365 days each.
    Years,
}

impl LookbackUnit {
    /// Day count of a single unit. Months and years use the fixed 30/365
    /// approximation rather than calendar arithmetic, so the window width
    /// never depends on which month or year it lands in.
    #[must_use]
    pub const fn days(&self) -> i64 {
        match self {
            Self::Days => 1,
            Self::Months => 30,
            Self::Years => 365,
        }
    }

    /// Returns the unit as its display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "Days",
            Self::Months => "Months",
            Self::Years => "Years",
        }
    }
}

/// A trailing span of time over which stock points are kept for display,
/// e.g. "3 Days" or "1 Year".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lookback {
    /// How many units back to look.
    pub count: u32,
    /// The unit of the span.
    pub unit: LookbackUnit,
}

impl Lookback {
    /// Creates a lookback of `count` units.
    #[must_use]
    pub const fn new(count: u32, unit: LookbackUnit) -> Self {
        Self { count, unit }
    }

    /// A lookback of `count` days.
    #[must_use]
    pub const fn days(count: u32) -> Self {
        Self::new(count, LookbackUnit::Days)
    }

    /// A lookback of `count` months.
    #[must_use]
    pub const fn months(count: u32) -> Self {
        Self::new(count, LookbackUnit::Months)
    }

    /// A lookback of `count` years.
    #[must_use]
    pub const fn years(count: u32) -> Self {
        Self::new(count, LookbackUnit::Years)
    }

    /// Normalized width of the window in days (`count` × 1/30/365).
    #[must_use]
    pub const fn total_days(&self) -> i64 {
        self.count as i64 * self.unit.days()
    }
}

impl Default for Lookback {
    /// The range selector starts at one year.
    fn default() -> Self {
        Self::years(1)
    }
}

impl std::fmt::Display for Lookback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.unit.as_str();
        if self.count == 1 {
            write!(f, "1 {}", &unit[..unit.len() - 1])
        } else {
            write!(f, "{} {}", self.count, unit)
        }
    }
}

impl FromStr for Lookback {
    type Err = LookbackParseError;

    /// Parses selector labels like `"3 Days"`, `"6 Months"`, or `"1 Year"`.
    /// Case-insensitive; singular and plural unit names both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let count = parts.next().and_then(|c| c.parse::<u32>().ok());
        let unit = parts.next().map(str::to_lowercase);
        let (Some(count), Some(unit), None) = (count, unit, parts.next()) else {
            return Err(LookbackParseError(s.to_string()));
        };
        let unit = match unit.as_str() {
            "day" | "days" => LookbackUnit::Days,
            "month" | "months" => LookbackUnit::Months,
            "year" | "years" => LookbackUnit::Years,
            _ => return Err(LookbackParseError(s.to_string())),
        };
        Ok(Self { count, unit })
    }
}

/// Error returned when parsing an invalid lookback string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookbackParseError(String);

impl std::fmt::Display for LookbackParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid lookback '{}', expected '<count> <Days|Months|Years>'",
            self.0
        )
    }
}

impl std::error::Error for LookbackParseError {}
