//! Time-window clipping for daily series.

use chrono::{DateTime, Duration, Utc};

use crate::core::EbError;
use crate::stock::model::PricePoint;

/// Returns the points of `points` whose timestamps fall inside
/// `[now - (lookback_days + 1) days, now - 1 day]`, both ends inclusive.
///
/// The window ends one day before `now` so the current, possibly incomplete,
/// trading day stays out of the chart; the extra leading day keeps the window
/// `lookback_days` wide. The filter is a pure per-point predicate: input
/// order is preserved, nothing is sorted or deduplicated, and close values
/// are never inspected. `now` is injected rather than read from the system
/// clock.
///
/// # Errors
///
/// Returns [`EbError::InvalidWindow`] if `lookback_days` is not positive, or
/// if the window bounds fall outside the representable date range.
pub fn clip_window(
    points: &[PricePoint],
    lookback_days: i64,
    now: DateTime<Utc>,
) -> Result<Vec<PricePoint>, EbError> {
    if lookback_days <= 0 {
        return Err(EbError::InvalidWindow {
            days: lookback_days,
        });
    }

    let out_of_range = || EbError::InvalidWindow {
        days: lookback_days,
    };
    let start = Duration::try_days(lookback_days + 1)
        .and_then(|d| now.checked_sub_signed(d))
        .ok_or_else(out_of_range)?;
    let end = now
        .checked_sub_signed(Duration::days(1))
        .ok_or_else(out_of_range)?;

    Ok(points
        .iter()
        .copied()
        .filter(|p| p.ts >= start && p.ts <= end)
        .collect())
}
