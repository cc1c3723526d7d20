use chrono::{Days, NaiveDate};

use crate::clock::{Clock, LocalClock};
use crate::types::GridError;

/// Inclusive count of calendar days between `from` and `to`.
///
/// Computed by date-component subtraction on `NaiveDate`, which carries no
/// time-of-day: a daylight-saving transition inside the range can never skew
/// the count the way a naive millisecond divide would.
#[must_use]
pub fn days_inclusive(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days() + 1
}

/// Resolve a trailing window of `days` calendar days ending today.
///
/// Reads the system [`LocalClock`]; see [`resolve_trailing_window_with`] to
/// inject a fixed clock instead.
///
/// # Errors
/// Returns `Err(GridError::InvalidArg)` when `days` is zero.
pub fn resolve_trailing_window(days: u32) -> Result<(NaiveDate, NaiveDate), GridError> {
    resolve_trailing_window_with(&LocalClock, days)
}

/// Resolve a trailing window of `days` calendar days ending on `clock.today()`.
///
/// The returned pair is inclusive on both ends: `to` is today and `from` is
/// today minus `days - 1`, so `days = 1` yields a single-day window.
///
/// # Errors
/// Returns `Err(GridError::InvalidArg)` when `days` is zero, or when the
/// window start would precede chrono's representable calendar.
pub fn resolve_trailing_window_with<C: Clock>(
    clock: &C,
    days: u32,
) -> Result<(NaiveDate, NaiveDate), GridError> {
    if days == 0 {
        return Err(GridError::invalid_arg(
            "trailing window must cover at least one day",
        ));
    }
    let to = clock.today();
    let from = to
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(|| {
            GridError::invalid_arg(format!("trailing window of {days} days underflows the calendar"))
        })?;
    Ok((from, to))
}
