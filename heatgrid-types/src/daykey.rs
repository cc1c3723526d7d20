//! The canonical day-key primitive used for aggregation and lookup.

use chrono::NaiveDate;

/// `strftime` pattern for the canonical, zero-padded `yyyy-MM-dd` day key.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar day into its canonical `yyyy-MM-dd` key.
///
/// The key is derived from local calendar fields only; no timezone conversion
/// is ever applied anywhere in the workspace.
#[must_use]
pub fn day_key(day: NaiveDate) -> String {
    day.format(DAY_KEY_FORMAT).to_string()
}
