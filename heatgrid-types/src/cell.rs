//! The per-day output cell produced by the grid materializer.

use serde::{Deserialize, Serialize};

use crate::contribution::ContributionItem;

/// One materialized calendar day, ready for the layout layer.
///
/// Exactly one cell exists per day of the requested inclusive range. Days
/// with no matching input record carry `value = 0` and neither summary nor
/// items. All derived fields come from local calendar accessors, not UTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCellData {
    /// Canonical `yyyy-MM-dd` key of this day.
    pub date: String,
    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub week_day: u32,
    /// Zero-based month, 0 = January through 11 = December.
    pub month: u32,
    /// One-based day of month, 1 through 31.
    pub month_date: u32,
    /// Calendar year.
    pub year: i32,
    /// Aggregated contribution value for the day.
    pub value: f64,
    /// Summary from the record that won the day's merge, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Sub-entries from the record that won the day's merge, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ContributionItem>>,
}
