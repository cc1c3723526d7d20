//! Configuration shared between the facade and downstream rendering layers.

use serde::{Deserialize, Serialize};

use crate::contribution::{Contribution, DayRef};

/// Declarative description of which grid to materialize.
///
/// Range selection: when `days` is set it takes precedence and the fixed
/// endpoints are ignored, not rejected; otherwise both `from_date` and
/// `to_date` must be present and well-formed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
    /// Trailing window length in days, ending today. Overrides the fixed endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
    /// Inclusive start of a fixed range. Ignored when `days` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_date: Option<DayRef>,
    /// Inclusive end of a fixed range. Ignored when `days` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_date: Option<DayRef>,
    /// Contribution records to aggregate into the grid.
    #[serde(default)]
    pub data: Vec<Contribution>,
    /// First day of the week for the layout collaborator, 0 = Sunday through
    /// 6 = Saturday. Forwarded untouched; never affects materialized values.
    #[serde(default)]
    pub start_of_week: u32,
}
