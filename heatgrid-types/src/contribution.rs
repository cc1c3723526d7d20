//! Input records supplied by callers of the grid materializer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::daykey::{DAY_KEY_FORMAT, day_key};

/// A calendar day supplied either structured or as a raw `yyyy-MM-dd` string.
///
/// Both arms aggregate identically when they denote the same day: the
/// structured arm is formatted with [`day_key`] and a well-formed string is
/// already in that shape. A malformed string is *not* an error; it is kept
/// verbatim as an opaque key that will simply never match a materialized day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayRef {
    /// A structured calendar day.
    Day(NaiveDate),
    /// A raw day key, used verbatim without validation or reformatting.
    Key(String),
}

impl DayRef {
    /// Canonical aggregation/lookup key for this date.
    #[must_use]
    pub fn to_key(&self) -> String {
        match self {
            Self::Day(d) => day_key(*d),
            Self::Key(s) => s.clone(),
        }
    }

    /// Parse back into a structured day, if the key is well-formed.
    #[must_use]
    pub fn to_day(&self) -> Option<NaiveDate> {
        match self {
            Self::Day(d) => Some(*d),
            Self::Key(s) => NaiveDate::parse_from_str(s, DAY_KEY_FORMAT).ok(),
        }
    }
}

impl From<NaiveDate> for DayRef {
    fn from(day: NaiveDate) -> Self {
        Self::Day(day)
    }
}

impl From<String> for DayRef {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

impl From<&str> for DayRef {
    fn from(key: &str) -> Self {
        Self::Key(key.to_owned())
    }
}

/// A single dated contribution record.
///
/// `value` must be a finite number. Absence of activity on a day is expressed
/// by having no record for that day, never by a null or missing value.
/// Several records may share a day; the materializer sums their values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// The day this contribution belongs to.
    pub date: DayRef,
    /// Contribution magnitude for that day.
    pub value: f64,
    /// Free-text annotation, surfaced on the cell whose merge this record wins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Optional sub-entries; opaque to aggregation and passed through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ContributionItem>>,
}

impl Contribution {
    /// Build a record with no summary or sub-entries.
    #[must_use]
    pub fn new(date: impl Into<DayRef>, value: f64) -> Self {
        Self {
            date: date.into(),
            value,
            summary: None,
            items: None,
        }
    }

    /// Attach a free-text summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Attach sub-entries.
    #[must_use]
    pub fn with_items(mut self, items: Vec<ContributionItem>) -> Self {
        self.items = Some(items);
        self
    }
}

/// A labeled sub-entry of a contribution (e.g. one event among several on a day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionItem {
    /// Display label.
    pub label: String,
    /// Magnitude of this sub-entry. Never aggregated by the core.
    pub value: f64,
    /// Optional navigation payload for the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ItemLink>,
}

/// Hyperlink payload carried by a [`ContributionItem`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemLink {
    /// Link destination.
    pub href: String,
    /// Optional `target` attribute (e.g. `_blank`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Optional class hook for the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Optional `rel` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}
