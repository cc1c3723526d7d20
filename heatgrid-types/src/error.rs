use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the heatgrid workspace.
///
/// These are local, synchronous validation failures; nothing here is
/// transient or retryable, and no partial grid is ever returned alongside an
/// error. Malformed string day keys are deliberately *not* represented here:
/// they are accepted as opaque keys that silently never join a materialized
/// day.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GridError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// A fixed range whose inclusive start falls after its inclusive end.
    #[error("invalid range: {from} is after {to}")]
    InvalidRange {
        /// Requested inclusive start of the range.
        from: NaiveDate,
        /// Requested inclusive end of the range.
        to: NaiveDate,
    },
}

impl GridError {
    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build an `InvalidRange` error for a reversed pair of endpoints.
    #[must_use]
    pub const fn invalid_range(from: NaiveDate, to: NaiveDate) -> Self {
        Self::InvalidRange { from, to }
    }
}
