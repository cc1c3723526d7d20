//! Heatgrid computes the per-day cell grid behind calendar contribution
//! graphs (GitHub-style activity heatmaps).
//!
//! Overview
//! - Aggregates sparse, possibly duplicate-keyed `(date, value, summary)`
//!   records into one merged record per calendar day.
//! - Materializes an inclusive date range into a dense, strictly ascending
//!   sequence of [`ContributionCellData`] with zero-filled gaps, ready for a
//!   layout/rendering layer.
//! - Resolves trailing windows ("last N days including today") against an
//!   injectable [`Clock`].
//!
//! Key behaviors and trade-offs
//! - Same-day records fold by summing `value`, while `summary` and `items`
//!   come from the record seen last in input order. This matches the pairwise
//!   merge most callers expect from event streams; reorder your input if a
//!   different record should win a day.
//! - String dates are treated as opaque day keys and never validated: a
//!   malformed key silently matches nothing. Validate upstream if silent
//!   drops are unacceptable for your data.
//! - All date handling is local-calendar-day arithmetic on
//!   [`chrono::NaiveDate`]; no timezone conversion happens anywhere in the
//!   workspace, and day counts are immune to daylight-saving transitions.
//! - `startOfWeek` is carried through for the week-layout collaborator and
//!   has zero effect on cell values or ordering.
//!
//! Examples
//!
//! Materializing a trailing window from a configured builder:
//! ```rust
//! use chrono::NaiveDate;
//! use heatgrid::{Contribution, FixedClock, Heatgrid};
//!
//! let data = vec![
//!     Contribution::new("2024-01-05", 3.0).with_summary("3 commits"),
//!     Contribution::new(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(), 4.0),
//! ];
//! let grid = Heatgrid::builder().days(7).data(data).build()?;
//!
//! let today = FixedClock(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
//! let cells = grid.cells_with(&today)?;
//! assert_eq!(cells.len(), 7);
//! assert_eq!(cells.first().unwrap().date, "2024-01-01");
//! assert_eq!(cells.last().unwrap().date, "2024-01-07");
//!
//! let jan5 = cells.iter().find(|c| c.date == "2024-01-05").unwrap();
//! assert_eq!(jan5.value, 7.0);
//! # Ok::<(), heatgrid::GridError>(())
//! ```
//!
//! Calling the core materializer directly over a fixed range:
//! ```rust
//! use chrono::NaiveDate;
//! use heatgrid::materialize_grid;
//!
//! let from = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! let cells = materialize_grid(from, to, &[], 0)?;
//! assert_eq!(cells.len(), 29);
//! assert!(cells.iter().all(|c| c.value == 0.0));
//! # Ok::<(), heatgrid::GridError>(())
//! ```
#![warn(missing_docs)]

pub(crate) mod core;

pub use core::{Heatgrid, HeatgridBuilder};

pub use heatgrid_core::{
    Clock, FixedClock, LocalClock, aggregate_by_day, days_inclusive, materialize_grid,
    materialize_trailing_grid, materialize_trailing_grid_with, resolve_trailing_window,
    resolve_trailing_window_with,
};

// Re-export core types for convenience
pub use heatgrid_core::types::{
    Contribution, ContributionCellData, ContributionItem, DAY_KEY_FORMAT, DayRef, GraphConfig,
    GridError, ItemLink, day_key,
};
