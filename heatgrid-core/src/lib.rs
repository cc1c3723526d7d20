//! heatgrid-core
//!
//! Core algorithms shared across the heatgrid ecosystem.
//!
//! - `grid`: day-key aggregation and dense, gap-filled grid materialization.
//! - `clock`: the injected "today" capability used by trailing windows.
//! - `types`: consolidated re-exports of the `heatgrid-types` DTOs.
//!
//! Everything in this crate is pure and synchronous: no I/O, no async, no
//! retained state between invocations. Each call allocates and returns an
//! independent result, so concurrent callers need no coordination and a
//! reactive caller can re-run materialization on every input change.
#![warn(missing_docs)]

/// The injected "today" capability and its stock implementations.
pub mod clock;
/// Aggregation, materialization, and window-resolution utilities.
pub mod grid;
pub mod types;

pub use clock::{Clock, FixedClock, LocalClock};
pub use grid::aggregate::aggregate_by_day;
pub use grid::materialize::{
    materialize_grid, materialize_trailing_grid, materialize_trailing_grid_with,
};
pub use grid::window::{days_inclusive, resolve_trailing_window, resolve_trailing_window_with};
pub use types::*;
