//! Grid utilities shared by the facade and downstream rendering layers.
//!
//! Modules include:
//! - `aggregate`: fold duplicate-keyed contribution lists into a per-day map
//! - `materialize`: expand an inclusive range into a dense cell sequence
//! - `window`: trailing-window resolution and inclusive day counting
/// Day-key aggregation for duplicate-keyed contribution lists.
pub mod aggregate;
/// Dense, gap-filled cell materialization over an inclusive range.
pub mod materialize;
/// Trailing-window resolution and day-count helpers.
pub mod window;
