use chrono::{Datelike, NaiveDate};

use crate::clock::{Clock, LocalClock};
use crate::grid::aggregate::aggregate_by_day;
use crate::grid::window::{days_inclusive, resolve_trailing_window_with};
use crate::types::{Contribution, ContributionCellData, GridError, day_key};

/// Materialize one cell per calendar day of the inclusive `[from, to]` range.
///
/// - Output is dense and strictly ascending by date: exactly
///   [`days_inclusive`]`(from, to)` cells, earliest day first, no gaps.
/// - Contributions are folded per day key first (see [`aggregate_by_day`]);
///   a day with no matching record materializes with `value = 0` and neither
///   summary nor items.
/// - Records dated outside the range are silently ignored: they occupy the
///   aggregation map but are never looked up.
/// - `start_of_week` (0 = Sunday through 6 = Saturday) is accepted for
///   signature symmetry with the week-layout collaborator and has zero
///   effect on the produced cells.
///
/// # Errors
/// - `Err(GridError::InvalidRange)` when `from` is after `to`.
/// - `Err(GridError::InvalidArg)` when `start_of_week` is outside `0..=6` or
///   the range spans more days than are addressable.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(data), fields(records = data.len()))
)]
pub fn materialize_grid(
    from: NaiveDate,
    to: NaiveDate,
    data: &[Contribution],
    start_of_week: u32,
) -> Result<Vec<ContributionCellData>, GridError> {
    if from > to {
        return Err(GridError::invalid_range(from, to));
    }
    if start_of_week > 6 {
        return Err(GridError::invalid_arg(format!(
            "startOfWeek must be within 0..=6, got {start_of_week}"
        )));
    }

    let mut merged = aggregate_by_day(data);
    let len = usize::try_from(days_inclusive(from, to))
        .map_err(|_| GridError::invalid_arg("range spans more days than are addressable"))?;

    let mut cells = Vec::with_capacity(len);
    for day in from.iter_days().take(len) {
        let key = day_key(day);
        let hit = merged.remove(&key);
        cells.push(cell_for_day(day, key, hit));
    }
    Ok(cells)
}

/// Materialize a trailing window of `days` calendar days ending today.
///
/// Reads the system [`LocalClock`]; see [`materialize_trailing_grid_with`] to
/// inject a fixed clock instead.
///
/// # Errors
/// - `Err(GridError::InvalidArg)` when `days` is zero or `start_of_week` is
///   outside `0..=6`.
pub fn materialize_trailing_grid(
    days: u32,
    data: &[Contribution],
    start_of_week: u32,
) -> Result<Vec<ContributionCellData>, GridError> {
    materialize_trailing_grid_with(&LocalClock, days, data, start_of_week)
}

/// Materialize a trailing window of `days` calendar days ending on
/// `clock.today()`.
///
/// Composition of [`resolve_trailing_window_with`](crate::grid::window::resolve_trailing_window_with)
/// and [`materialize_grid`]; `start_of_week` is forwarded unchanged.
///
/// # Errors
/// - `Err(GridError::InvalidArg)` when `days` is zero or `start_of_week` is
///   outside `0..=6`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip(clock, data), fields(records = data.len()))
)]
pub fn materialize_trailing_grid_with<C: Clock>(
    clock: &C,
    days: u32,
    data: &[Contribution],
    start_of_week: u32,
) -> Result<Vec<ContributionCellData>, GridError> {
    let (from, to) = resolve_trailing_window_with(clock, days)?;
    materialize_grid(from, to, data, start_of_week)
}

fn cell_for_day(day: NaiveDate, key: String, hit: Option<Contribution>) -> ContributionCellData {
    let (value, summary, items) = match hit {
        Some(c) => (c.value, c.summary, c.items),
        None => (0.0, None, None),
    };
    ContributionCellData {
        date: key,
        week_day: day.weekday().num_days_from_sunday(),
        month: day.month0(),
        month_date: day.day(),
        year: day.year(),
        value,
        summary,
        items,
    }
}
