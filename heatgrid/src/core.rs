use chrono::NaiveDate;

use heatgrid_core::clock::{Clock, LocalClock};
use heatgrid_core::types::{Contribution, ContributionCellData, DayRef, GraphConfig, GridError};
use heatgrid_core::{materialize_grid, resolve_trailing_window_with};

/// A configured contribution-grid computation.
///
/// Holds a validated [`GraphConfig`] and materializes it on demand; carries
/// no other state, so a single instance can be shared and re-queried freely.
#[derive(Debug)]
pub struct Heatgrid {
    pub(crate) cfg: GraphConfig,
}

/// Builder for constructing a [`Heatgrid`] with custom configuration.
pub struct HeatgridBuilder {
    cfg: GraphConfig,
}

impl Default for HeatgridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatgridBuilder {
    /// Create a new builder with an empty configuration.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no range: you must set either [`days`](Self::days) or
    ///   both [`from_date`](Self::from_date) and [`to_date`](Self::to_date)
    ///   before calling [`build`](Self::build).
    /// - `start_of_week` defaults to 0 (Sunday) and only matters to the
    ///   downstream layout layer; cell values never depend on it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: GraphConfig::default(),
        }
    }

    /// Seed the builder from an existing configuration.
    #[must_use]
    pub fn config(mut self, cfg: GraphConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select a trailing window of `days` calendar days ending today.
    ///
    /// Behavior and trade-offs:
    /// - Takes precedence over any fixed endpoints, matching the config
    ///   contract of contribution-graph front ends: when both are present
    ///   the endpoints are ignored, not rejected.
    #[must_use]
    pub const fn days(mut self, days: u32) -> Self {
        self.cfg.days = Some(days);
        self
    }

    /// Set the inclusive start of a fixed range.
    ///
    /// Accepts a structured `NaiveDate` or a `yyyy-MM-dd` string. Unlike
    /// contribution dates, a range endpoint must be well-formed; a malformed
    /// string is rejected at materialization time.
    #[must_use]
    pub fn from_date(mut self, from: impl Into<DayRef>) -> Self {
        self.cfg.from_date = Some(from.into());
        self
    }

    /// Set the inclusive end of a fixed range.
    #[must_use]
    pub fn to_date(mut self, to: impl Into<DayRef>) -> Self {
        self.cfg.to_date = Some(to.into());
        self
    }

    /// Replace the contribution records.
    #[must_use]
    pub fn data(mut self, data: Vec<Contribution>) -> Self {
        self.cfg.data = data;
        self
    }

    /// Append a single contribution record.
    ///
    /// Input order matters for same-day merges: the record pushed last wins
    /// `summary` and `items` for its day.
    #[must_use]
    pub fn push(mut self, record: Contribution) -> Self {
        self.cfg.data.push(record);
        self
    }

    /// Set the first day of the week forwarded to the layout collaborator
    /// (0 = Sunday through 6 = Saturday). Has no effect on cell values.
    #[must_use]
    pub const fn start_of_week(mut self, day: u32) -> Self {
        self.cfg.start_of_week = day;
        self
    }

    /// Validate the configuration and finalize the grid.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` when no range is configured
    /// (neither `days` nor both fixed endpoints), when `days` is zero, or
    /// when `start_of_week` is outside `0..=6`.
    pub fn build(self) -> Result<Heatgrid, GridError> {
        let cfg = self.cfg;
        if cfg.start_of_week > 6 {
            return Err(GridError::invalid_arg(format!(
                "startOfWeek must be within 0..=6, got {}",
                cfg.start_of_week
            )));
        }
        match (cfg.days, &cfg.from_date, &cfg.to_date) {
            (Some(0), _, _) => Err(GridError::invalid_arg(
                "trailing window must cover at least one day",
            )),
            (Some(_), _, _) | (None, Some(_), Some(_)) => Ok(Heatgrid { cfg }),
            (None, _, _) => Err(GridError::invalid_arg(
                "either days or both fromDate and toDate must be set",
            )),
        }
    }
}

impl Heatgrid {
    /// Start building a grid configuration.
    #[must_use]
    pub fn builder() -> HeatgridBuilder {
        HeatgridBuilder::new()
    }

    /// Borrow the underlying configuration.
    #[must_use]
    pub const fn config(&self) -> &GraphConfig {
        &self.cfg
    }

    /// Materialize the configured grid, reading "today" from the system
    /// [`LocalClock`] when a trailing window is configured.
    ///
    /// # Errors
    /// See [`cells_with`](Self::cells_with).
    pub fn cells(&self) -> Result<Vec<ContributionCellData>, GridError> {
        self.cells_with(&LocalClock)
    }

    /// Materialize the configured grid, reading "today" from `clock`.
    ///
    /// Resolution order mirrors the configuration contract: a configured
    /// `days` trailing window wins; otherwise both fixed endpoints are
    /// parsed and used as an inclusive range.
    ///
    /// # Errors
    /// - `Err(GridError::InvalidArg)` for a missing or malformed fixed
    ///   endpoint, or a zero-day trailing window.
    /// - `Err(GridError::InvalidRange)` when the resolved start falls after
    ///   the resolved end.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "debug", skip(self, clock), fields(records = self.cfg.data.len()))
    )]
    pub fn cells_with<C: Clock>(&self, clock: &C) -> Result<Vec<ContributionCellData>, GridError> {
        let (from, to) = self.resolve_range(clock)?;
        materialize_grid(from, to, &self.cfg.data, self.cfg.start_of_week)
    }

    fn resolve_range<C: Clock>(&self, clock: &C) -> Result<(NaiveDate, NaiveDate), GridError> {
        if let Some(days) = self.cfg.days {
            return resolve_trailing_window_with(clock, days);
        }
        let from = Self::endpoint(self.cfg.from_date.as_ref(), "fromDate")?;
        let to = Self::endpoint(self.cfg.to_date.as_ref(), "toDate")?;
        Ok((from, to))
    }

    fn endpoint(value: Option<&DayRef>, field: &str) -> Result<NaiveDate, GridError> {
        let day_ref = value.ok_or_else(|| {
            GridError::invalid_arg(format!("{field} is required when days is not set"))
        })?;
        day_ref.to_day().ok_or_else(|| {
            GridError::invalid_arg(format!(
                "{field} is not a yyyy-MM-dd day: {}",
                day_ref.to_key()
            ))
        })
    }
}
