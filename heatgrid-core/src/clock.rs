//! The "today" capability injected into trailing-window resolution.
//!
//! "Today" is an environmental input. Routing it through a trait keeps the
//! window resolver a pure function of its arguments and lets tests pin the
//! calendar day instead of depending on when they run.

use chrono::{Local, NaiveDate};

/// Source of the current local calendar day.
pub trait Clock {
    /// The current day at local-time granularity. No time-of-day component
    /// is ever consulted.
    fn today(&self) -> NaiveDate;
}

/// System clock reading the local calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed day, for tests and reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
