//! Heatgrid-specific data transfer objects shared by the core materializer and the facade.
#![warn(missing_docs)]

mod cell;
mod config;
mod contribution;
mod daykey;
mod error;

pub use cell::ContributionCellData;
pub use config::GraphConfig;
pub use contribution::{Contribution, ContributionItem, DayRef, ItemLink};
pub use daykey::{DAY_KEY_FORMAT, day_key};
pub use error::GridError;
