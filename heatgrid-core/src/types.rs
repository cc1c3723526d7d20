//! Re-export of foundational types from `heatgrid-types`.
// Consolidated re-exports so downstream crates can depend on `heatgrid-core` only

pub use heatgrid_types::{
    Contribution, ContributionCellData, ContributionItem, DayRef, GraphConfig, GridError, ItemLink,
};

pub use heatgrid_types::{DAY_KEY_FORMAT, day_key};
