//! Batch experiments over a parameter grid.
//!
//! - [`ParameterGrid`] / [`BatchRunner`]: run the GA for every parameter
//!   combination, `runs_per_config` times each
//! - [`RunRecord`]: one result row, with CSV read/write helpers
//! - [`BatchSummary`]: aggregate statistics over recorded rows

mod grid;
mod record;
mod summary;

pub use grid::{BatchRunner, ParameterGrid};
pub use record::{read_records, write_records, RunRecord, TOUR_DELIMITER};
pub use summary::BatchSummary;
