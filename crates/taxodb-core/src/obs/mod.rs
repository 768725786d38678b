//! Observability: mutation counters and the system metadata report.
//!
//! This module reads store state through the `Db` accessors only; it never
//! reaches into storage internals.

mod metrics;
mod report;

pub use metrics::Metrics;
pub use report::SystemReport;

use crate::{db::Db, error::Error};

/// Build a point-in-time system metadata report for administrative surfaces.
pub fn system_report(db: &Db) -> Result<SystemReport, Error> {
    SystemReport::collect(db)
}
