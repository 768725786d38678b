//! Runtime store for content-taxonomy configuration: validated section and
//! entry-type persistence, per-locale URL resolution, and system metadata
//! reporting.

pub mod config;
pub mod db;
pub mod error;
pub mod obs;
pub mod resolve;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        config::{Edition, SystemConfig},
        db::Db,
        error::{Error, ErrorClass, NotFoundKind},
        obs::{Metrics, SystemReport, system_report},
        resolve::{resolve_nested_url_format, resolve_url_format},
    };
    pub use taxodb_schema::prelude::*;
}
