//! ## Crate layout
//! - `core`: runtime store, commit protocol, URL resolution, observability.
//! - `schema`: data model, validation, and sanitization.
//!
//! The `prelude` module mirrors the surface an adapter layer consumes.

pub use taxodb_core as core;
pub use taxodb_schema as schema;

pub use taxodb_core::error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use taxodb_core::prelude::*;
}
