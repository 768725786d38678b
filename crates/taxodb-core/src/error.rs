use std::fmt;
use taxodb_schema::{
    error::ErrorTree,
    types::{EntryTypeId, SectionId},
};
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured runtime error with a stable classification.
///
/// Validation failures are recoverable: the caller gets every field error at
/// once and may redisplay the candidate. Not-found failures are client
/// errors, never retried. Conflicts detected at the commit boundary are
/// surfaced as validation errors, not as a separate fatal class.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),

    #[error("{kind} not found: {id}")]
    NotFound { kind: NotFoundKind, id: u64 },
}

impl Error {
    pub(crate) const fn section_not_found(id: SectionId) -> Self {
        Self::NotFound {
            kind: NotFoundKind::Section,
            id: id.get(),
        }
    }

    pub(crate) const fn entry_type_not_found(id: EntryTypeId) -> Self {
        Self::NotFound {
            kind: NotFoundKind::EntryType,
            id: id.get(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Validation(_) => ErrorClass::Validation,
            Self::NotFound { .. } => ErrorClass::NotFound,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Field-keyed errors when this is a validation failure.
    #[must_use]
    pub const fn validation_errors(&self) -> Option<&ErrorTree> {
        match self {
            Self::Validation(errs) => Some(errs),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ErrorTree> for Error {
    fn from(errs: ErrorTree) -> Self {
        Self::Validation(errs)
    }
}

///
/// ErrorClass
/// Error taxonomy for caller-side classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum ErrorClass {
    NotFound,
    Validation,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not_found",
            Self::Validation => "validation",
        };
        write!(f, "{label}")
    }
}

///
/// NotFoundKind
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[remain::sorted]
pub enum NotFoundKind {
    EntryType,
    Section,
}

impl fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::EntryType => "entry type",
            Self::Section => "section",
        };
        write!(f, "{label}")
    }
}
