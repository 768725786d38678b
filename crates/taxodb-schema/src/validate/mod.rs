//! Candidate validation orchestration.
//!
//! Validation is non-failing at the traversal level: all issues are
//! aggregated into an [`ErrorTree`] and returned together so a caller can
//! redisplay every problem at once.

pub(crate) mod naming;

use crate::{
    err,
    error::ErrorTree,
    node::{EntryType, Section},
    registry::LocaleRegistry,
};

/// Validate a section candidate against its peers and the locale registry.
///
/// `existing` is every persisted section; the candidate itself (matched by
/// id) is skipped so updates do not collide with their own record.
pub fn validate_section<'a>(
    candidate: &Section,
    existing: impl IntoIterator<Item = &'a Section>,
    registry: &LocaleRegistry,
) -> Result<(), ErrorTree> {
    // Phase 1: node-local invariants.
    let mut errs = candidate.validate(registry);

    // Phase 2: scope-wide invariants (uniqueness, homepage exclusivity).
    let candidate_is_homepage = candidate.is_homepage();

    for other in existing {
        if other.id.is_some() && other.id == candidate.id {
            continue;
        }

        if other.name == candidate.name {
            err!(errs, "name", "name '{}' is already in use", candidate.name);
        }
        if other.handle == candidate.handle {
            err!(
                errs,
                "handle",
                "handle '{}' is already in use",
                candidate.handle
            );
        }
        if candidate_is_homepage && other.is_homepage() {
            err!(
                errs,
                "locales",
                "section '{}' already serves the homepage",
                other.handle
            );
        }
    }

    errs.result()
}

/// Validate an entry-type candidate against its siblings in the same
/// section. The candidate itself (matched by id) is skipped.
pub fn validate_entry_type<'a>(
    candidate: &EntryType,
    siblings: impl IntoIterator<Item = &'a EntryType>,
) -> Result<(), ErrorTree> {
    let mut errs = candidate.validate();

    for other in siblings {
        if other.id.is_some() && other.id == candidate.id {
            continue;
        }

        if other.name == candidate.name {
            err!(
                errs,
                "name",
                "name '{}' is already in use in this section",
                candidate.name
            );
        }
        if other.handle == candidate.handle {
            err!(
                errs,
                "handle",
                "handle '{}' is already in use in this section",
                candidate.handle
            );
        }
    }

    errs.result()
}
