use crate::{MAX_HANDLE_LEN, MAX_NAME_LEN, err, error::ErrorTree};

// Handles that collide with built-in record attributes.
const RESERVED_HANDLES: &[&str] = &[
    "archived",
    "dateCreated",
    "dateUpdated",
    "enabled",
    "handle",
    "id",
    "locale",
    "name",
    "sortOrder",
    "title",
    "type",
    "uid",
];

/// Ensure a display name is non-empty and within the maximum length.
pub(crate) fn validate_name(errs: &mut ErrorTree, field: &str, name: &str) {
    if name.is_empty() {
        err!(errs, field, "name is required");
        return;
    }
    if name.len() > MAX_NAME_LEN {
        err!(errs, field, "name exceeds max length {MAX_NAME_LEN}");
    }
}

/// Ensure a handle is non-empty, identifier-safe, not reserved, and within
/// the maximum length.
pub(crate) fn validate_handle(errs: &mut ErrorTree, field: &str, handle: &str) {
    if handle.is_empty() {
        err!(errs, field, "handle is required");
        return;
    }
    if handle.len() > MAX_HANDLE_LEN {
        err!(errs, field, "handle exceeds max length {MAX_HANDLE_LEN}");
    }
    if !is_identifier(handle) {
        err!(
            errs,
            field,
            "handle '{handle}' must start with a letter and contain only letters, digits, and underscores"
        );
    }
    if RESERVED_HANDLES.contains(&handle) {
        err!(errs, field, "handle '{handle}' is a reserved word");
    }
}

// Equivalent to ^[A-Za-z][A-Za-z0-9_]*$.
fn is_identifier(handle: &str) -> bool {
    let mut chars = handle.chars();

    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
