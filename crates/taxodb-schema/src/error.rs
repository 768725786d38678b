use serde::Serialize;
use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Field-keyed validation errors, aggregated across a whole candidate so a
/// caller can report every problem at once instead of failing on the first.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ErrorTree(BTreeMap<String, Vec<String>>);

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Record one message against a field key.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Absorb another tree, keeping its field keys as-is.
    pub fn merge(&mut self, other: Self) {
        for (field, mut messages) in other.0 {
            self.0.entry(field).or_default().append(&mut messages);
        }
    }

    /// Absorb another tree, re-keying its fields under a dotted prefix
    /// (`locales.en` + `urlFormat` becomes `locales.en.urlFormat`).
    pub fn merge_under(&mut self, prefix: &str, other: Self) {
        for (field, mut messages) in other.0 {
            let key = if field.is_empty() {
                prefix.to_string()
            } else {
                format!("{prefix}.{field}")
            };
            self.0.entry(key).or_default().append(&mut messages);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of messages across all fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Messages recorded against one field key.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Iterate field keys in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Collapse into a `Result`: `Ok` when no messages were recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }

        Ok(())
    }
}

///
/// err
/// Record a formatted message against a field key of an [`ErrorTree`].
///

#[macro_export]
macro_rules! err {
    ($errs:expr, $field:expr, $($arg:tt)*) => {
        $errs.add($field, format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_multiple_messages_per_field() {
        let mut errs = ErrorTree::new();
        err!(errs, "handle", "handle is required");
        err!(errs, "handle", "handle '{}' is reserved", "id");
        err!(errs, "name", "name is required");

        assert_eq!(errs.len(), 3);
        assert_eq!(errs.get("handle").len(), 2);
        assert!(errs.result().is_err());
    }

    #[test]
    fn merge_under_prefixes_field_keys() {
        let mut inner = ErrorTree::new();
        inner.add("urlFormat", "URL format is required");

        let mut outer = ErrorTree::new();
        outer.merge_under("locales.en", inner);

        assert_eq!(
            outer.get("locales.en.urlFormat"),
            &["URL format is required".to_string()]
        );
    }

    #[test]
    fn empty_tree_is_ok() {
        assert!(ErrorTree::new().result().is_ok());
    }

    #[test]
    fn display_joins_field_and_message() {
        let mut errs = ErrorTree::new();
        errs.add("name", "name is required");

        assert_eq!(errs.to_string(), "name: name is required");
    }
}
