//! # Name
//!
//! The resolved identity of a named schema entity.
//!
//! A [`Name`] holds only its full name. The namespace and short name are
//! both slices of it, split at the last dot, so they can never disagree with
//! the full name.

use std::fmt;

use serde::Serialize;

/// A validated, fully-qualified schema name such as `org.foo.X`.
///
/// Only obtainable through [`resolve`](crate::resolve()) or
/// [`resolve_from_map`](crate::resolve_from_map()). Equality, ordering, and
/// hashing are those of the full name, which is the identity used by type
/// registries. Serializes as the full-name string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Name {
    full_name: String,
}

impl Name {
    /// Wrap an already validated full name.
    pub(crate) fn new_unchecked(full_name: String) -> Self {
        Self { full_name }
    }

    /// The canonical fully-qualified name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The namespace: everything before the last dot, or `""` when the
    /// full name has no dot.
    pub fn namespace(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(idx) => &self.full_name[..idx],
            None => "",
        }
    }

    /// The trailing identifier after the last dot, or the whole full name
    /// when it has no dot.
    pub fn short_name(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(idx) => &self.full_name[idx + 1..],
            None => &self.full_name,
        }
    }

    /// Whether the name lives in a non-null namespace.
    pub fn is_qualified(&self) -> bool {
        self.full_name.contains('.')
    }

    /// Same as [`Name::full_name`].
    pub fn as_str(&self) -> &str {
        &self.full_name
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.full_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_last_dot() {
        let n = Name::new_unchecked("org.bar.X".to_string());
        assert_eq!(n.full_name(), "org.bar.X");
        assert_eq!(n.namespace(), "org.bar");
        assert_eq!(n.short_name(), "X");
        assert!(n.is_qualified());
    }

    #[test]
    fn bare_name_has_null_namespace() {
        let n = Name::new_unchecked("bar".to_string());
        assert_eq!(n.namespace(), "");
        assert_eq!(n.short_name(), "bar");
        assert!(!n.is_qualified());
    }

    #[test]
    fn leading_dot_namespace_is_kept_verbatim() {
        let n = Name::new_unchecked(".org.foo.X".to_string());
        assert_eq!(n.namespace(), ".org.foo");
        assert_eq!(n.short_name(), "X");
    }

    #[test]
    fn display_and_serialize_use_full_name() {
        let n = Name::new_unchecked("org.foo.X".to_string());
        assert_eq!(n.to_string(), "org.foo.X");
        assert_eq!(n.as_ref(), "org.foo.X");
        assert_eq!(serde_json::to_string(&n).unwrap(), r#""org.foo.X""#);
        assert_eq!(String::from(n), "org.foo.X");
    }
}
