//! # Error Hierarchy
//!
//! Structured errors for name resolution, built with `thiserror`.
//!
//! Every failure aborts construction of the schema entity being resolved.
//! The input schema text is malformed, so none of these are retryable.

use std::fmt;

use thiserror::Error;

/// The identifier-syntax rule a name segment violated.
///
/// Identifiers follow `[A-Za-z_][A-Za-z0-9_]*`, ASCII only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameRule {
    /// The segment is empty (e.g. `org..X`, a trailing dot, or an empty name).
    Empty,
    /// The first character is not an ASCII letter or underscore.
    InvalidStart(char),
    /// A later character is not an ASCII letter, digit, or underscore.
    InvalidCharacter(char),
}

impl fmt::Display for NameRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "must be non-empty"),
            Self::InvalidStart(c) => {
                write!(f, "must start with [A-Za-z_], but found {c:?}")
            }
            Self::InvalidCharacter(c) => {
                write!(f, "must contain only [A-Za-z0-9_], but found {c:?}")
            }
        }
    }
}

/// Errors returned by [`resolve`](crate::resolve()) and
/// [`resolve_from_map`](crate::resolve_from_map()).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A segment of the name or namespace violates identifier syntax.
    #[error("invalid schema name \"{full_name}\": segment \"{segment}\" {rule}")]
    InvalidName {
        /// The full name as assembled before validation.
        full_name: String,
        /// The dot-separated segment that failed.
        segment: String,
        /// The rule the segment broke.
        rule: NameRule,
    },

    /// The schema definition has no `name` key.
    #[error("schema definition has no \"name\" key")]
    MissingNameField,

    /// The `name` key is present but is not a non-empty string.
    #[error("schema \"name\" must be a non-empty string, found {found}")]
    MalformedNameField {
        /// JSON type (or `empty string`) that was received.
        found: String,
    },

    /// The `namespace` key is present but is not a string.
    #[error("schema \"namespace\", if provided, must be a string, found {found}")]
    MalformedNamespaceField {
        /// JSON type that was received.
        found: String,
    },
}

impl NameError {
    /// Whether this is an identifier-syntax failure, as opposed to a
    /// structural problem with the schema definition mapping.
    pub fn is_invalid_name(&self) -> bool {
        matches!(self, Self::InvalidName { .. })
    }
}
