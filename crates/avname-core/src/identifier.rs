//! # Identifier Syntax
//!
//! Every dot-separated segment of a full name must match
//! `[A-Za-z_][A-Za-z0-9_]*`. Only ASCII is accepted; any other character
//! is reported as the offending one.

use crate::config::Validation;
use crate::error::{NameError, NameRule};

/// Validate a single identifier segment.
///
/// Usable on its own by collaborators that apply the same grammar to enum
/// symbols or field names.
///
/// # Errors
///
/// Returns the first [`NameRule`] the segment violates.
pub fn validate_identifier(segment: &str) -> Result<(), NameRule> {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return Err(NameRule::Empty);
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(NameRule::InvalidStart(first));
    }
    match chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        Some(bad) => Err(NameRule::InvalidCharacter(bad)),
        None => Ok(()),
    }
}

/// Validate every segment of an assembled full name.
///
/// Under [`Validation::Relaxed`] the first segment may be empty when at
/// least one more segment follows, which admits a namespace written with a
/// leading dot. The last segment is the local identifier and is always
/// checked strictly.
pub(crate) fn validate_full_name(full_name: &str, validation: Validation) -> Result<(), NameError> {
    let segment_count = full_name.split('.').count();
    for (i, segment) in full_name.split('.').enumerate() {
        if i == 0 && segment.is_empty() && segment_count > 1 && validation.is_relaxed() {
            continue;
        }
        validate_identifier(segment).map_err(|rule| NameError::InvalidName {
            full_name: full_name.to_string(),
            segment: segment.to_string(),
            rule,
        })?;
    }
    Ok(())
}
