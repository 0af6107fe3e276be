//! # Resolver Configuration
//!
//! The strict/relaxed validation switch, as an immutable value. It is set
//! once when a schema model is constructed and then passed along; there is
//! no process-wide flag to toggle.

use serde::{Deserialize, Serialize};

use crate::resolve::NameResolver;

/// How strictly namespaces are validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Every segment must match `[A-Za-z_][A-Za-z0-9_]*`.
    #[default]
    Strict,
    /// A namespace may begin with a leading dot. Commonly emitted by
    /// non-conformant schema producers.
    Relaxed,
}

impl Validation {
    /// Whether the leading-dot namespace allowance is active.
    pub fn is_relaxed(self) -> bool {
        matches!(self, Self::Relaxed)
    }
}

impl From<bool> for Validation {
    /// `true` selects [`Validation::Relaxed`].
    fn from(relaxed: bool) -> Self {
        if relaxed {
            Self::Relaxed
        } else {
            Self::Strict
        }
    }
}

/// Deserializable configuration for name resolution.
///
/// ```yaml
/// validation: relaxed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Namespace validation mode. Defaults to strict.
    pub validation: Validation,
}

impl ResolverConfig {
    /// Build the resolver this configuration describes.
    pub fn resolver(&self) -> NameResolver {
        NameResolver::new(self.validation)
    }
}
