//! # Name Resolution
//!
//! Reconciles a declared name, an explicit namespace, and the namespace
//! inherited from the enclosing schema entity into a single [`Name`].
//!
//! A dotted name is self-describing and short-circuits everything else.
//! Only a bare name consults `namespace`, then `enclosing_namespace`.

use serde_json::{Map, Value};

use crate::config::Validation;
use crate::error::NameError;
use crate::identifier::validate_full_name;
use crate::name::Name;

/// Resolve a schema entity's name.
///
/// - `name` containing a dot is taken verbatim as the full name; `namespace`
///   and `enclosing_namespace` are ignored.
/// - Otherwise the effective namespace is `namespace` if non-empty, else
///   `enclosing_namespace` if non-empty, else the null namespace.
///
/// # Errors
///
/// Returns [`NameError::InvalidName`] for the first segment of the
/// assembled full name that violates identifier syntax.
pub fn resolve(
    name: &str,
    namespace: &str,
    enclosing_namespace: &str,
    validation: Validation,
) -> Result<Name, NameError> {
    let full_name = if name.contains('.') {
        name.to_string()
    } else {
        let effective = if !namespace.is_empty() {
            namespace
        } else {
            enclosing_namespace
        };
        if effective.is_empty() {
            name.to_string()
        } else {
            format!("{effective}.{name}")
        }
    };

    if let Err(e) = validate_full_name(&full_name, validation) {
        tracing::debug!(name, namespace, enclosing_namespace, ?validation, error = %e, "rejected schema name");
        return Err(e);
    }

    tracing::trace!(full_name = %full_name, "resolved schema name");
    Ok(Name::new_unchecked(full_name))
}

/// Resolve the name declared by a schema-definition mapping.
///
/// Reads `name` (required, non-empty string) and `namespace` (optional
/// string, default empty) and delegates to [`resolve`]. Other keys are
/// ignored.
///
/// # Errors
///
/// - [`NameError::MissingNameField`] if `name` is absent.
/// - [`NameError::MalformedNameField`] if `name` is not a non-empty string.
/// - [`NameError::MalformedNamespaceField`] if `namespace` is not a string.
/// - [`NameError::InvalidName`] as for [`resolve`].
pub fn resolve_from_map(
    enclosing_namespace: &str,
    schema_map: &Map<String, Value>,
    validation: Validation,
) -> Result<Name, NameError> {
    let name = match schema_map.get("name") {
        None => return Err(NameError::MissingNameField),
        Some(Value::String(s)) if !s.is_empty() => s.as_str(),
        Some(Value::String(_)) => {
            return Err(NameError::MalformedNameField {
                found: "empty string".to_string(),
            })
        }
        Some(other) => {
            return Err(NameError::MalformedNameField {
                found: json_type_name(other).to_string(),
            })
        }
    };

    let namespace = match schema_map.get("namespace") {
        None => "",
        Some(Value::String(s)) => s.as_str(),
        Some(other) => {
            return Err(NameError::MalformedNamespaceField {
                found: json_type_name(other).to_string(),
            })
        }
    };

    resolve(name, namespace, enclosing_namespace, validation)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An immutable resolution context carrying the validation mode.
///
/// Built once during schema-model construction and passed by value to
/// whatever parses schema definitions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameResolver {
    validation: Validation,
}

impl NameResolver {
    /// Create a resolver with the given validation mode.
    pub const fn new(validation: Validation) -> Self {
        Self { validation }
    }

    /// A resolver that rejects every non-conforming segment.
    pub const fn strict() -> Self {
        Self::new(Validation::Strict)
    }

    /// A resolver that admits a leading-dot namespace.
    pub const fn relaxed() -> Self {
        Self::new(Validation::Relaxed)
    }

    /// The validation mode this resolver applies.
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// See [`resolve`].
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidName`] on identifier-syntax violations.
    pub fn resolve(
        &self,
        name: &str,
        namespace: &str,
        enclosing_namespace: &str,
    ) -> Result<Name, NameError> {
        resolve(name, namespace, enclosing_namespace, self.validation)
    }

    /// See [`resolve_from_map`].
    ///
    /// # Errors
    ///
    /// Returns any [`NameError`] variant; see [`resolve_from_map`].
    pub fn resolve_from_map(
        &self,
        enclosing_namespace: &str,
        schema_map: &Map<String, Value>,
    ) -> Result<Name, NameError> {
        resolve_from_map(enclosing_namespace, schema_map, self.validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameRule;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn namespace_beats_enclosing_namespace() {
        let n = resolve("X", "org.foo", "com.enclosing", Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "org.foo.X");
        assert_eq!(n.namespace(), "org.foo");
    }

    #[test]
    fn enclosing_namespace_used_when_namespace_empty() {
        let n = resolve("X", "", "org.foo", Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "org.foo.X");
        assert_eq!(n.namespace(), "org.foo");
    }

    #[test]
    fn no_namespace_at_all() {
        let n = resolve("X", "", "", Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "X");
        assert_eq!(n.namespace(), "");
    }

    #[test]
    fn dotted_name_ignores_both_namespaces() {
        let n = resolve("org.bar.X", "some.ignored.namespace", "also.ignored", Validation::Strict)
            .unwrap();
        assert_eq!(n.full_name(), "org.bar.X");
        assert_eq!(n.namespace(), "org.bar");
    }

    #[test]
    fn dotted_name_skips_validation_of_ignored_namespace() {
        let n = resolve("org.bar.X", "&bad", "", Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "org.bar.X");
    }

    #[test]
    fn empty_name_is_rejected_in_both_modes() {
        for mode in [Validation::Strict, Validation::Relaxed] {
            let err = resolve("", "org.foo", "", mode).unwrap_err();
            assert!(matches!(
                err,
                NameError::InvalidName {
                    rule: NameRule::Empty,
                    ..
                }
            ));
            assert!(resolve("", "", "", mode).is_err());
        }
    }

    #[test]
    fn invalid_namespace_is_rejected() {
        let err = resolve("X", "org.1foo", "", Validation::Strict).unwrap_err();
        assert_eq!(
            err,
            NameError::InvalidName {
                full_name: "org.1foo.X".to_string(),
                segment: "1foo".to_string(),
                rule: NameRule::InvalidStart('1'),
            }
        );
    }

    #[test]
    fn from_map_reads_name_and_namespace() {
        let map = object(json!({"type": "record", "name": "X", "namespace": "org.foo"}));
        let n = resolve_from_map("", &map, Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "org.foo.X");
    }

    #[test]
    fn from_map_missing_namespace_falls_back_to_enclosing() {
        let map = object(json!({"name": "X"}));
        let n = resolve_from_map("org.outer", &map, Validation::Strict).unwrap();
        assert_eq!(n.full_name(), "org.outer.X");
    }

    #[test]
    fn from_map_missing_name() {
        let map = object(json!({"namespace": "org.foo"}));
        assert_eq!(
            resolve_from_map("", &map, Validation::Strict),
            Err(NameError::MissingNameField)
        );
    }

    #[test]
    fn from_map_malformed_name() {
        let map = object(json!({"name": 42}));
        assert_eq!(
            resolve_from_map("", &map, Validation::Strict),
            Err(NameError::MalformedNameField {
                found: "number".to_string()
            })
        );
        let map = object(json!({"name": ""}));
        assert_eq!(
            resolve_from_map("", &map, Validation::Strict),
            Err(NameError::MalformedNameField {
                found: "empty string".to_string()
            })
        );
    }

    #[test]
    fn from_map_malformed_namespace() {
        let map = object(json!({"name": "X", "namespace": null}));
        assert_eq!(
            resolve_from_map("", &map, Validation::Strict),
            Err(NameError::MalformedNamespaceField {
                found: "null".to_string()
            })
        );
    }

    #[test]
    fn resolver_carries_validation_mode() {
        let strict = NameResolver::strict();
        let relaxed = NameResolver::relaxed();
        assert!(strict.resolve("X", ".org.foo", "").is_err());
        assert_eq!(
            relaxed.resolve("X", ".org.foo", "").unwrap().full_name(),
            ".org.foo.X"
        );
        assert_eq!(NameResolver::default(), strict);
    }
}
