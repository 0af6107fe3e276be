#![deny(missing_docs)]

//! # avname-core: Schema Name Resolution
//!
//! Resolves the name identity of a named schema entity (record, enum, fixed)
//! into a canonical fully-qualified [`Name`]. Two schema entities are the
//! same type if and only if their resolved full names match, so every
//! registry and cross-reference in a schema model keys on [`Name`].
//!
//! ## Precedence
//!
//! 1. A dotted `name` is already fully qualified and wins outright.
//! 2. Otherwise the explicit `namespace` is used when non-empty.
//! 3. Otherwise the enclosing namespace inherited from the containing entity.
//! 4. Otherwise the null (empty) namespace.
//!
//! ## Design Principles
//!
//! 1. **No global switches.** Strict vs. relaxed validation is a
//!    [`Validation`] value passed per call or carried by an immutable
//!    [`NameResolver`]. Concurrent schema loads never race on it.
//!
//! 2. **Closed error set.** [`NameError`] is a `thiserror` enum. Callers
//!    branch on variants, and every [`NameError::InvalidName`] carries the
//!    offending identifier and the [`NameRule`] it broke.
//!
//! 3. **Validated at construction.** A [`Name`] can only be obtained through
//!    resolution, so holding one proves its identifiers are well formed.

pub mod config;
pub mod error;
pub mod identifier;
pub mod name;
pub mod resolve;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{ResolverConfig, Validation};
pub use error::{NameError, NameRule};
pub use identifier::validate_identifier;
pub use name::Name;
pub use resolve::{resolve, resolve_from_map, NameResolver};
