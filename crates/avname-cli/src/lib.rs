//! # avname-cli: Schema Name Resolution CLI
//!
//! Command-line front end over `avname-core`, for diagnosing schema
//! documents whose named types fail to resolve.
//!
//! ## Subcommands
//!
//! - `resolve`: resolve a single name against a namespace and an
//!   enclosing namespace
//! - `check`: resolve every named definition in a JSON schema document
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; resolution rules live in `avname-core`.
//! - Handlers return a process exit code: 0 on success, 1 when any name
//!   failed to resolve.

pub mod check;
pub mod config;
pub mod resolve;
