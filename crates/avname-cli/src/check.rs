//! # Check Subcommand
//!
//! Resolves every named definition (`record`, `error`, `enum`, `fixed`) in a
//! JSON schema document. The namespace of each resolved definition becomes
//! the enclosing namespace for definitions nested inside it, through record
//! field types, array `items`, map `values`, and union branches.
//!
//! Names are only resolved here. Duplicate detection and reference lookup
//! belong to whatever builds the type graph.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use serde_json::{Map, Value};

use avname_core::{Name, NameResolver};

/// Arguments for the `avname check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// JSON schema document to check.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// A named definition that resolved.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedEntry {
    /// JSON Pointer to the definition within the document.
    pub path: String,
    /// The resolved name.
    pub name: Name,
}

/// A named definition whose name failed to resolve.
#[derive(Debug, Clone, Serialize)]
pub struct FailedEntry {
    /// JSON Pointer to the definition within the document.
    pub path: String,
    /// Human-readable failure.
    pub error: String,
}

/// Outcome of checking one schema document.
#[derive(Debug, Default, Serialize)]
pub struct CheckReport {
    /// Definitions that resolved, in document order.
    pub resolved: Vec<ResolvedEntry>,
    /// Definitions that failed, in document order.
    pub failures: Vec<FailedEntry>,
}

impl CheckReport {
    /// Whether every named definition resolved.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve every named definition in `schema`.
pub fn check_schema(schema: &Value, resolver: NameResolver) -> CheckReport {
    let mut report = CheckReport::default();
    walk(schema, "", "", resolver, &mut report);
    report
}

fn walk(value: &Value, enclosing: &str, path: &str, resolver: NameResolver, report: &mut CheckReport) {
    match value {
        Value::Array(branches) => {
            for (i, branch) in branches.iter().enumerate() {
                walk(branch, enclosing, &format!("{path}/{i}"), resolver, report);
            }
        }
        Value::Object(map) => walk_object(map, enclosing, path, resolver, report),
        // Primitive type names and references to named types.
        _ => {}
    }
}

fn walk_object(
    map: &Map<String, Value>,
    enclosing: &str,
    path: &str,
    resolver: NameResolver,
    report: &mut CheckReport,
) {
    let Some(kind) = map.get("type") else {
        return;
    };

    let kind = match kind {
        Value::String(kind) => kind.as_str(),
        nested => {
            walk(nested, enclosing, &format!("{path}/type"), resolver, report);
            return;
        }
    };

    match kind {
        "record" | "error" => {
            let namespace = resolve_entry(map, enclosing, path, resolver, report);
            let inner = namespace.as_deref().unwrap_or(enclosing);
            if let Some(Value::Array(fields)) = map.get("fields") {
                for (i, field) in fields.iter().enumerate() {
                    if let Some(field_type) = field.get("type") {
                        walk(field_type, inner, &format!("{path}/fields/{i}/type"), resolver, report);
                    }
                }
            }
        }
        "enum" | "fixed" => {
            resolve_entry(map, enclosing, path, resolver, report);
        }
        "array" => {
            if let Some(items) = map.get("items") {
                walk(items, enclosing, &format!("{path}/items"), resolver, report);
            }
        }
        "map" => {
            if let Some(values) = map.get("values") {
                walk(values, enclosing, &format!("{path}/values"), resolver, report);
            }
        }
        _ => {}
    }
}

/// Resolve one named definition, returning its namespace for nested
/// definitions when it succeeded.
fn resolve_entry(
    map: &Map<String, Value>,
    enclosing: &str,
    path: &str,
    resolver: NameResolver,
    report: &mut CheckReport,
) -> Option<String> {
    let pointer = if path.is_empty() { "/" } else { path };
    match resolver.resolve_from_map(enclosing, map) {
        Ok(name) => {
            tracing::debug!(path = pointer, full_name = %name, "resolved named definition");
            let namespace = name.namespace().to_string();
            report.resolved.push(ResolvedEntry {
                path: pointer.to_string(),
                name,
            });
            Some(namespace)
        }
        Err(e) => {
            tracing::warn!(path = pointer, error = %e, "named definition failed to resolve");
            report.failures.push(FailedEntry {
                path: pointer.to_string(),
                error: e.to_string(),
            });
            None
        }
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if every named definition resolved, 1 otherwise.
pub fn run_check(args: &CheckArgs, resolver: NameResolver) -> Result<u8> {
    let schema = load_schema(&args.path)?;
    let report = check_schema(&schema, resolver);

    tracing::info!(
        resolved = report.resolved.len(),
        failed = report.failures.len(),
        path = %args.path.display(),
        "checked schema document"
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for entry in &report.resolved {
            println!("  OK: {} {}", entry.path, entry.name);
        }
        for failure in &report.failures {
            println!("  FAIL: {}: {}", failure.path, failure.error);
        }
        println!(
            "Names: {}/{} resolved",
            report.resolved.len(),
            report.resolved.len() + report.failures.len()
        );
    }

    Ok(if report.is_ok() { 0 } else { 1 })
}

fn load_schema(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schema {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse schema {} as JSON", path.display()))
}
