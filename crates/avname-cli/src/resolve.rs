//! # Resolve Subcommand
//!
//! Resolves one name and prints its full name, namespace, and short name.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use avname_core::{Name, NameResolver};

/// Arguments for the `avname resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Local or dotted name.
    pub name: String,

    /// Namespace declared alongside the name.
    #[arg(long, default_value = "")]
    pub namespace: String,

    /// Namespace inherited from the enclosing schema entity.
    #[arg(long, default_value = "")]
    pub enclosing: String,

    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct ResolvedName<'a> {
    full_name: &'a Name,
    namespace: &'a str,
    short_name: &'a str,
}

/// Execute the resolve subcommand.
///
/// Returns exit code: 0 if the name resolved, 1 if it was invalid.
pub fn run_resolve(args: &ResolveArgs, resolver: NameResolver) -> Result<u8> {
    let name = match resolver.resolve(&args.name, &args.namespace, &args.enclosing) {
        Ok(name) => name,
        Err(e) => {
            println!("FAIL: {e}");
            return Ok(1);
        }
    };

    if args.json {
        let out = ResolvedName {
            full_name: &name,
            namespace: name.namespace(),
            short_name: name.short_name(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("full name: {name}");
        println!("namespace: {}", name.namespace());
        println!("short name: {}", name.short_name());
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str, namespace: &str, enclosing: &str) -> ResolveArgs {
        ResolveArgs {
            name: name.to_string(),
            namespace: namespace.to_string(),
            enclosing: enclosing.to_string(),
            json: true,
        }
    }

    #[test]
    fn valid_name_exits_zero() {
        let code = run_resolve(&args("X", "", "org.foo"), NameResolver::strict()).unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn invalid_name_exits_one() {
        let code = run_resolve(&args("&X", "org.foo", ""), NameResolver::strict()).unwrap();
        assert_eq!(code, 1);
    }

    #[test]
    fn leading_dot_namespace_needs_relaxed_resolver() {
        let a = args("X", ".org.foo", "");
        assert_eq!(run_resolve(&a, NameResolver::strict()).unwrap(), 1);
        assert_eq!(run_resolve(&a, NameResolver::relaxed()).unwrap(), 0);
    }
}
