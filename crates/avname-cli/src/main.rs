//! # avname CLI entry point
//!
//! Parses command-line arguments, loads the resolver configuration, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use avname_cli::check::{run_check, CheckArgs};
use avname_cli::config::load_config;
use avname_cli::resolve::{run_resolve, ResolveArgs};

/// Schema name resolution toolchain.
///
/// Resolves fully-qualified names of records, enums, and fixed types and
/// reports identifiers that violate naming rules.
#[derive(Parser, Debug)]
#[command(name = "avname", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Allow namespaces with a leading dot. Overrides the configuration file.
    #[arg(long, global = true)]
    relaxed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve a single name against a namespace and enclosing namespace.
    Resolve(ResolveArgs),

    /// Resolve every named definition in a JSON schema document.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = load_config(cli.config.as_deref(), cli.relaxed).and_then(|config| {
        let resolver = config.resolver();
        match cli.command {
            Commands::Resolve(args) => run_resolve(&args, resolver),
            Commands::Check(args) => run_check(&args, resolver),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
