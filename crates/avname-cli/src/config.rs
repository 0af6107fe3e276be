//! # Configuration Loading
//!
//! Reads a [`ResolverConfig`] from a YAML file and applies command-line
//! overrides. With no file the defaults apply (strict validation).

use std::path::Path;

use anyhow::{Context, Result};

use avname_core::{ResolverConfig, Validation};

/// Load the resolver configuration.
///
/// `relaxed` forces [`Validation::Relaxed`] regardless of the file.
pub fn load_config(path: Option<&Path>, relaxed: bool) -> Result<ResolverConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            serde_yaml::from_str::<ResolverConfig>(&content)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => ResolverConfig::default(),
    };

    if relaxed {
        config.validation = Validation::Relaxed;
    }

    tracing::debug!(validation = ?config.validation, "loaded resolver configuration");
    Ok(config)
}
