//! Shared helpers for command implementations.

use std::path::Path;

use satchel_config::{ConfigDiscovery, LayeredEnv, MapEnv, ProcessEnv, SatchelConfig};
use serde::Serialize;
use tracing::debug;

use crate::cli::{EnvArgs, OutputFormat};
use crate::error::{Result, ResultExt};

/// Process environment with the `--env` overrides on top.
pub(crate) fn environment(args: &EnvArgs) -> LayeredEnv<ProcessEnv> {
    let overrides: MapEnv = args.vars.iter().cloned().collect();
    if !overrides.is_empty() {
        debug!(count = args.vars.len(), "applying --env overrides");
    }
    LayeredEnv::new(ProcessEnv, overrides)
}

/// Load the project tables from `--config`, `./satchel.toml`, or the built-ins.
pub(crate) fn load_config(path: Option<&Path>) -> Result<SatchelConfig> {
    let cwd = std::env::current_dir()?;
    let discovery = ConfigDiscovery::new(&cwd);

    let config = match path {
        Some(path) => discovery.load_from(&cwd.join(path))?,
        None => discovery.load_or_default()?,
    };
    Ok(config)
}

/// Serialize command output.
pub(crate) fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(value).context("Failed to serialize output")
        }
        OutputFormat::Json => serde_json::to_string(value).context("Failed to serialize output"),
        OutputFormat::Toml => toml::to_string_pretty(value).context("Failed to serialize output"),
    }
}
