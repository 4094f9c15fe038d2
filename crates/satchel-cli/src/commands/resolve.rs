//! Resolve command implementation.

use satchel_config::{lint, validate_schema, Resolver};
use tracing::info;

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the resolve command.
///
/// Loads and validates the project tables, resolves against the environment
/// and prints the configuration to stdout. Diagnostics are printed as
/// warnings and do not fail the command.
///
/// # Errors
///
/// Returns errors for unreadable or invalid config files.
pub fn execute(args: ResolveArgs) -> Result<()> {
    let config = utils::load_config(args.config.as_deref())?;
    validate_schema(&config)?;

    for finding in lint(&config.cdn) {
        ui::warning(&finding.to_string());
    }

    let env = utils::environment(&args.env);
    let build = Resolver::new(config).resolve(&env);

    for finding in build.diagnostics() {
        ui::warning(&finding.to_string());
    }

    info!(
        plugins = build.plugins.len(),
        externals = build.externals.as_ref().map_or(0, |e| e.len()),
        "build configuration resolved"
    );

    let output = utils::render(&build, args.format, args.pretty)?;
    println!("{output}");
    Ok(())
}
