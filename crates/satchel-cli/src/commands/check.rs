//! Check command implementation.
//!
//! Validates the CDN tables without printing a configuration.

use satchel_config::{lint, validate_schema, Diagnostic, EnvFlags, Resolver};

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load the config file (or built-in tables) and validate its schema
/// 2. Lint the CDN tables for repeated assets
/// 3. Resolve against the current environment and report coherence findings
///
/// # Errors
///
/// Returns errors for invalid tables, or for any warning with `--strict`.
pub fn execute(args: CheckArgs) -> Result<()> {
    ui::info("Checking configuration...");

    let config = utils::load_config(args.config.as_deref())?;
    if let Err(err) = validate_schema(&config) {
        ui::error(&err.to_string());
        return Err(err.into());
    }
    ui::success(&format!(
        "{} stylesheet(s), {} script(s), {} external module(s)",
        config.cdn.css.len(),
        config.cdn.scripts.len(),
        config.cdn.externals().len()
    ));

    let env = utils::environment(&args.env);
    let flags = EnvFlags::from_env(&env);
    ui::info(&format!(
        "production={} ci={} analyze={} cdn_css={} cdn_js={}",
        flags.is_production, flags.is_ci, flags.enable_analyze, flags.use_cdn_css, flags.use_cdn_js
    ));

    let mut findings: Vec<Diagnostic> = lint(&config.cdn);
    findings.extend(Resolver::new(config).resolve(&env).diagnostics());

    for finding in &findings {
        ui::warning(&finding.to_string());
    }

    if args.strict && !findings.is_empty() {
        return Err(CliError::Custom(format!(
            "{} warning(s) reported with --strict",
            findings.len()
        )));
    }

    ui::success("All checks passed!");
    Ok(())
}
