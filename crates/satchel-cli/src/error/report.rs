//! Miette diagnostic conversion for CLI errors.

use miette::Report;
use satchel_config::ConfigError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::SchemaValidation { message, hint }) => match hint {
            Some(hint) => miette::miette!(help = hint, "Invalid CDN tables: {}", message),
            None => miette::miette!("Invalid CDN tables: {}", message),
        },
        CliError::Config(ConfigError::NotFound { path }) => miette::miette!(
            help = "Create satchel.toml or drop --config to use the built-in tables",
            "Config file not found: {}",
            path.display()
        ),
        CliError::Config(e) => miette::miette!("Configuration error: {}", e),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miette::Diagnostic as _;
    use std::path::PathBuf;

    #[test]
    fn schema_errors_keep_their_hint() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::SchemaValidation {
            message: "script URL is not absolute: 'vue.js'".to_string(),
            hint: Some("CDN URLs must start with https:// or http://".to_string()),
        }));
        assert!(report.to_string().contains("vue.js"));
        let help = report.help().map(|h| h.to_string());
        assert_eq!(
            help.as_deref(),
            Some("CDN URLs must start with https:// or http://")
        );
    }

    #[test]
    fn not_found_names_the_path() {
        let report = cli_error_to_miette(CliError::Config(ConfigError::NotFound {
            path: PathBuf::from("custom.toml"),
        }));
        assert!(report.to_string().contains("custom.toml"));
    }
}
