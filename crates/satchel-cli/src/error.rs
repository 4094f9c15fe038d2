//! Error handling for the satchel CLI.
//!
//! `CliError` wraps `satchel_config::ConfigError` and the serialization
//! errors of the output formats. At the `main` boundary errors are converted
//! to miette reports.

use thiserror::Error;

mod report;

pub use report::cli_error_to_miette;
pub use satchel_config::ConfigError;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading or validating the project tables failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Add a helpful hint to the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use satchel_cli::error::{CliError, Result, ResultExt};
    /// let result: Result<()> = Err(CliError::Custom("bad table".into()));
    /// let err = result.with_hint("Check satchel.toml").unwrap_err();
    /// assert!(err.to_string().ends_with("Hint: Check satchel.toml"));
    /// ```
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error with a message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_error_from_config_error() {
        let config_err = ConfigError::NotFound {
            path: PathBuf::from("satchel.toml"),
        };
        let cli_err: CliError = config_err.into();
        assert!(matches!(cli_err, CliError::Config(_)));
        assert!(cli_err.to_string().contains("satchel.toml"));
    }

    #[test]
    fn test_result_ext_with_hint() {
        let result: std::result::Result<(), ConfigError> = Err(ConfigError::NotFound {
            path: PathBuf::from("satchel.toml"),
        });

        let err = result.with_hint("Try creating the file").unwrap_err();
        assert!(err.to_string().contains("Hint: Try creating the file"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: std::result::Result<(), CliError> =
            Err(CliError::InvalidArgument("--env".to_string()));

        let err = result.context("Failed to read environment").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to read environment: "));
        assert!(msg.contains("--env"));
    }
}
