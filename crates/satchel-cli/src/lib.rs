//! satchel CLI - prints the build configuration an orchestrator should use.
//!
//! The resolution itself lives in `satchel-config`; this crate adds argument
//! parsing, config file loading, output formatting and diagnostics.
//!
//! - [`cli`] - clap definitions
//! - `commands` - `resolve`, `flags` and `check`
//! - [`error`] - CLI error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
