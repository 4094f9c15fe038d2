//! Command-line interface definition for satchel.
//!
//! # Command Structure
//!
//! - `satchel resolve` - Print the resolved build configuration
//! - `satchel flags` - Print the environment flags resolution starts from
//! - `satchel check` - Validate the CDN tables and report diagnostics

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, EnvArgs, FlagsArgs, ResolveArgs};
pub use enums::*;
pub use validation::parse_env_pair;

/// satchel - environment-driven build configuration for CDN-backed front-ends
#[derive(Parser, Debug)]
#[command(
    name = "satchel",
    version,
    about = "Resolve CDN-aware front-end build configuration from the environment",
    long_about = "satchel reads NODE_ENV, CI, ANALYZE, USE_CDN_CSS, USE_CDN_JS and PUBLIC_PATH\n\
                  and prints the build configuration a bundler should use: externalized\n\
                  modules, CDN tags for the HTML entry point and production transforms."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
