use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::OutputFormat;
use crate::cli::validation::parse_env_pair;

/// Available satchel subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved build configuration
    ///
    /// Writes the configuration to stdout for the bundler to consume.
    /// Diagnostics go to stderr.
    Resolve(ResolveArgs),

    /// Print the environment flags
    Flags(FlagsArgs),

    /// Validate the CDN tables and report diagnostics
    ///
    /// Fails when the tables would produce broken pages. With --strict,
    /// warnings fail the check too.
    Check(CheckArgs),
}

/// Environment overrides shared by every command
#[derive(Args, Debug, Default)]
pub struct EnvArgs {
    /// Override an environment variable for this run
    ///
    /// Examples:
    ///   satchel resolve --env NODE_ENV=production --env USE_CDN_JS=false
    #[arg(short = 'e', long = "env", value_name = "KEY=VALUE", value_parser = parse_env_pair)]
    pub vars: Vec<(String, String)>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Config file with CDN tables (defaults to ./satchel.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the flags command
#[derive(Args, Debug)]
pub struct FlagsArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Config file with CDN tables (defaults to ./satchel.toml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}
