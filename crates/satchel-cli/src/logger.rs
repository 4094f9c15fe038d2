//! Logging infrastructure for the satchel CLI.
//!
//! Structured logging via `tracing`. Verbosity comes from the global flags,
//! falling back to `RUST_LOG`.
//!
//! # Example
//!
//! ```rust,no_run
//! use satchel_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("resolving");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ui;

const VERBOSE_FILTER: &str = "satchel=debug,satchel_config=debug,satchel_cli=debug";
const QUIET_FILTER: &str = "satchel=error,satchel_config=error,satchel_cli=error";
const DEFAULT_FILTER: &str = "satchel=info,satchel_config=info,satchel_cli=info";

/// Initialize the tracing subscriber.
///
/// Call once, before any logging. Level is picked in this order:
/// 1. `--verbose`: DEBUG for satchel crates
/// 2. `--quiet`: ERROR only
/// 3. `RUST_LOG`
/// 4. INFO for satchel crates
///
/// Logs go to stderr so stdout stays clean for the resolved configuration.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(filter_for(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// ANSI colors follow the same decision as the status lines: off with
/// `--no-color` or `NO_COLOR`, otherwise on when stderr is a terminal or
/// `FORCE_COLOR` is set.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && ui::should_use_color())
        .compact();

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
