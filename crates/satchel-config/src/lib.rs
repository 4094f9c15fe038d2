//! Environment-driven build configuration for CDN-backed front-end builds.
//!
//! [`resolve`] reads `NODE_ENV`, `CI`, `ANALYZE`, `USE_CDN_CSS`, `USE_CDN_JS`
//! and `PUBLIC_PATH` once and produces a [`BuildConfig`]: which modules are
//! externalized, which CDN tags the HTML entry point renders, and which
//! production transforms the bundler runs.

pub mod build;
pub mod cdn;
pub mod config;
pub mod dev;
pub mod diagnostics;
pub mod discovery;
pub mod env;
pub mod error;
pub mod plugin;
pub mod resolve;
pub mod validation;

mod helpers;

// Re-export main types
pub use build::*;
pub use cdn::*;
pub use config::*;
pub use dev::*;
pub use diagnostics::*;
pub use env::{
    parse_flag, public_path, vars, EnvFlags, EnvSource, LayeredEnv, MapEnv, ProcessEnv,
};
pub use error::*;
pub use plugin::*;
pub use resolve::{
    analyzer_plugin, production_optimizations, resolve, ProductionOptimizations, Resolver,
};

// Re-export discovery and validation
pub use discovery::{discover, ConfigDiscovery, CONFIG_FILE, ENV_PREFIX, PACKAGE_SECTION};
pub use validation::{lint, validate_manifest, validate_schema, ConfigValidator, SchemaValidator};
