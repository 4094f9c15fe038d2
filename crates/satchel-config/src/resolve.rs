//! Environment → [`BuildConfig`] resolution.
//!
//! Each concern is computed independently from [`EnvFlags`] and the project
//! tables, then assembled into one value. Nothing is mutated after assembly.

use tracing::debug;

use crate::build::{BuildConfig, PerformanceBudget};
use crate::cdn::{plan_injection, select_externals, HtmlContext};
use crate::config::SatchelConfig;
use crate::env::{public_path, EnvFlags, EnvSource};
use crate::helpers::default_assets_dir;
use crate::plugin::{AnalyzerOptions, BuildPlugin, CompressionOptions, MinifyOptions};

/// Production-only settings. All fields are empty outside production.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionOptimizations {
    pub performance: Option<PerformanceBudget>,
    pub minify: Option<BuildPlugin>,
    pub compression: Option<BuildPlugin>,
}

pub fn production_optimizations(flags: &EnvFlags) -> ProductionOptimizations {
    if !flags.is_production {
        return ProductionOptimizations::default();
    }

    ProductionOptimizations {
        performance: Some(PerformanceBudget::PRODUCTION),
        minify: Some(BuildPlugin::Minify(MinifyOptions::default())),
        compression: Some(BuildPlugin::Compression(CompressionOptions::default())),
    }
}

/// Static-report analyzer, unless analysis is off or running under CI.
pub fn analyzer_plugin(flags: &EnvFlags) -> Option<BuildPlugin> {
    if flags.enable_analyze && flags.is_ci {
        debug!("bundle analysis requested but skipped under CI");
    }

    flags
        .analyzer_enabled()
        .then(|| BuildPlugin::BundleAnalyzer(AnalyzerOptions::default()))
}

/// Resolves build configurations against a fixed set of project tables.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: SatchelConfig,
}

impl Resolver {
    pub fn new(config: SatchelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SatchelConfig {
        &self.config
    }

    /// Read the environment once and resolve.
    pub fn resolve(&self, env: &impl EnvSource) -> BuildConfig {
        let flags = EnvFlags::from_env(env);
        self.resolve_flags(&flags, public_path(env))
    }

    /// Resolve from already-parsed flags.
    pub fn resolve_flags(&self, flags: &EnvFlags, public_path: String) -> BuildConfig {
        debug!(?flags, %public_path, "resolving build configuration");

        let cdn = plan_injection(flags, &self.config.cdn);
        let externals = select_externals(flags, &self.config.cdn);
        let production = production_optimizations(flags);
        let analyzer = analyzer_plugin(flags);

        // Minify runs on module output, compression on final asset bytes.
        let plugins: Vec<BuildPlugin> = [production.minify, analyzer, production.compression]
            .into_iter()
            .flatten()
            .collect();

        debug!(
            plugins = ?plugins.iter().map(BuildPlugin::name).collect::<Vec<_>>(),
            externals = externals.as_ref().map_or(0, |e| e.len()),
            "resolved build configuration"
        );

        BuildConfig {
            public_path,
            assets_dir: default_assets_dir(),
            dev_server: self.config.dev_server.clone(),
            production_source_map: false,
            externals,
            performance: production.performance,
            plugins,
            html: HtmlContext { cdn },
        }
    }
}

/// Resolve against the built-in CDN tables.
///
/// # Example
///
/// ```
/// use satchel_config::{resolve, MapEnv, PluginKind};
///
/// let env = MapEnv::new().with("NODE_ENV", "production");
/// let config = resolve(&env);
///
/// assert!(config.performance.is_some());
/// assert_eq!(config.plugin_kinds(), vec![PluginKind::Minify, PluginKind::Compression]);
/// ```
pub fn resolve(env: &impl EnvSource) -> BuildConfig {
    Resolver::default().resolve(env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::PluginKind;
    use crate::MapEnv;

    fn flags() -> EnvFlags {
        EnvFlags::default()
    }

    #[test]
    fn no_optimizations_outside_production() {
        assert_eq!(production_optimizations(&flags()), ProductionOptimizations::default());
    }

    #[test]
    fn production_enables_budget_and_both_transforms() {
        let production = production_optimizations(&EnvFlags {
            is_production: true,
            ..flags()
        });
        assert_eq!(production.performance, Some(PerformanceBudget::PRODUCTION));
        assert_eq!(production.minify.map(|p| p.kind()), Some(PluginKind::Minify));
        assert_eq!(
            production.compression.map(|p| p.kind()),
            Some(PluginKind::Compression)
        );
    }

    #[test]
    fn analyzer_requires_flag_and_no_ci() {
        assert!(analyzer_plugin(&flags()).is_none());
        assert!(analyzer_plugin(&EnvFlags {
            enable_analyze: true,
            is_ci: true,
            ..flags()
        })
        .is_none());

        let plugin = analyzer_plugin(&EnvFlags {
            enable_analyze: true,
            ..flags()
        })
        .expect("analyzer");
        let BuildPlugin::BundleAnalyzer(options) = plugin else {
            panic!("expected analyzer");
        };
        assert!(!options.open_analyzer);
    }

    #[test]
    fn fixed_fields() {
        let config = resolve(&MapEnv::new());
        assert_eq!(config.public_path, "/");
        assert_eq!(config.assets_dir, "assets");
        assert!(!config.production_source_map);
        assert_eq!(config.dev_server.port, 8066);
    }

    #[test]
    fn analyzer_without_production_stands_alone() {
        let config = resolve(&MapEnv::new().with("ANALYZE", "true"));
        assert_eq!(config.plugin_kinds(), vec![PluginKind::BundleAnalyzer]);
        assert!(config.performance.is_none());
    }
}
