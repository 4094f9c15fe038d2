//! The resolved build description handed to the bundler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cdn::{CdnInjection, HtmlContext};
use crate::dev::DevServerConfig;
use crate::diagnostics::Diagnostic;
use crate::helpers::default_assets_dir;
use crate::plugin::{BuildPlugin, PluginKind};

/// Output of a single resolution.
///
/// Built once per build invocation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub public_path: String,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    pub dev_server: DevServerConfig,

    #[serde(default)]
    pub production_source_map: bool,

    /// Module identifier → runtime global. Absent means bundle everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub externals: Option<IndexMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceBudget>,

    /// Transforms in execution order
    #[serde(default)]
    pub plugins: Vec<BuildPlugin>,

    /// Context for the HTML entry point template
    #[serde(default)]
    pub html: HtmlContext,
}

impl BuildConfig {
    pub fn cdn(&self) -> &CdnInjection {
        &self.html.cdn
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(BuildPlugin::kind).collect()
    }

    pub fn has_plugin(&self, kind: PluginKind) -> bool {
        self.plugins.iter().any(|plugin| plugin.kind() == kind)
    }

    /// Coherence findings for this configuration.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut findings = Vec::new();

        if let Some(externals) = &self.externals {
            if !externals.is_empty() && self.html.cdn.js.is_empty() {
                findings.push(Diagnostic::ExternalsWithoutScripts {
                    modules: externals.keys().cloned().collect(),
                });
            }
        }

        findings
    }
}

/// Advisory size ceilings; exceeding them warns, never fails the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBudget {
    pub max_entrypoint_size: u64,
    pub max_asset_size: u64,
    #[serde(default)]
    pub hints: PerformanceHints,
}

impl PerformanceBudget {
    pub const PRODUCTION: Self = Self {
        max_entrypoint_size: 10_000_000,
        max_asset_size: 30_000_000,
        hints: PerformanceHints::Warning,
    };

    pub fn exceeded_by_asset(&self, size: u64) -> bool {
        size > self.max_asset_size
    }

    pub fn exceeded_by_entrypoint(&self, size: u64) -> bool {
        size > self.max_entrypoint_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceHints {
    #[default]
    Warning,
}
