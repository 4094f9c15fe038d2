//! Descriptors for the transforms handed to the bundler.
//!
//! These only describe configuration. The minifier, compressor and analyzer
//! are implemented by the orchestrator that consumes the descriptors.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::helpers::{
    default_compression_test, default_compression_threshold, default_gzip_filename,
    default_min_ratio, default_report_filename,
};

/// One transform in the build's plugin chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "kebab-case")]
pub enum BuildPlugin {
    Minify(MinifyOptions),
    BundleAnalyzer(AnalyzerOptions),
    Compression(CompressionOptions),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    Minify,
    BundleAnalyzer,
    Compression,
}

impl BuildPlugin {
    pub fn kind(&self) -> PluginKind {
        match self {
            Self::Minify(_) => PluginKind::Minify,
            Self::BundleAnalyzer(_) => PluginKind::BundleAnalyzer,
            Self::Compression(_) => PluginKind::Compression,
        }
    }

    pub fn name(&self) -> &'static str {
        match self.kind() {
            PluginKind::Minify => "minify",
            PluginKind::BundleAnalyzer => "bundle-analyzer",
            PluginKind::Compression => "compression",
        }
    }
}

/// Comment-stripping minifier settings.
///
/// Console calls and `debugger` statements survive minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinifyOptions {
    /// Keep comments in the output
    #[serde(default)]
    pub comments: bool,

    /// Emit minifier warnings
    #[serde(default)]
    pub warnings: bool,

    #[serde(default)]
    pub drop_console: bool,

    #[serde(default)]
    pub drop_debugger: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionAlgorithm {
    #[default]
    Gzip,
}

impl CompressionAlgorithm {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Gzip => "gz",
        }
    }
}

/// Post-build pre-compression of large script and stylesheet assets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompressionOptions {
    /// Output name template; `[path]` is the asset path, `[query]` its query string
    #[serde(default = "default_gzip_filename")]
    pub filename: String,

    #[serde(default)]
    pub algorithm: CompressionAlgorithm,

    /// Regex matched against the asset path (query excluded)
    #[serde(default = "default_compression_test")]
    pub test: String,

    /// Assets must be strictly larger than this many bytes
    #[serde(default = "default_compression_threshold")]
    pub threshold: u64,

    /// Keep the compressed copy only when `compressed / original` is below this
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,

    #[serde(default)]
    pub delete_original_assets: bool,
}

impl Default for CompressionOptions {
    fn default() -> Self {
        Self {
            filename: default_gzip_filename(),
            algorithm: CompressionAlgorithm::Gzip,
            test: default_compression_test(),
            threshold: default_compression_threshold(),
            min_ratio: default_min_ratio(),
            delete_original_assets: false,
        }
    }
}

impl CompressionOptions {
    /// Compile the asset test pattern.
    pub fn test_pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&self.test)
    }

    /// Compile the selection rules once, for checking many assets.
    ///
    /// ```
    /// use satchel_config::CompressionOptions;
    ///
    /// let matcher = CompressionOptions::default().matcher().unwrap();
    /// assert!(matcher.matches("js/app.js?v=3", 20_000));
    /// assert!(!matcher.matches("img/logo.png", 20_000));
    /// ```
    pub fn matcher(&self) -> Result<AssetMatcher, regex::Error> {
        Ok(AssetMatcher {
            pattern: self.test_pattern()?,
            threshold: self.threshold,
        })
    }

    /// Name of the compressed sibling for `asset`.
    ///
    /// ```
    /// use satchel_config::CompressionOptions;
    ///
    /// let gzip = CompressionOptions::default();
    /// assert_eq!(gzip.output_name("js/app.js?v=3"), "js/app.js.gz?v=3");
    /// ```
    pub fn output_name(&self, asset: &str) -> String {
        let (path, query) = split_query(asset);
        self.filename
            .replace("[path]", path)
            .replace("[query]", query)
            .replace("[ext]", self.algorithm.extension())
    }

    /// Whether the compressed output saved enough to be worth keeping.
    pub fn should_keep(&self, original: u64, compressed: u64) -> bool {
        if original == 0 {
            return false;
        }
        (compressed as f64 / original as f64) < self.min_ratio
    }
}

/// Compiled form of [`CompressionOptions::test`] and its size threshold.
#[derive(Debug, Clone)]
pub struct AssetMatcher {
    pattern: Regex,
    threshold: u64,
}

impl AssetMatcher {
    /// Whether an asset of `size` bytes at `asset` gets a compressed sibling.
    pub fn matches(&self, asset: &str, size: u64) -> bool {
        if size <= self.threshold {
            return false;
        }
        let (path, _) = split_query(asset);
        self.pattern.is_match(path)
    }
}

fn split_query(asset: &str) -> (&str, &str) {
    match asset.find('?') {
        Some(idx) => asset.split_at(idx),
        None => (asset, ""),
    }
}

/// What the analyzer writes to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerMode {
    /// Single HTML report
    #[default]
    Static,
    /// Raw stats as JSON
    Json,
}

/// Bundle-size report written next to the build output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzerOptions {
    #[serde(default)]
    pub analyzer_mode: AnalyzerMode,

    /// Never opens a viewer; the report is only written
    #[serde(default)]
    pub open_analyzer: bool,

    #[serde(default = "default_report_filename")]
    pub report_filename: String,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            analyzer_mode: AnalyzerMode::Static,
            open_analyzer: false,
            report_filename: default_report_filename(),
        }
    }
}
