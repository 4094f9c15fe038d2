//! Environment access and flag parsing.
//!
//! The resolver never touches `std::env` directly. It reads through an
//! [`EnvSource`], so the same code path serves the process environment, the
//! CLI's `--env` overrides and in-memory maps in tests.

use std::collections::HashMap;

use serde::Serialize;

/// Names of the environment variables the resolver consumes.
pub mod vars {
    pub const NODE_ENV: &str = "NODE_ENV";
    pub const CI: &str = "CI";
    pub const ANALYZE: &str = "ANALYZE";
    pub const USE_CDN_CSS: &str = "USE_CDN_CSS";
    pub const USE_CDN_JS: &str = "USE_CDN_JS";
    pub const PUBLIC_PATH: &str = "PUBLIC_PATH";

    /// Every variable read during resolution, in the order they are documented.
    pub const ALL: [&str; 6] = [NODE_ENV, CI, ANALYZE, USE_CDN_CSS, USE_CDN_JS, PUBLIC_PATH];
}

/// Read-only key/value lookup.
pub trait EnvSource {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment. Non UTF-8 values read as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment.
///
/// # Example
///
/// ```
/// use satchel_config::{EnvFlags, MapEnv};
///
/// let env = MapEnv::new().with("NODE_ENV", "production");
/// assert!(EnvFlags::from_env(&env).is_production);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Overrides consulted before falling back to a base source.
#[derive(Debug, Clone)]
pub struct LayeredEnv<B> {
    base: B,
    overrides: MapEnv,
}

impl<B: EnvSource> LayeredEnv<B> {
    pub fn new(base: B, overrides: MapEnv) -> Self {
        Self { base, overrides }
    }
}

impl<B: EnvSource> EnvSource for LayeredEnv<B> {
    fn var(&self, key: &str) -> Option<String> {
        self.overrides.var(key).or_else(|| self.base.var(key))
    }
}

/// Parse a boolean toggle.
///
/// Unset or empty values fall back to `default`. Anything else is true only
/// when it equals `"true"` ignoring ASCII case; `"1"`, `"yes"` and garbage all
/// read as false.
///
/// ```
/// use satchel_config::parse_flag;
///
/// assert!(parse_flag(None, true));
/// assert!(parse_flag(Some(""), true));
/// assert!(parse_flag(Some("TRUE"), false));
/// assert!(!parse_flag(Some("yes"), true));
/// ```
pub fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    match raw {
        None | Some("") => default,
        Some(value) => value.eq_ignore_ascii_case("true"),
    }
}

/// The five toggles every resolution step is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvFlags {
    pub is_production: bool,
    pub is_ci: bool,
    pub enable_analyze: bool,
    pub use_cdn_css: bool,
    pub use_cdn_js: bool,
}

impl EnvFlags {
    pub fn from_env(env: &impl EnvSource) -> Self {
        let flag = |key: &str, default: bool| parse_flag(env.var(key).as_deref(), default);

        Self {
            // Exact match, unlike the other toggles.
            is_production: env.var(vars::NODE_ENV).as_deref() == Some("production"),
            is_ci: flag(vars::CI, false),
            enable_analyze: flag(vars::ANALYZE, false),
            use_cdn_css: flag(vars::USE_CDN_CSS, true),
            use_cdn_js: flag(vars::USE_CDN_JS, true),
        }
    }

    /// Whether the static-report analyzer should run.
    pub fn analyzer_enabled(&self) -> bool {
        self.enable_analyze && !self.is_ci
    }

    /// Whether imports of CDN-provided modules are left to runtime globals.
    pub fn externalize(&self) -> bool {
        self.is_production || self.use_cdn_js
    }
}

impl Default for EnvFlags {
    /// Flags for an empty environment.
    fn default() -> Self {
        Self::from_env(&MapEnv::new())
    }
}

/// `PUBLIC_PATH`, or `/` when unset or empty.
pub fn public_path(env: &impl EnvSource) -> String {
    env.var(vars::PUBLIC_PATH)
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_uses_default_for_unset_and_empty() {
        assert!(parse_flag(None, true));
        assert!(!parse_flag(None, false));
        assert!(parse_flag(Some(""), true));
        assert!(!parse_flag(Some(""), false));
    }

    #[test]
    fn parse_flag_is_case_insensitive() {
        for value in ["true", "TRUE", "True", "tRuE"] {
            assert!(parse_flag(Some(value), false), "{value}");
        }
    }

    #[test]
    fn parse_flag_rejects_other_truthy_spellings() {
        for value in ["1", "yes", "on", " true", "true ", "false"] {
            assert!(!parse_flag(Some(value), true), "{value:?}");
        }
    }

    #[test]
    fn node_env_requires_exact_production() {
        for value in ["Production", "PRODUCTION", "prod", "production ", "development", ""] {
            let env = MapEnv::new().with(vars::NODE_ENV, value);
            assert!(!EnvFlags::from_env(&env).is_production, "{value:?}");
        }

        let env = MapEnv::new().with(vars::NODE_ENV, "production");
        assert!(EnvFlags::from_env(&env).is_production);
    }

    #[test]
    fn empty_environment_defaults() {
        let flags = EnvFlags::default();
        assert_eq!(
            flags,
            EnvFlags {
                is_production: false,
                is_ci: false,
                enable_analyze: false,
                use_cdn_css: true,
                use_cdn_js: true,
            }
        );
    }

    #[test]
    fn cdn_toggles_can_be_disabled() {
        let env: MapEnv = [(vars::USE_CDN_CSS, "false"), (vars::USE_CDN_JS, "FALSE")]
            .into_iter()
            .collect();
        let flags = EnvFlags::from_env(&env);
        assert!(!flags.use_cdn_css);
        assert!(!flags.use_cdn_js);
    }

    #[test]
    fn analyzer_is_suppressed_under_ci() {
        let env = MapEnv::new().with(vars::ANALYZE, "true").with(vars::CI, "True");
        let flags = EnvFlags::from_env(&env);
        assert!(flags.enable_analyze);
        assert!(flags.is_ci);
        assert!(!flags.analyzer_enabled());
    }

    #[test]
    fn layered_env_prefers_overrides() {
        let base = MapEnv::new().with(vars::CI, "true").with(vars::ANALYZE, "true");
        let env = LayeredEnv::new(base, MapEnv::new().with(vars::CI, "false"));
        assert_eq!(env.var(vars::CI).as_deref(), Some("false"));
        assert_eq!(env.var(vars::ANALYZE).as_deref(), Some("true"));
        assert!(env.var(vars::NODE_ENV).is_none());
    }

    #[test]
    fn public_path_falls_back_to_root() {
        assert_eq!(public_path(&MapEnv::new()), "/");
        assert_eq!(public_path(&MapEnv::new().with(vars::PUBLIC_PATH, "")), "/");
        assert_eq!(
            public_path(&MapEnv::new().with(vars::PUBLIC_PATH, "/static/")),
            "/static/"
        );
    }
}
