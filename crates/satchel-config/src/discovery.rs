//! File-based config discovery for CLI use
//!
//! Handles finding and loading satchel configuration files from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Json, Serialized, Toml};
use figment::Figment;
use serde_json::Value;
use tracing::debug;

use crate::config::SatchelConfig;
use crate::error::{ConfigError, Result};

pub const CONFIG_FILE: &str = "satchel.toml";

/// Key holding satchel's settings inside a JSON file such as `package.json`.
pub const PACKAGE_SECTION: &str = "satchel";

/// Prefix for environment overrides, e.g. `SATCHEL_DEV_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "SATCHEL_";

/// File-based configuration discovery
///
/// Layers, lowest priority first: built-in defaults, the config file,
/// `SATCHEL_*` environment variables. Tables merge key by key; arrays such as
/// `cdn.scripts` are replaced wholesale, never concatenated.
///
/// # Example
///
/// ```no_run
/// use satchel_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load_or_default().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    /// Create a new config discovery with a root directory
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. TOML config: satchel.toml
    /// 2. package.json (satchel field)
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join(CONFIG_FILE);
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        let content = fs::read_to_string(&pkg_path).ok()?;
        let parsed: Value = serde_json::from_str(&content).ok()?;
        match parsed.get(PACKAGE_SECTION) {
            Some(section) if !section.is_null() => Some(pkg_path),
            _ => None,
        }
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<SatchelConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            path: self.root.join(CONFIG_FILE),
        })?;
        self.load_from(&path)
    }

    /// Load the discovered file, or the built-in tables when there is none.
    pub fn load_or_default(&self) -> Result<SatchelConfig> {
        match self.find() {
            Some(path) => self.load_from(&path),
            None => {
                debug!(root = %self.root.display(), "no config file, using built-in CDN tables");
                extract(base_figment(), "defaults")
            }
        }
    }

    /// Load config from a specific file path
    ///
    /// A `.json` file is read from its `"satchel"` object, the way
    /// `package.json` is. Anything else is parsed as TOML.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a JSON file has no
    /// `"satchel"` object, or when the file does not match the expected shape.
    pub fn load_from(&self, path: &Path) -> Result<SatchelConfig> {
        if !path.is_file() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "loading config");
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let file = if is_json {
            check_json_section(path)?;
            Figment::from(Json::file(path)).focus(PACKAGE_SECTION)
        } else {
            Figment::from(Toml::file(path))
        };

        let figment = Figment::from(Serialized::defaults(SatchelConfig::default()))
            .merge(file)
            .merge(env_overrides());
        extract(figment, &path.display().to_string())
    }
}

/// The `"satchel"` value of a JSON file must be an object.
fn check_json_section(path: &Path) -> Result<()> {
    let invalid = |hint: String| ConfigError::InvalidValue {
        field: format!("{}: \"{PACKAGE_SECTION}\"", path.display()),
        hint: Some(hint),
    };

    let content = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    match parsed.get(PACKAGE_SECTION) {
        Some(Value::Object(_)) => Ok(()),
        Some(other) => Err(invalid(format!(
            "expected an object, found {}",
            json_kind(other)
        ))),
        None => Err(invalid("expected an object, found nothing".to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(SatchelConfig::default())).merge(env_overrides())
}

fn env_overrides() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

fn extract(figment: Figment, source: &str) -> Result<SatchelConfig> {
    figment
        .extract()
        .map_err(|e| ConfigError::InvalidValue {
            field: source.to_string(),
            hint: Some(e.to_string()),
        })
}

/// Discover and load config from current directory (convenience function)
///
/// Falls back to the built-in tables when no file exists.
pub fn discover() -> Result<SatchelConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}
