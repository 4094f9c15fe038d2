//! Project-level configuration: the CDN tables and dev server settings the
//! resolver works from.
//!
//! For file discovery, see the `discovery` module.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cdn::CdnManifest;
use crate::dev::DevServerConfig;
use crate::error::{ConfigError, Result as ConfigResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SatchelConfig {
    #[serde(default)]
    pub cdn: CdnManifest,

    #[serde(default)]
    pub dev_server: DevServerConfig,
}

impl SatchelConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// Sections that are left out keep their built-in defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use satchel_config::SatchelConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "cdn": {
    ///         "css": ["https://cdn.example/app.css"],
    ///         "scripts": [
    ///             { "url": "https://cdn.example/vue.js", "module": "vue", "global": "Vue" }
    ///         ]
    ///     }
    /// });
    ///
    /// let config = SatchelConfig::from_value(value).unwrap();
    /// assert_eq!(config.cdn.externals()["vue"], "Vue");
    /// assert_eq!(config.dev_server.port, 8066);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
