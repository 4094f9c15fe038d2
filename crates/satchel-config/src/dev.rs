//! Development server configuration types.
//!
//! Passed through to the orchestrator as-is; nothing here runs a server.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::helpers::{default_host, default_port, default_true};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Open a browser once the server is up
    #[serde(default)]
    pub open: bool,

    #[serde(default = "default_true")]
    pub disable_host_check: bool,

    /// Path prefix → upstream rule
    ///
    /// Rules loaded from a config file come back sorted by prefix, not in
    /// file order: figment stores tables in a sorted map. Prefixes should
    /// therefore not rely on declaration order to disambiguate overlaps.
    #[serde(default)]
    pub proxy: IndexMap<String, ProxyRule>,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        let mut proxy = IndexMap::new();
        proxy.insert(
            "/api".to_string(),
            ProxyRule {
                target: "http://localhost:6688".to_string(),
                change_origin: true,
            },
        );

        Self {
            host: default_host(),
            port: default_port(),
            open: false,
            disable_host_check: true,
            proxy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyRule {
    pub target: String,

    /// Rewrite the `Host` header to the target's origin
    #[serde(default)]
    pub change_origin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_forward_api_to_local_backend() {
        let dev = DevServerConfig::default();
        assert_eq!(dev.host, "0.0.0.0");
        assert_eq!(dev.port, 8066);
        assert!(!dev.open);
        assert!(dev.disable_host_check);

        let rule = &dev.proxy["/api"];
        assert_eq!(rule.target, "http://localhost:6688");
        assert!(rule.change_origin);
    }

    #[test]
    fn serializes_camel_case() {
        let value = serde_json::to_value(DevServerConfig::default()).unwrap();
        assert_eq!(value["disableHostCheck"], json!(true));
        assert_eq!(value["proxy"]["/api"]["changeOrigin"], json!(true));
    }
}
