//! Pluggable config validation strategies
//!
//! [`SchemaValidator`] rejects tables that would produce broken pages;
//! [`lint`] reports suspicious but loadable ones.

use std::collections::HashSet;

use crate::cdn::CdnManifest;
use crate::config::SatchelConfig;
use crate::diagnostics::Diagnostic;
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &SatchelConfig) -> Result<()>;
}

/// Structural checks on the CDN tables and dev server settings.
///
/// # Example
///
/// ```
/// use satchel_config::{ConfigValidator, SatchelConfig, SchemaValidator};
///
/// SchemaValidator.validate(&SatchelConfig::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &SatchelConfig) -> Result<()> {
        validate_manifest(&config.cdn)?;

        if config.dev_server.port == 0 {
            return Err(ConfigError::schema(
                "dev_server.port cannot be 0",
                "Pick a fixed port such as 8066",
            ));
        }

        for (prefix, rule) in &config.dev_server.proxy {
            if !prefix.starts_with('/') {
                return Err(ConfigError::schema(
                    format!("proxy prefix '{prefix}' must start with '/'"),
                    "Use a path prefix such as '/api'",
                ));
            }
            if !is_absolute_url(&rule.target) {
                return Err(ConfigError::schema(
                    format!(
                        "proxy target for '{prefix}' is not an absolute URL: '{}'",
                        rule.target
                    ),
                    "Use a full origin such as 'http://localhost:6688'",
                ));
            }
        }

        Ok(())
    }
}

/// Check that every URL is absolute and every externalized module is well formed.
pub fn validate_manifest(manifest: &CdnManifest) -> Result<()> {
    for url in &manifest.css {
        if !is_absolute_url(url) {
            return Err(ConfigError::schema(
                format!("stylesheet URL is not absolute: '{url}'"),
                "CDN URLs must start with https:// or http://",
            ));
        }
    }

    let mut modules = HashSet::new();
    for script in &manifest.scripts {
        if !is_absolute_url(&script.url) {
            return Err(ConfigError::schema(
                format!("script URL is not absolute: '{}'", script.url),
                "CDN URLs must start with https:// or http://",
            ));
        }

        match (&script.module, &script.global) {
            (None, None) => {}
            (Some(module), Some(global)) => {
                if module.trim().is_empty() {
                    return Err(ConfigError::schema(
                        format!("empty module name for '{}'", script.url),
                        "Remove the module field or name the imported package",
                    ));
                }
                if let Err(reason) = check_global(global) {
                    return Err(ConfigError::schema(
                        format!("invalid global for module '{module}': {reason}"),
                        "Use the variable name the script assigns on window",
                    ));
                }
                if !modules.insert(module.as_str()) {
                    return Err(ConfigError::schema(
                        format!("module '{module}' is provided by more than one script"),
                        "Keep a single module/global pair per package",
                    ));
                }
            }
            _ => {
                return Err(ConfigError::schema(
                    format!("script '{}' sets only one of module/global", script.url),
                    "Set both to externalize the module, or neither",
                ));
            }
        }
    }

    Ok(())
}

/// Loadable-but-suspicious findings. URLs are never deduplicated, so a
/// repeated entry is loaded twice.
pub fn lint(manifest: &CdnManifest) -> Vec<Diagnostic> {
    let mut seen = HashSet::new();
    manifest
        .css
        .iter()
        .chain(manifest.scripts.iter().map(|script| &script.url))
        .filter(|url| !seen.insert(*url))
        .map(|url| Diagnostic::DuplicateAsset { url: url.clone() })
        .collect()
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &SatchelConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

fn is_absolute_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty() && !host.starts_with('/'))
}

/// A JavaScript identifier: letter, `_` or `$`, then letters, digits, `_` or `$`.
fn check_global(name: &str) -> std::result::Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("global name cannot be empty".to_string());
    };

    if !first.is_alphabetic() && first != '_' && first != '$' {
        return Err(format!(
            "'{name}' must start with a letter, underscore, or dollar sign"
        ));
    }
    if chars.any(|c| !c.is_alphanumeric() && c != '_' && c != '$') {
        return Err(format!(
            "'{name}' can only contain letters, numbers, underscores, or dollar signs"
        ));
    }

    Ok(())
}
