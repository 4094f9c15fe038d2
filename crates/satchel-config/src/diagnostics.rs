//! Non-fatal findings about a manifest or a resolved configuration.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Diagnostic {
    /// Externals are declared but no script tag provides the globals.
    ExternalsWithoutScripts { modules: Vec<String> },

    /// The same URL is listed more than once; it will be loaded more than once.
    DuplicateAsset { url: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExternalsWithoutScripts { modules } => write!(
                f,
                "{} module(s) are externalized but no CDN scripts are injected: {}",
                modules.len(),
                modules.join(", ")
            ),
            Self::DuplicateAsset { url } => write!(f, "asset listed more than once: {url}"),
        }
    }
}
