use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cdn::CdnManifest;
use crate::env::EnvFlags;

/// Tags the HTML template renders, in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnInjection {
    pub css: Vec<String>,
    pub js: Vec<String>,
}

impl CdnInjection {
    pub fn is_empty(&self) -> bool {
        self.css.is_empty() && self.js.is_empty()
    }
}

/// Template context handed to the HTML-generation step.
///
/// The injection sits under the fixed `cdn` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlContext {
    pub cdn: CdnInjection,
}

/// Pick the stylesheet and script lists the template should render.
pub fn plan_injection(flags: &EnvFlags, manifest: &CdnManifest) -> CdnInjection {
    let injection = CdnInjection {
        css: if flags.use_cdn_css {
            manifest.css_urls()
        } else {
            Vec::new()
        },
        js: if flags.use_cdn_js {
            manifest.script_urls()
        } else {
            Vec::new()
        },
    };

    debug!(
        css = injection.css.len(),
        js = injection.js.len(),
        "planned CDN injection"
    );
    injection
}

/// Externals for the bundler, or `None` to bundle every library.
///
/// Externalizes when building for production or when CDN scripts are
/// injected. A production build with `USE_CDN_JS=false` still externalizes,
/// leaving the deployment to supply the globals; that case is logged.
pub fn select_externals(
    flags: &EnvFlags,
    manifest: &CdnManifest,
) -> Option<IndexMap<String, String>> {
    if !flags.externalize() {
        debug!("bundling all libraries, no externals");
        return None;
    }

    let externals = manifest.externals();
    if !flags.use_cdn_js && !externals.is_empty() {
        warn!(
            modules = externals.len(),
            "externals declared without CDN script tags; the page must provide the globals"
        );
    }
    Some(externals)
}
