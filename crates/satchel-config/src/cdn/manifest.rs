use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A script loaded from a CDN.
///
/// When `module` and `global` are both set, the script provides that module
/// at runtime as a global and imports of it are externalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdnScript {
    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global: Option<String>,
}

impl CdnScript {
    /// A script that does not provide an importable module (locales, plugins).
    pub fn asset(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            module: None,
            global: None,
        }
    }

    /// A script that attaches `module` to the host as `global`.
    pub fn module(
        url: impl Into<String>,
        module: impl Into<String>,
        global: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            module: Some(module.into()),
            global: Some(global.into()),
        }
    }

    /// The `(module, global)` pair, if this script provides one.
    pub fn provides(&self) -> Option<(&str, &str)> {
        match (&self.module, &self.global) {
            (Some(module), Some(global)) => Some((module.as_str(), global.as_str())),
            _ => None,
        }
    }
}

/// Ordered CDN stylesheets and scripts.
///
/// Order is load order. A locale must follow the library it extends and a
/// chart adapter must follow its chart engine, so nothing here sorts or
/// deduplicates. A list left out of a config file keeps its built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnManifest {
    pub css: Vec<String>,
    pub scripts: Vec<CdnScript>,
}

impl CdnManifest {
    pub fn css_urls(&self) -> Vec<String> {
        self.css.clone()
    }

    pub fn script_urls(&self) -> Vec<String> {
        self.scripts.iter().map(|script| script.url.clone()).collect()
    }

    /// Module identifier → global name, projected from the script list.
    ///
    /// Every key is backed by a script in [`Self::scripts`], so externalizing
    /// this map can never reference a global no tag provides.
    pub fn externals(&self) -> IndexMap<String, String> {
        self.scripts
            .iter()
            .filter_map(CdnScript::provides)
            .map(|(module, global)| (module.to_string(), global.to_string()))
            .collect()
    }
}

impl Default for CdnManifest {
    fn default() -> Self {
        const JSDELIVR: &str = "https://cdn.jsdelivr.net";

        Self {
            css: vec![
                format!("{JSDELIVR}/npm/github-markdown-css@4.0.0/github-markdown.min.css"),
                format!("{JSDELIVR}/npm/katex@0.12.0/dist/katex.min.css"),
                format!("{JSDELIVR}/npm/muse-ui@3.0.2/dist/muse-ui.min.css"),
                format!("{JSDELIVR}/npm/element-ui@2.15.14/lib/theme-chalk/index.css"),
            ],
            scripts: vec![
                CdnScript::module(
                    format!("{JSDELIVR}/npm/vue@2.6.11/dist/vue.min.js"),
                    "vue",
                    "Vue",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/vue-router@3.2.0/dist/vue-router.min.js"),
                    "vue-router",
                    "VueRouter",
                ),
                CdnScript::module(
                    "https://unpkg.com/axios@1.6.7/dist/axios.min.js",
                    "axios",
                    "axios",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/element-ui@2.15.14/lib/index.min.js"),
                    "element-ui",
                    "ELEMENT",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/gh/highlightjs/cdn-release@10.3.2/build/highlight.min.js"),
                    "highlight.js",
                    "hljs",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/moment@2.29.1/min/moment.min.js"),
                    "moment",
                    "moment",
                ),
                CdnScript::asset(format!("{JSDELIVR}/npm/moment@2.29.1/locale/zh-cn.js")),
                CdnScript::asset(format!("{JSDELIVR}/npm/moment@2.29.1/locale/en-gb.js")),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/echarts@4.9.0/dist/echarts.js"),
                    "echarts",
                    "echarts",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/vue-echarts@5.0.0-beta.0/dist/vue-echarts.js"),
                    "vue-echarts",
                    "VueECharts",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/vuex@3.5.1/dist/vuex.min.js"),
                    "vuex",
                    "Vuex",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/katex@0.12.0/dist/katex.min.js"),
                    "katex",
                    "katex",
                ),
                CdnScript::asset(format!(
                    "{JSDELIVR}/npm/katex@0.12.0/dist/contrib/auto-render.min.js"
                )),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/muse-ui@3.0.2/dist/muse-ui.min.js"),
                    "muse-ui",
                    "MuseUI",
                ),
                CdnScript::module(
                    format!("{JSDELIVR}/npm/jquery@3.5.1/dist/jquery.min.js"),
                    "jquery",
                    "$",
                ),
            ],
        }
    }
}
