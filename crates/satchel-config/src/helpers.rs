// Helper defaults
pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_assets_dir() -> String {
    "assets".to_string()
}

pub(crate) fn default_gzip_filename() -> String {
    "[path].gz[query]".to_string()
}

pub(crate) fn default_compression_test() -> String {
    r"\.(js|css)$".to_string()
}

pub(crate) fn default_compression_threshold() -> u64 {
    10_000
}

pub(crate) fn default_min_ratio() -> f64 {
    0.8
}

pub(crate) fn default_report_filename() -> String {
    "report.html".to_string()
}

pub(crate) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    8066
}
