//! CDN asset tables and the HTML injection plan derived from them.

mod injection;
mod manifest;

pub use injection::{plan_injection, select_externals, CdnInjection, HtmlContext};
pub use manifest::{CdnManifest, CdnScript};
