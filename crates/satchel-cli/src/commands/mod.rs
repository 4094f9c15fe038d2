//! Command implementations for the satchel CLI.
//!
//! - [`resolve`] - Print the resolved build configuration
//! - [`flags`] - Print the environment flags
//! - [`check`] - Validate the CDN tables
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod flags;
pub mod resolve;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use flags::execute as flags_execute;
pub use resolve::execute as resolve_execute;
