//! Flags command implementation.

use satchel_config::{public_path, EnvFlags};
use serde::Serialize;

use crate::cli::FlagsArgs;
use crate::commands::utils;
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FlagsReport {
    #[serde(flatten)]
    flags: EnvFlags,
    public_path: String,
}

/// Execute the flags command.
///
/// Prints the toggles every resolution step is derived from, after applying
/// `--env` overrides.
pub fn execute(args: FlagsArgs) -> Result<()> {
    let env = utils::environment(&args.env);
    let report = FlagsReport {
        flags: EnvFlags::from_env(&env),
        public_path: public_path(&env),
    };

    println!("{}", utils::render(&report, args.format, true)?);
    Ok(())
}
