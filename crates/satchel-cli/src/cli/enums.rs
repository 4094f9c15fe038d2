use clap::ValueEnum;

/// Serialization format for command output
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON, camelCase keys as bundlers expect
    #[default]
    #[value(name = "json")]
    Json,

    /// TOML
    #[value(name = "toml")]
    Toml,
}
