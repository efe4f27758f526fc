use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// Flags command handlers read; `--quiet` and `--verbose` are consumed by
/// tracing setup in `main`.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
}
