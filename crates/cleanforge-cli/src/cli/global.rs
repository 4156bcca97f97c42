//! Arguments shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true` on each field, so
//! `cleanforge entity -n user -q` and `cleanforge -q entity -n user` both
//! parse.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Raise the log level. Repeatable.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Raise the log level. The default shows warnings and \
errors only; -v adds progress info, -vv adds debug detail, -vvv enables \
trace output. Overridden entirely by RUST_LOG when set."
    )]
    pub verbose: u8,

    /// Print nothing except errors.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Strip ANSI escapes from all output. The `NO_COLOR` environment
    /// variable (<https://no-color.org>) has the same effect; it is read
    /// directly by the output and logging layers, not parsed as an
    /// argument, so any non-empty value counts.
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// Read configuration from this file instead of the default location.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering mode for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Styled text with symbols and color.
    Human,
    /// Unstyled text, suitable for piping.
    Plain,
    /// Structured JSON where a command supports it.
    Json,
}
