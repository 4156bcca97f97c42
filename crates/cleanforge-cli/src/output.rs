//! Terminal output: styled status lines with quiet-mode suppression.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{OwoColorize, Style};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// The no-color.org convention: any non-empty `NO_COLOR` value disables
/// color, regardless of what the value is.
pub(crate) fn env_no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Writes user-facing status lines to stdout, honouring the quiet flag and
/// the resolved color/format settings.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self::with_no_color_env(args, config, env_no_color())
    }

    fn with_no_color_env(args: &GlobalArgs, config: &AppConfig, env_no_color: bool) -> Self {
        // Auto resolves by TTY detection; the other formats are taken as-is.
        let resolved_format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || env_no_color,
            term: Term::stdout(),
        }
    }

    /// Plain message line; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ <msg>` in green.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit("\u{2713}", Style::new().green(), msg)
    }

    /// `✗ <msg>` in red. Never suppressed; errors must reach the user even
    /// under `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.emit("\u{2717}", Style::new().red(), msg)
    }

    /// `⚠ <msg>` in yellow.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit("\u{26a0}", Style::new().yellow(), msg)
    }

    /// `ℹ <msg>` in blue.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit("\u{2139}", Style::new().blue(), msg)
    }

    /// Bold cyan section header.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    fn emit(&self, symbol: &str, style: Style, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("{symbol} {msg}")
        } else {
            format!("{} {}", symbol.style(style.bold()), msg.style(style))
        };
        self.term.write_line(&line)
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (never Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
