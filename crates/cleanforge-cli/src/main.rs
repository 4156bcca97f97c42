//! # Cleanforge CLI
//!
//! Clean-architecture scaffolding for TypeScript web services: project
//! bootstrap plus per-artifact generators (entities, services,
//! controllers, adapters, database wiring).
//!
//! Startup runs in a fixed order: parse arguments, install the tracing
//! subscriber, load configuration, build the [`OutputManager`], dispatch,
//! and finally translate any [`CliError`] into a message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is optional; a missing file is not an error.
    let _ = dotenvy::dotenv();

    // try_parse reports --help / --version as errors too; those render to
    // stdout and exit 0, real parse failures go to stderr and exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
        Err(e) => {
            print!("{}", e.render().ansi());
            return ExitCode::SUCCESS;
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // A config file named with --config must load; the default file is
    // allowed to be absent.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            return ExitCode::from(4);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    // Captured before `cli` moves into run().
    let verbose = cli.global.verbose > 0;

    match run(cli, config, output) {
        Ok(()) => {
            info!("Cleanforge completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::New(cmd) => commands::new::execute(cmd, cli.global, config, output),
        Commands::Entity(cmd) => commands::entity::execute(cmd, output),
        Commands::Interface(cmd) => commands::interface::execute(cmd, output),
        Commands::InterfaceResource(cmd) => commands::interface::execute_resource(cmd, output),
        Commands::Service(cmd) => commands::service::execute(cmd, output),
        Commands::ServiceResource(cmd) => commands::service::execute_resource(cmd, output),
        Commands::Controller(cmd) => commands::controller::execute(cmd, output),
        Commands::Adapter(cmd) => commands::adapter::execute(cmd, output),
        Commands::AdapterOrm(cmd) => commands::adapter::execute_orm(cmd, cli.global, config, output),
        Commands::Database(cmd) => commands::database::execute(cmd, cli.global, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
    }
}

/// The single point where a structured [`CliError`] becomes stderr output
/// and an OS exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr so the message survives stdout redirection; color only when
    // stderr is a TTY, matching the logging layer.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
