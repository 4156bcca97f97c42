//! Tracing subscriber wiring for the binary.
//!
//! The core and adapter crates emit spans and events but never install a
//! subscriber; that happens here, once, driven by the global flags.
//! Without flags only warnings and errors surface; `-v`, `-vv` and `-vvv`
//! step through info, debug and trace, and `--quiet` drops to errors only.
//! An explicit `RUST_LOG` takes precedence over all of them.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Install the global tracing subscriber. Call once, before any tracing
/// macro fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => {
            let level = derive_level(args);
            EnvFilter::new(format!(
                "cleanforge={level},cleanforge_core={level},cleanforge_adapters={level}",
            ))
        }
    };

    let use_ansi =
        !args.no_color && !crate::output::env_no_color() && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    // try_init rather than init: a second call in the same process should
    // surface as an error, not a panic.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}
