//! Tracing subscriber setup
//!
//! | Flag(s) | Filter level |
//! |---------|--------------|
//! | (none)  | WARN         |
//! | `-v`    | INFO         |
//! | `-vv`   | DEBUG        |
//! | `-vvv`  | TRACE        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber, writing to stderr so prompts stay on stdout
pub fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = level_for(verbose);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("create_qavajs={level},qavajs_scaffolder={level}"))
    });

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
