//! qapairs CLI library.
//!
//! Argument parsing, command execution, logging setup and output formatting
//! for the `qapairs` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use error::{CliError, Result};
pub use output::Formatter;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Line printed to stderr when a run fails.
pub fn error_line(err: &CliError) -> String {
    format!("Error: {}", err)
}

/// Install the global log subscriber.
///
/// Logs go to stderr so stdout carries only the confirmation line. The level
/// comes from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
