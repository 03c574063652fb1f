//! Diagnostic tracing setup
//!
//! Reads `RUST_LOG`; defaults to `warn` if unset. Output goes to stderr, or
//! to a file so the full-screen TUI is not overwritten.
//!
//! # Example
//! ```bash
//! RUST_LOG=wordle_game=debug wordle_game --log-file wordle.log
//! ```

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            registry
                .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
                .init();
        }
        None => {
            registry
                .with(fmt::layer().with_writer(io::stderr).compact())
                .init();
        }
    }

    Ok(())
}
