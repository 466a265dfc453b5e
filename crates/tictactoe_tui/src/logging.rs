//! Tracing setup.

use std::fs::OpenOptions;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::Settings;

/// Sends tracing output to the configured log file so it never draws over
/// the terminal UI.
///
/// The file is appended to, never truncated. `RUST_LOG` takes precedence
/// over the settings filter. Calling this twice leaves the first subscriber
/// in place.
pub fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(settings.log_file())
        .with_context(|| format!("Failed to open log file {}", settings.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
