//! Diagnostic log setup.
//!
//! The terminal belongs to the picker, so `tracing` output goes to
//! `~/.stream-launcher/logs/debug.log`.

use crate::launcher_paths;
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "STREAM_LAUNCHER_LOG";

/// Filter used when `STREAM_LAUNCHER_LOG` is unset or invalid.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "stream_launcher=debug"
    } else {
        "info"
    }
}

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber and returns the log file path.
///
/// A subscriber that is already installed is left in place.
pub fn init_tracing(verbose: bool) -> Result<PathBuf> {
    let path = launcher_paths::debug_log_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(build_filter(verbose))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init();

    Ok(path)
}
