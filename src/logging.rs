//! Tracing setup.
//!
//! The TUI owns the terminal, so interactive sessions log to a file in the
//! config directory. Headless commands log to stderr. `RUST_LOG` overrides
//! the level in both cases.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::branding::LOG_FILE_NAME;
use crate::config::Config;

/// Where log records go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error, for headless commands
    Stderr,
    /// Append to a file, for the TUI
    File(PathBuf),
}

impl LogTarget {
    /// The log file in the config directory.
    pub fn default_file() -> Result<Self> {
        Ok(Self::File(Config::config_dir()?.join(LOG_FILE_NAME)))
    }
}

/// Level used when `RUST_LOG` is unset.
#[must_use]
pub fn default_level(verbose: bool, target: &LogTarget) -> &'static str {
    match (verbose, target) {
        (true, _) => "debug",
        (false, LogTarget::File(_)) => "info",
        // Keep headless output clean unless asked
        (false, LogTarget::Stderr) => "warn",
    }
}

/// Installs the global subscriber.
pub fn init(verbose: bool, target: &LogTarget) -> Result<()> {
    let level = default_level(verbose, target);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into());

    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .context("Failed to install logger")?,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).context(format!(
                    "Failed to create log directory: {}",
                    parent.display()
                ))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .context(format!("Failed to open log file: {}", path.display()))?;

            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
                .context("Failed to install logger")?;
        }
    }

    Ok(())
}
