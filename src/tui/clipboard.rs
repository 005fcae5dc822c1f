//! Copying palette hex codes to the system clipboard.
//!
//! A successful copy is acknowledged on the copied swatch for two seconds.

use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// How long the "Copied!" acknowledgment stays visible.
pub const COPY_ACK_DURATION: Duration = Duration::from_secs(2);

/// Destination for copied text.
pub trait TextSink {
    /// Replaces the clipboard contents with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The OS clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl TextSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_string()))
            .context("Failed to copy to clipboard")
    }
}

/// Copies hex codes and remembers the last one for acknowledgment.
pub struct HexClipboard {
    sink: Box<dyn TextSink>,
    last_copy: Option<(String, Instant)>,
}

impl HexClipboard {
    /// Clipboard backed by the OS.
    #[must_use]
    pub fn system() -> Self {
        Self::with_sink(Box::new(SystemClipboard))
    }

    /// Clipboard writing to `sink`.
    #[must_use]
    pub fn with_sink(sink: Box<dyn TextSink>) -> Self {
        Self {
            sink,
            last_copy: None,
        }
    }

    /// Copies `hex` and starts its acknowledgment window at `now`.
    ///
    /// A failed copy leaves any earlier acknowledgment untouched.
    pub fn copy(&mut self, hex: &str, now: Instant) -> Result<()> {
        self.sink.set_text(hex)?;
        self.last_copy = Some((hex.to_string(), now));
        tracing::debug!(hex, "copied to clipboard");
        Ok(())
    }

    /// Whether `hex` was copied less than two seconds before `now`.
    #[must_use]
    pub fn is_acknowledged(&self, hex: &str, now: Instant) -> bool {
        self.acknowledged(now) == Some(hex)
    }

    /// Hex code whose acknowledgment is showing at `now`.
    #[must_use]
    pub fn acknowledged(&self, now: Instant) -> Option<&str> {
        self.last_copy
            .as_ref()
            .filter(|(_, at)| now.saturating_duration_since(*at) < COPY_ACK_DURATION)
            .map(|(hex, _)| hex.as_str())
    }
}
