//! Background palette generation.
//!
//! The request runs on its own thread so the UI keeps redrawing. The UI
//! polls the job each tick and applies the result in one step.

use anyhow::Result;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::{PaletteError, PaletteGenerator};
use crate::models::{Palette, PaletteDraft};

/// Where the job is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    /// Nothing requested yet
    Idle,
    /// Waiting for the generator
    Running,
    /// Last request produced a palette
    Succeeded,
    /// Last request failed
    Failed,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Generating..."),
            Self::Succeeded => write!(f, "✓ Ready"),
            Self::Failed => write!(f, "✗ Failed"),
        }
    }
}

/// Tracks at most one in-flight generation.
pub struct GenerationJob {
    status: JobStatus,
    receiver: Option<Receiver<Result<PaletteDraft, PaletteError>>>,
    prompt: String,
    started: Option<Instant>,
}

impl GenerationJob {
    /// Creates an idle job.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: JobStatus::Idle,
            receiver: None,
            prompt: String::new(),
            started: None,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == JobStatus::Running
    }

    /// Prompt of the current or last request.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Time since the current request started.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.started
            .filter(|_| self.is_running())
            .map(|start| start.elapsed())
    }

    /// Starts generating a palette for `prompt` in the background.
    ///
    /// Refuses to start while another request is in flight.
    pub fn start(&mut self, generator: Arc<dyn PaletteGenerator>, prompt: &str) -> Result<()> {
        if self.is_running() {
            anyhow::bail!("Generation already in progress");
        }

        let (sender, receiver) = channel();
        let owned_prompt = prompt.to_string();
        thread::Builder::new()
            .name("colorspeak-palette".to_string())
            .spawn(move || {
                let result = generator.generate(&owned_prompt);
                // The job may have been dropped; nothing to report to then
                sender.send(result).ok();
            })?;

        self.receiver = Some(receiver);
        self.status = JobStatus::Running;
        self.prompt = prompt.to_string();
        self.started = Some(Instant::now());
        tracing::debug!(prompt, "palette generation started");
        Ok(())
    }

    /// Checks for a finished request.
    ///
    /// Returns the outcome once, on the poll that observes it.
    pub fn poll(&mut self) -> Option<Result<Palette, PaletteError>> {
        let receiver = self.receiver.as_ref()?;
        let outcome = match receiver.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(PaletteError::Interrupted),
        };
        self.receiver = None;

        match outcome {
            Ok(draft) => {
                self.status = JobStatus::Succeeded;
                let palette = Palette::from_draft(draft);
                tracing::info!(name = %palette.name, id = %palette.id, "palette generated");
                Some(Ok(palette))
            }
            Err(e) => {
                self.status = JobStatus::Failed;
                tracing::warn!(error = %e, "palette generation failed");
                Some(Err(e))
            }
        }
    }

    /// Blocks until the in-flight request finishes.
    pub fn wait(&mut self) -> Option<Result<Palette, PaletteError>> {
        let receiver = self.receiver.as_ref()?;
        let outcome = receiver.recv().unwrap_or(Err(PaletteError::Interrupted));
        self.receiver = None;
        self.status = if outcome.is_ok() {
            JobStatus::Succeeded
        } else {
            JobStatus::Failed
        };
        Some(outcome.map(Palette::from_draft))
    }
}

impl Default for GenerationJob {
    fn default() -> Self {
        Self::new()
    }
}
