//! Audible feedback for game events.
//!
//! Notifiers observe [`GameEvent`]s after the session has applied them. They
//! are best effort: a notifier that fails (no audio device, no speech engine)
//! is logged and otherwise ignored, so game state never depends on them.

pub mod audio;
pub mod speech;
pub mod tone;

use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::AudioConfig;
use crate::game::GameEvent;

pub use audio::AudioNotifier;
pub use speech::{SpeechEngine, SpeechNotifier};

/// Observer of game events.
pub trait Notifier {
    /// Short name used in log messages.
    fn name(&self) -> &'static str;

    /// Reacts to an event that has already been applied to the game.
    fn notify(&self, event: &GameEvent) -> Result<()>;
}

/// Fans events out to every attached notifier.
#[derive(Default)]
pub struct NotifierSet {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a notifier.
    pub fn push(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of attached notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Whether no notifier is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Delivers `event` to every notifier.
    ///
    /// Errors and panics are logged and swallowed.
    pub fn notify(&self, event: &GameEvent) {
        for notifier in &self.notifiers {
            let result = panic::catch_unwind(AssertUnwindSafe(|| notifier.notify(event)));
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    tracing::warn!(notifier = notifier.name(), error = %e, "notifier failed");
                }
                Err(_) => {
                    tracing::warn!(notifier = notifier.name(), "notifier panicked");
                }
            }
        }
    }
}

/// Builds the notifiers enabled in `config`.
///
/// Speech is left out when no engine is installed. The audio notifier is
/// attached even without an output device and reports each missed tone.
#[must_use]
pub fn from_config(config: &AudioConfig) -> Vec<Box<dyn Notifier>> {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

    if config.failure_tone || config.match_tone {
        notifiers.push(Box::new(AudioNotifier::detect(config)));
    }

    if config.speech {
        match SpeechEngine::detect() {
            Some(engine) => {
                tracing::info!(engine = engine.program(), "speech enabled");
                notifiers.push(Box::new(SpeechNotifier::spawn(engine)));
            }
            None => tracing::info!("no speech engine found, speech disabled"),
        }
    }

    notifiers
}

/// Finds `program` on `PATH`.
pub(crate) fn find_program(program: &str) -> Option<PathBuf> {
    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file() || path.with_extension("exe").is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATALOG;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recording(Rc<RefCell<Vec<GameEvent>>>);

    impl Notifier for Recording {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn notify(&self, event: &GameEvent) -> Result<()> {
            self.0.borrow_mut().push(event.clone());
            Ok(())
        }
    }

    struct Failing;

    impl Notifier for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn notify(&self, _event: &GameEvent) -> Result<()> {
            anyhow::bail!("no audio device")
        }
    }

    struct Panicking;

    impl Notifier for Panicking {
        fn name(&self) -> &'static str {
            "panicking"
        }

        fn notify(&self, _event: &GameEvent) -> Result<()> {
            panic!("backend exploded")
        }
    }

    #[test]
    fn test_failures_do_not_stop_delivery() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut set = NotifierSet::new();
        set.push(Box::new(Failing));
        set.push(Box::new(Panicking));
        set.push(Box::new(Recording(Rc::clone(&seen))));

        let event = GameEvent::Matched { color: CATALOG[0] };
        set.notify(&event);

        assert_eq!(set.len(), 3);
        assert_eq!(seen.borrow().as_slice(), &[event]);
    }

    #[test]
    fn test_disabled_config_builds_nothing() {
        let config = AudioConfig {
            speech: false,
            failure_tone: false,
            match_tone: false,
        };
        assert!(from_config(&config).is_empty());
    }

    #[test]
    fn test_find_program_missing() {
        assert!(find_program("definitely-not-a-real-program-xyz").is_none());
    }
}
