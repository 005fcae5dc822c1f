//! Tone playback.
//!
//! Tones are rendered in-process and played through the default output
//! device with `rodio`. The device is opened once, on a dedicated thread
//! that owns the output stream for the life of the notifier.

use anyhow::{Context, Result};
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, Sink};
use std::sync::mpsc::{channel, sync_channel, Sender};
use std::thread;

use super::tone::{ToneSpec, FAILURE_TONE, MATCH_TONE, SAMPLE_RATE};
use super::Notifier;
use crate::config::AudioConfig;
use crate::game::GameEvent;

/// Which sound an event calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Pair did not match
    Failure,
    /// Pair matched
    Match,
}

impl Cue {
    /// Tone rendered for this cue.
    #[must_use]
    pub const fn tone(self) -> &'static ToneSpec {
        match self {
            Self::Failure => &FAILURE_TONE,
            Self::Match => &MATCH_TONE,
        }
    }
}

/// Handle to the thread holding the open output device.
///
/// Dropping the last handle ends the thread and closes the device.
#[derive(Debug, Clone)]
pub struct TonePlayer {
    cues: Sender<Cue>,
}

impl TonePlayer {
    /// Opens the default output device.
    ///
    /// Fails when the machine has no usable audio output.
    pub fn open() -> Result<Self> {
        let (cues, queue) = channel::<Cue>();
        let (ready_tx, ready_rx) = sync_channel::<Result<(), String>>(1);

        thread::Builder::new()
            .name("colorspeak-audio".to_string())
            .spawn(move || {
                // The stream must stay on this thread; it stops playing when dropped
                let (_stream, handle) = match OutputStream::try_default() {
                    Ok(output) => {
                        ready_tx.send(Ok(())).ok();
                        output
                    }
                    Err(e) => {
                        ready_tx.send(Err(e.to_string())).ok();
                        return;
                    }
                };

                for cue in queue {
                    match Sink::try_new(&handle) {
                        Ok(sink) => {
                            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, cue.tone().render()));
                            sink.detach();
                        }
                        Err(e) => tracing::warn!(error = %e, ?cue, "tone playback failed"),
                    }
                }
            })
            .context("Failed to spawn audio thread")?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(Self { cues }),
            Ok(Err(e)) => anyhow::bail!("No audio output device: {e}"),
            Err(_) => anyhow::bail!("Audio thread exited before opening a device"),
        }
    }

    /// Queues `cue` for playback without waiting for it.
    pub fn play(&self, cue: Cue) -> Result<()> {
        self.cues
            .send(cue)
            .map_err(|_| anyhow::anyhow!("Audio thread is no longer running"))
    }
}

/// Plays the failure tone (and optionally the match tone).
#[derive(Debug, Clone)]
pub struct AudioNotifier {
    output: Option<TonePlayer>,
    failure_tone: bool,
    match_tone: bool,
}

impl AudioNotifier {
    /// Opens the default output device.
    ///
    /// Without one the notifier still attaches, and each cue it would have
    /// played is reported as a notifier error.
    #[must_use]
    pub fn detect(config: &AudioConfig) -> Self {
        let output = match TonePlayer::open() {
            Ok(player) => {
                tracing::debug!("audio output opened");
                Some(player)
            }
            Err(e) => {
                tracing::info!(error = %e, "no audio output, tones will fail");
                None
            }
        };
        Self::with_output(output, config)
    }

    /// Uses an already opened player, or none.
    #[must_use]
    pub fn with_output(output: Option<TonePlayer>, config: &AudioConfig) -> Self {
        Self {
            output,
            failure_tone: config.failure_tone,
            match_tone: config.match_tone,
        }
    }

    /// Sound to play for `event`, if any.
    #[must_use]
    pub fn cue_for(&self, event: &GameEvent) -> Option<Cue> {
        match event {
            GameEvent::Mismatched { .. } if self.failure_tone => Some(Cue::Failure),
            GameEvent::Matched { .. } if self.match_tone => Some(Cue::Match),
            _ => None,
        }
    }
}

impl Notifier for AudioNotifier {
    fn name(&self) -> &'static str {
        "audio"
    }

    fn notify(&self, event: &GameEvent) -> Result<()> {
        let Some(cue) = self.cue_for(event) else {
            return Ok(());
        };
        match &self.output {
            Some(player) => player.play(cue),
            None => anyhow::bail!("No audio output device for the {cue:?} tone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATALOG;
    use crate::notify::NotifierSet;

    fn config(failure_tone: bool, match_tone: bool) -> AudioConfig {
        AudioConfig {
            speech: false,
            failure_tone,
            match_tone,
        }
    }

    fn mismatch() -> GameEvent {
        GameEvent::Mismatched {
            first: CATALOG[0],
            second: CATALOG[1],
        }
    }

    #[test]
    fn test_failure_tone_on_mismatch() {
        let audio = AudioNotifier::with_output(None, &config(true, false));
        assert_eq!(audio.cue_for(&mismatch()), Some(Cue::Failure));
        assert_eq!(
            audio.cue_for(&GameEvent::Matched { color: CATALOG[0] }),
            None
        );
    }

    #[test]
    fn test_match_tone_is_opt_in() {
        let audio = AudioNotifier::with_output(None, &config(false, true));
        assert_eq!(
            audio.cue_for(&GameEvent::Matched { color: CATALOG[2] }),
            Some(Cue::Match)
        );
        assert_eq!(audio.cue_for(&GameEvent::Hidden), None);
        assert_eq!(Cue::Match.tone(), &MATCH_TONE);
    }

    #[test]
    fn test_silent_events_do_nothing() {
        let audio = AudioNotifier::with_output(None, &config(true, true));
        assert!(audio.notify(&GameEvent::Celebrate).is_ok());
        assert!(audio.notify(&GameEvent::Hidden).is_ok());
    }

    #[test]
    fn test_missing_device_is_a_contained_error() {
        let audio = AudioNotifier::with_output(None, &config(true, false));
        let err = audio.notify(&mismatch()).unwrap_err();
        assert!(err.to_string().contains("No audio output device"));

        // The set swallows it
        let mut set = NotifierSet::new();
        set.push(Box::new(audio));
        set.notify(&mismatch());
    }

    #[test]
    fn test_player_reports_stopped_thread() {
        let (cues, queue) = channel();
        drop(queue);
        let player = TonePlayer { cues };
        assert!(player.play(Cue::Failure).is_err());
    }
}
