//! Spoken announcements through the platform's text-to-speech command.
//!
//! Speech runs on a dedicated worker thread that owns the queue and the
//! currently speaking process. A colour announcement cuts off whatever is
//! being said; the victory line waits its turn.

// Rate and pitch scaling maps float multipliers onto integer CLI ranges
#![allow(clippy::cast_possible_truncation)]

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use super::Notifier;
use crate::game::GameEvent;

/// Line spoken when the game is won.
pub const WIN_ANNOUNCEMENT: &str = "You Won! Great Job, Super Star!";

/// How often the worker checks on a running utterance.
const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Words per minute at rate 1.0 for engines that take wpm.
const BASE_WPM: f32 = 175.0;

/// How an utterance relates to speech already in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Stop current speech and drop anything queued
    Interrupt,
    /// Speak after everything already queued
    Queue,
}

/// A line of speech with its voice settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// Speed multiplier, 1.0 is normal
    pub rate: f32,
    /// Pitch multiplier, 1.0 is normal
    pub pitch: f32,
    /// Interrupt or queue
    pub delivery: Delivery,
}

impl Utterance {
    /// The announcement for a freshly matched colour.
    #[must_use]
    pub fn color_name(name: &str) -> Self {
        Self {
            text: format!("It's {name} color"),
            rate: 1.0,
            pitch: 1.0,
            delivery: Delivery::Interrupt,
        }
    }

    /// The victory line.
    #[must_use]
    pub fn victory() -> Self {
        Self {
            text: WIN_ANNOUNCEMENT.to_string(),
            rate: 0.9,
            pitch: 1.1,
            delivery: Delivery::Queue,
        }
    }

    /// What to say for `event`, if anything.
    #[must_use]
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Matched { color } => Some(Self::color_name(color.name)),
            GameEvent::Won { .. } => Some(Self::victory()),
            _ => None,
        }
    }
}

/// Pending utterances in speaking order.
#[derive(Debug, Default)]
pub struct SpeechQueue {
    pending: VecDeque<Utterance>,
}

impl SpeechQueue {
    /// Adds an utterance.
    ///
    /// Returns true when the caller must stop the utterance currently being
    /// spoken.
    pub fn submit(&mut self, utterance: Utterance) -> bool {
        let interrupt = utterance.delivery == Delivery::Interrupt;
        if interrupt {
            self.pending.clear();
        }
        self.pending.push_back(utterance);
        interrupt
    }

    /// Takes the next utterance to speak.
    pub fn next(&mut self) -> Option<Utterance> {
        self.pending.pop_front()
    }

    /// Number of waiting utterances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// A text-to-speech command found on this machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechEngine {
    /// macOS `say`
    Say(PathBuf),
    /// `espeak-ng`
    EspeakNg(PathBuf),
    /// `espeak`
    Espeak(PathBuf),
    /// speech-dispatcher's `spd-say`
    SpdSay(PathBuf),
}

impl SpeechEngine {
    /// Finds the first available engine, in order of preference.
    #[cfg(feature = "speech")]
    #[must_use]
    pub fn detect() -> Option<Self> {
        let candidates: [(&str, fn(PathBuf) -> Self); 4] = [
            ("say", Self::Say),
            ("espeak-ng", Self::EspeakNg),
            ("espeak", Self::Espeak),
            ("spd-say", Self::SpdSay),
        ];
        candidates
            .into_iter()
            .find_map(|(program, make)| super::find_program(program).map(make))
    }

    /// Speech support was compiled out.
    #[cfg(not(feature = "speech"))]
    #[must_use]
    pub fn detect() -> Option<Self> {
        None
    }

    /// Program name, for logging.
    #[must_use]
    pub const fn program(&self) -> &'static str {
        match self {
            Self::Say(_) => "say",
            Self::EspeakNg(_) => "espeak-ng",
            Self::Espeak(_) => "espeak",
            Self::SpdSay(_) => "spd-say",
        }
    }

    fn path(&self) -> &PathBuf {
        match self {
            Self::Say(path) | Self::EspeakNg(path) | Self::Espeak(path) | Self::SpdSay(path) => {
                path
            }
        }
    }

    /// Command-line arguments that speak `utterance` in an English voice.
    #[must_use]
    pub fn args(&self, utterance: &Utterance) -> Vec<String> {
        let wpm = (BASE_WPM * utterance.rate).round() as i32;
        match self {
            Self::Say(_) => vec![
                "-r".to_string(),
                wpm.to_string(),
                utterance.text.clone(),
            ],
            Self::EspeakNg(_) | Self::Espeak(_) => {
                // espeak pitch runs 0..=99 with 50 as the default
                let pitch = (50.0 * utterance.pitch).round().clamp(0.0, 99.0) as i32;
                vec![
                    "-v".to_string(),
                    "en-us".to_string(),
                    "-s".to_string(),
                    wpm.to_string(),
                    "-p".to_string(),
                    pitch.to_string(),
                    utterance.text.clone(),
                ]
            }
            Self::SpdSay(_) => {
                // spd-say takes offsets in -100..=100 around the default
                let rate = offset_percent(utterance.rate);
                let pitch = offset_percent(utterance.pitch);
                vec![
                    "-w".to_string(),
                    "-l".to_string(),
                    "en".to_string(),
                    "-r".to_string(),
                    rate.to_string(),
                    "-p".to_string(),
                    pitch.to_string(),
                    utterance.text.clone(),
                ]
            }
        }
    }

    fn spawn(&self, utterance: &Utterance) -> Result<Child> {
        Command::new(self.path())
            .args(self.args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start {}", self.program()))
    }
}

fn offset_percent(multiplier: f32) -> i32 {
    ((multiplier - 1.0) * 100.0).round().clamp(-100.0, 100.0) as i32
}

/// Speaks colour names and the victory line.
pub struct SpeechNotifier {
    sender: Sender<Utterance>,
}

impl SpeechNotifier {
    /// Starts the speech worker for `engine`.
    #[must_use]
    pub fn spawn(engine: SpeechEngine) -> Self {
        let (sender, receiver) = channel();
        let spawned = thread::Builder::new()
            .name("colorspeak-speech".to_string())
            .spawn(move || run_worker(&engine, &receiver));
        if let Err(e) = spawned {
            // The sender's sends will fail and be reported per event
            tracing::warn!(error = %e, "failed to start speech worker");
        }
        Self { sender }
    }
}

impl Notifier for SpeechNotifier {
    fn name(&self) -> &'static str {
        "speech"
    }

    fn notify(&self, event: &GameEvent) -> Result<()> {
        if let Some(utterance) = Utterance::for_event(event) {
            self.sender
                .send(utterance)
                .context("Speech worker is not running")?;
        }
        Ok(())
    }
}

fn run_worker(engine: &SpeechEngine, receiver: &Receiver<Utterance>) {
    let mut queue = SpeechQueue::default();
    let mut current: Option<Child> = None;

    loop {
        let received = if current.is_some() || !queue.is_empty() {
            receiver.recv_timeout(POLL_INTERVAL)
        } else {
            receiver
                .recv()
                .map_err(|_| RecvTimeoutError::Disconnected)
        };

        match received {
            Ok(utterance) => {
                if queue.submit(utterance) {
                    stop(&mut current);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                stop(&mut current);
                return;
            }
        }

        if let Some(child) = current.as_mut() {
            match child.try_wait() {
                Ok(None) => {}
                Ok(Some(_)) | Err(_) => current = None,
            }
        }

        if current.is_none() {
            if let Some(next) = queue.next() {
                match engine.spawn(&next) {
                    Ok(child) => current = Some(child),
                    Err(e) => tracing::warn!(error = %e, text = %next.text, "speech failed"),
                }
            }
        }
    }
}

fn stop(current: &mut Option<Child>) {
    if let Some(mut child) = current.take() {
        child.kill().ok();
        child.wait().ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CATALOG;

    #[test]
    fn test_event_utterances() {
        let matched = Utterance::for_event(&GameEvent::Matched { color: CATALOG[1] }).unwrap();
        assert_eq!(matched.text, "It's Blue color");
        assert_eq!(matched.delivery, Delivery::Interrupt);

        let won = Utterance::for_event(&GameEvent::Won { score: 300, moves: 4 }).unwrap();
        assert_eq!(won.text, WIN_ANNOUNCEMENT);
        assert_eq!(won.delivery, Delivery::Queue);

        assert!(Utterance::for_event(&GameEvent::Hidden).is_none());
        assert!(Utterance::for_event(&GameEvent::Celebrate).is_none());
    }

    #[test]
    fn test_interrupt_clears_queue() {
        let mut queue = SpeechQueue::default();
        assert!(!queue.submit(Utterance::victory()));
        assert!(queue.submit(Utterance::color_name("Red")));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next().unwrap().text, "It's Red color");
    }

    #[test]
    fn test_victory_waits_behind_announcement() {
        let mut queue = SpeechQueue::default();
        queue.submit(Utterance::color_name("Lime"));
        let stop_current = queue.submit(Utterance::victory());

        assert!(!stop_current);
        assert_eq!(queue.next().unwrap().text, "It's Lime color");
        assert_eq!(queue.next().unwrap().text, WIN_ANNOUNCEMENT);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_engine_args() {
        let espeak = SpeechEngine::Espeak(PathBuf::from("/usr/bin/espeak"));
        let args = espeak.args(&Utterance::victory());
        assert_eq!(
            args,
            vec!["-v", "en-us", "-s", "158", "-p", "55", WIN_ANNOUNCEMENT]
        );

        let say = SpeechEngine::Say(PathBuf::from("/usr/bin/say"));
        assert_eq!(
            say.args(&Utterance::color_name("Pink")),
            vec!["-r", "175", "It's Pink color"]
        );

        let spd = SpeechEngine::SpdSay(PathBuf::from("/usr/bin/spd-say"));
        let args = spd.args(&Utterance::victory());
        assert_eq!(&args[3..7], &["-r", "-10", "-p", "10"]);
    }

    #[test]
    fn test_notify_after_worker_exit_is_error() {
        let (sender, receiver) = channel();
        drop(receiver);
        let notifier = SpeechNotifier { sender };
        assert!(notifier
            .notify(&GameEvent::Matched { color: CATALOG[0] })
            .is_err());
        // Events without speech never touch the channel
        assert!(notifier.notify(&GameEvent::Hidden).is_ok());
    }
}
