//! Short synthesized feedback tones.
//!
//! Tones are described declaratively (waveform, frequency ramp, gain ramp)
//! and rendered to mono 16-bit samples, which the audio notifier plays on the
//! default output device.

// Sample math converts between float and integer domains on purpose
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

use std::f32::consts::TAU;

/// Output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 22_050;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Pure sine
    Sine,
    /// Rising sawtooth
    Sawtooth,
}

impl Waveform {
    /// Oscillator value (-1.0..=1.0) at a phase measured in cycles.
    #[must_use]
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Self::Sine => (TAU * phase).sin(),
            Self::Sawtooth => 2.0 * (phase - (phase + 0.5).floor()),
        }
    }
}

/// Interpolation between a ramp's endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Straight line
    Linear,
    /// Constant ratio per unit time; both endpoints must be positive
    Exponential,
}

/// A value moving from `from` to `to` over `seconds`, then holding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ramp {
    /// Start value
    pub from: f32,
    /// End value
    pub to: f32,
    /// Ramp length in seconds
    pub seconds: f32,
    /// Interpolation curve
    pub curve: Curve,
}

impl Ramp {
    /// Value at `t` seconds after the tone starts.
    #[must_use]
    pub fn value_at(&self, t: f32) -> f32 {
        if self.seconds <= 0.0 || t >= self.seconds {
            return self.to;
        }
        let progress = (t / self.seconds).max(0.0);
        match self.curve {
            Curve::Linear => self.from + (self.to - self.from) * progress,
            Curve::Exponential => self.from * (self.to / self.from).powf(progress),
        }
    }
}

/// Everything needed to render a tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneSpec {
    /// Oscillator shape
    pub waveform: Waveform,
    /// Frequency in Hz over time
    pub frequency: Ramp,
    /// Linear gain over time
    pub gain: Ramp,
    /// Total length in seconds
    pub duration: f32,
}

/// Descending buzz played when a pair does not match.
pub const FAILURE_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sawtooth,
    frequency: Ramp {
        from: 150.0,
        to: 50.0,
        seconds: 0.3,
        curve: Curve::Exponential,
    },
    gain: Ramp {
        from: 0.1,
        to: 0.01,
        seconds: 0.3,
        curve: Curve::Exponential,
    },
    duration: 0.3,
};

/// Rising chirp that can accompany a match.
pub const MATCH_TONE: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    frequency: Ramp {
        from: 400.0,
        to: 800.0,
        seconds: 0.1,
        curve: Curve::Exponential,
    },
    gain: Ramp {
        from: 0.1,
        to: 0.0,
        seconds: 0.2,
        curve: Curve::Linear,
    },
    duration: 0.2,
};

impl ToneSpec {
    /// Number of samples the rendered tone contains.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        (self.duration * SAMPLE_RATE as f32).round() as usize
    }

    /// Renders the tone to signed 16-bit samples.
    #[must_use]
    pub fn render(&self) -> Vec<i16> {
        let count = self.sample_count();
        let step = 1.0 / SAMPLE_RATE as f32;
        let mut phase = 0.0_f32;
        let mut samples = Vec::with_capacity(count);

        for n in 0..count {
            let t = n as f32 * step;
            let value = self.waveform.sample(phase) * self.gain.value_at(t);
            samples.push((value.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16);

            phase += self.frequency.value_at(t) * step;
            phase -= phase.floor();
        }

        samples
    }
}
