//! Tone descriptors: waveform shape, modulation and envelope.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Base waveform shapes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Waveform {
    /// Pure fundamental tone.
    #[default]
    Sine,
    /// Linear ramp folded to a unit peak at the centre of the tone.
    Triangle,
    /// Sign of the sine at the tone frequency.
    Square,
    /// Linear ramp from 0 to 1 over the whole tone.
    Sawtooth,
}

impl Waveform {
    /// All shapes in declaration order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Square,
        Waveform::Sawtooth,
    ];

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(Waveform::Sine),
            "triangle" => Ok(Waveform::Triangle),
            "square" => Ok(Waveform::Square),
            "sawtooth" | "saw" => Ok(Waveform::Sawtooth),
            _ => Err(Error::UnsupportedWaveform(s.to_string())),
        }
    }
}

/// Amplitude modulation applied as `1 + depth * sin(2π f t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Modulation {
    /// Modulator frequency in Hz.
    pub frequency: f64,
    /// Modulation depth (may exceed 1.0).
    pub depth: f64,
}

impl Default for Modulation {
    fn default() -> Self {
        Self {
            frequency: 5.0,
            depth: 7.0,
        }
    }
}

/// Four-breakpoint envelope.
///
/// The level at relative position `p` in `[0, 1)` is
/// `e = attack + (decay - attack) * p`, reshaped as
/// `e * sustain + release * (1 - e)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Envelope {
    /// Starting level of the linear blend.
    pub attack: f64,
    /// Ending level of the linear blend.
    pub decay: f64,
    /// Weight applied to the blended level.
    pub sustain: f64,
    /// Weight applied to the complement of the blended level.
    pub release: f64,
}

impl Envelope {
    /// Unity gain across the whole tone.
    pub const FLAT: Envelope = Envelope {
        attack: 1.0,
        decay: 1.0,
        sustain: 1.0,
        release: 0.0,
    };

    /// Create an envelope from its four breakpoints.
    pub fn new(attack: f64, decay: f64, sustain: f64, release: f64) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Envelope level at relative position `position` (0.0 = start, 1.0 = end).
    #[inline]
    pub fn level(&self, position: f64) -> f64 {
        let blend = self.attack + (self.decay - self.attack) * position;
        blend * self.sustain + self.release * (1.0 - blend)
    }

    fn breakpoints(&self) -> [f64; 4] {
        [self.attack, self.decay, self.sustain, self.release]
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self::new(0.25, 0.3, 0.4, 0.25)
    }
}

/// Immutable description of one tone.
///
/// # Example
///
/// ```rust
/// use audiocipher_core::{ToneSpec, Waveform, Modulation};
///
/// let spec = ToneSpec::new(Waveform::Sine, 500.0, 100)
///     .unwrap()
///     .with_amplitude(0.4)
///     .unwrap()
///     .with_modulation(Modulation::default());
/// assert_eq!(spec.duration_ms(), 100);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    waveform: Waveform,
    frequency: f64,
    duration_ms: u32,
    amplitude: f64,
    modulation: Option<Modulation>,
    envelope: Envelope,
}

impl ToneSpec {
    /// Create a tone at full amplitude with the default envelope.
    pub fn new(waveform: Waveform, frequency: f64, duration_ms: u32) -> Result<Self> {
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(Error::InvalidTone(format!(
                "frequency must be positive, got {frequency}"
            )));
        }
        if duration_ms == 0 {
            return Err(Error::InvalidTone("duration must be at least 1 ms".to_string()));
        }
        Ok(Self {
            waveform,
            frequency,
            duration_ms,
            amplitude: 1.0,
            modulation: None,
            envelope: Envelope::default(),
        })
    }

    /// Set the amplitude, which must lie in [0, 1].
    pub fn with_amplitude(mut self, amplitude: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&amplitude) {
            return Err(Error::InvalidTone(format!(
                "amplitude must be within [0, 1], got {amplitude}"
            )));
        }
        self.amplitude = amplitude;
        Ok(self)
    }

    /// Attach amplitude modulation.
    pub fn with_modulation(mut self, modulation: Modulation) -> Self {
        self.modulation = Some(modulation);
        self
    }

    /// Replace the envelope. Breakpoints must lie in [0, 1].
    pub fn with_envelope(mut self, envelope: Envelope) -> Result<Self> {
        if envelope
            .breakpoints()
            .iter()
            .any(|b| !(0.0..=1.0).contains(b))
        {
            return Err(Error::InvalidTone(format!(
                "envelope breakpoints must be within [0, 1], got {envelope:?}"
            )));
        }
        self.envelope = envelope;
        Ok(self)
    }

    /// Waveform shape.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Peak amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Amplitude modulation, if any.
    pub fn modulation(&self) -> Option<Modulation> {
        self.modulation
    }

    /// Envelope breakpoints.
    pub fn envelope(&self) -> Envelope {
        self.envelope
    }
}
