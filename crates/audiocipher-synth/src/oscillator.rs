//! Base waveform generation.
//!
//! Sine and square follow the tone frequency. Triangle and sawtooth are
//! shaped over the length of the tone rather than per cycle, so a whole
//! tone is one ramp.

use audiocipher_core::Waveform;
use std::f64::consts::PI;

/// Stateless oscillator over a fixed-length tone.
///
/// Samples are computed from their index, so the value at any position is
/// exact and independent of how many samples were generated before it.
///
/// # Example
///
/// ```rust
/// use audiocipher_core::Waveform;
/// use audiocipher_synth::Oscillator;
///
/// let osc = Oscillator::new(44100, Waveform::Sine, 441.0, 100);
/// assert_eq!(osc.sample(0), 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    /// Sample rate in Hz
    sample_rate: f64,
    /// Waveform type
    waveform: Waveform,
    /// Frequency in Hz
    frequency: f64,
    /// Total samples in the tone
    length: usize,
}

impl Oscillator {
    /// Create an oscillator for a tone of `length` samples.
    pub fn new(sample_rate: u32, waveform: Waveform, frequency: f64, length: usize) -> Self {
        Self {
            sample_rate: f64::from(sample_rate),
            waveform,
            frequency,
            length,
        }
    }

    /// Number of samples in the tone.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the tone is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Waveform type.
    pub fn waveform(&self) -> Waveform {
        self.waveform
    }

    /// Raw waveform value at sample `index`.
    #[inline]
    pub fn sample(&self, index: usize) -> f64 {
        let n = self.length.max(1) as f64;
        let i = index as f64;
        match self.waveform {
            Waveform::Sine => self.sine(index),
            Waveform::Square => {
                // sign(0) counts as positive so the tone starts high
                if self.sine(index) >= 0.0 { 1.0 } else { -1.0 }
            }
            Waveform::Triangle => 1.0 - 2.0 * (2.0 * i / n - 1.0).abs(),
            Waveform::Sawtooth => i / n,
        }
    }

    /// Iterate over every sample of the tone.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.length).map(move |i| self.sample(i))
    }

    #[inline]
    fn sine(&self, index: usize) -> f64 {
        let t = index as f64 / self.sample_rate;
        (2.0 * PI * self.frequency * t).sin()
    }
}
