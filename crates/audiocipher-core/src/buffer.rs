//! Mono 16-bit PCM audio buffers.

use crate::CodecId;

/// Sample rate used for every synthesized and exported buffer, in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Number of samples covering `duration_ms` at `sample_rate`.
///
/// Truncates toward zero, so 125 ms at 44.1 kHz is 5512 samples.
#[inline]
pub fn samples_for_ms(sample_rate: u32, duration_ms: u32) -> usize {
    (u64::from(duration_ms) * u64::from(sample_rate) / 1000) as usize
}

/// An ordered sequence of signed 16-bit mono samples.
///
/// A buffer optionally records the [`CodecId`] that produced it. Buffers
/// built by an encoder carry their identity so a decoder can refuse audio
/// encoded under a different codec; buffers loaded from disk carry none.
///
/// Appending copies samples out of the other buffer, so two buffers never
/// share storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioBuffer {
    samples: Vec<i16>,
    sample_rate: u32,
    origin: Option<CodecId>,
}

impl Default for AudioBuffer {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

impl AudioBuffer {
    /// Create an empty buffer at the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self {
            samples: Vec::new(),
            sample_rate,
            origin: None,
        }
    }

    /// Wrap existing samples.
    pub fn from_samples(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
            origin: None,
        }
    }

    /// A zero-filled buffer lasting `duration_ms`.
    pub fn silence(sample_rate: u32, duration_ms: u32) -> Self {
        Self::from_samples(vec![0; samples_for_ms(sample_rate, duration_ms)], sample_rate)
    }

    /// Record which codec produced this buffer.
    pub fn with_origin(mut self, origin: CodecId) -> Self {
        self.origin = Some(origin);
        self
    }

    /// The codec that produced this buffer, if known.
    pub fn origin(&self) -> Option<CodecId> {
        self.origin
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Raw samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Consume the buffer and return its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Append a copy of another buffer's samples.
    ///
    /// The sample rates must agree; appending a buffer at a different rate
    /// would silently change its pitch and duration.
    pub fn append(&mut self, other: &AudioBuffer) {
        debug_assert_eq!(
            self.sample_rate, other.sample_rate,
            "appending buffers with different sample rates"
        );
        self.samples.extend_from_slice(&other.samples);
    }

    /// Concatenate buffers into a new one at `sample_rate`.
    pub fn concat<'a, I>(sample_rate: u32, parts: I) -> Self
    where
        I: IntoIterator<Item = &'a AudioBuffer>,
    {
        let mut out = Self::new(sample_rate);
        for part in parts {
            out.append(part);
        }
        out
    }

    /// Samples scaled to f32 in [-1.0, 1.0).
    pub fn to_f32(&self) -> Vec<f32> {
        self.samples.iter().map(|&s| f32::from(s) / 32768.0).collect()
    }

    /// Quantize a normalized sample to 16 bits.
    ///
    /// The input is clamped to [-1.0, 1.0] first, so out-of-range
    /// amplitude/envelope combinations clip instead of wrapping.
    #[inline]
    pub fn quantize(sample: f64) -> i16 {
        (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
    }
}
