//! Audiocipher Synth - tone synthesis for the audiocipher codecs
//!
//! Turns a [`ToneSpec`](audiocipher_core::ToneSpec) into a 16-bit
//! [`AudioBuffer`](audiocipher_core::AudioBuffer):
//!
//! - [`Oscillator`] - per-sample base waveform (sine, triangle, square, sawtooth)
//! - [`ToneSynthesizer`] - applies modulation and envelope, then quantizes
//!
//! ```rust
//! use audiocipher_core::{ToneSpec, Waveform};
//! use audiocipher_synth::ToneSynthesizer;
//!
//! let synth = ToneSynthesizer::default();
//! let spec = ToneSpec::new(Waveform::Sine, 500.0, 100).unwrap();
//! let tone = synth.synthesize(&spec);
//! assert_eq!(tone.len(), 4410);
//! ```

pub mod oscillator;
pub mod synth;

pub use oscillator::Oscillator;
pub use synth::ToneSynthesizer;
