//! Audiocipher Analysis - signal analysis used by the decoders
//!
//! - [`fft`] - FFT wrapper with windowing functions
//! - [`spectrum`] - magnitude spectra and dominant-frequency extraction
//! - [`dynamics`] - peak level, normalization, gating and run lengths
//!
//! ## Example
//!
//! ```rust
//! use audiocipher_analysis::{SpectrumAnalyzer, Window};
//!
//! let sample_rate = 44100.0;
//! let tone: Vec<f32> = (0..4410)
//!     .map(|i| (2.0 * std::f32::consts::PI * 500.0 * i as f32 / sample_rate).sin())
//!     .collect();
//!
//! let analyzer = SpectrumAnalyzer::new(sample_rate, 4410, Window::Rectangular);
//! assert_eq!(analyzer.dominant_frequency(&tone), 500.0);
//! ```

pub mod dynamics;
pub mod fft;
pub mod spectrum;

pub use dynamics::{Run, gate, merge_short_gaps, normalize, peak, runs};
pub use fft::{Fft, Window};
pub use spectrum::SpectrumAnalyzer;
