//! Audiocipher Core - shared types for the audiocipher tone codecs
//!
//! This crate holds the data model every other audiocipher crate speaks:
//!
//! - [`AudioBuffer`] - mono signed 16-bit PCM at a fixed sample rate
//! - [`ToneSpec`] - immutable description of one synthesized tone
//!   ([`Waveform`], optional [`Modulation`], breakpoint [`Envelope`])
//! - [`Scheme`] / [`SchemeParams`] - the named parameter sets that define a
//!   symbol-to-tone alphabet
//! - [`Scale`] / [`Note`] - eight-note musical scales used by the Morse codec
//! - [`CodecId`] - the codec identity threaded through encode and decode
//!
//! ## Example
//!
//! ```rust
//! use audiocipher_core::{AudioBuffer, Scheme, SAMPLE_RATE};
//!
//! let params = Scheme::Beeps.params();
//! assert_eq!(params.base_frequency, 500.0);
//! assert_eq!(params.gap_frequency(), 490.0);
//!
//! let silence = AudioBuffer::silence(SAMPLE_RATE, 100);
//! assert_eq!(silence.len(), 4410);
//! ```

mod buffer;
mod codec_id;
mod error;
mod scale;
mod scheme;
mod tone;

pub use buffer::{AudioBuffer, SAMPLE_RATE, samples_for_ms};
pub use codec_id::CodecId;
pub use error::{Error, Result};
pub use scale::{NOTE_NAMES, Note, Scale};
pub use scheme::{Scheme, SchemeParams};
pub use tone::{Envelope, Modulation, ToneSpec, Waveform};
