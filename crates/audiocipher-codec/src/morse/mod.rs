//! Morse melody codec.
//!
//! Text is translated to Morse code and each dot or dash is played as a
//! randomly chosen note of a musical scale. Decoding looks only at when a
//! tone is sounding, so any scale and any note choice decode the same.

mod decoder;
mod render;
mod sequence;
mod table;

pub use decoder::{
    DASH_MIN_SECS, DEBOUNCE_MS, GATE_THRESHOLD, LETTER_GAP_MIN_SECS, MorseDecoder,
    TERMINATOR_MIN_SECS, WORD_GAP_MIN_SECS,
};
pub use render::{ARTICULATION_MS, NOTE_AMPLITUDE, render};
pub use sequence::{
    DASH_SECS, DOT_SECS, LETTER_REST_SECS, MusicalEvent, TERMINATOR_NOTE, TERMINATOR_SECS,
    WORD_REST_SECS, to_morse_sequence, total_secs,
};
pub use table::{char_for, code_for, from_morse, to_morse};

use audiocipher_core::{AudioBuffer, CodecId, Result, Scale};
use audiocipher_synth::ToneSynthesizer;
use rand::Rng;

/// Renders text as a Morse melody in one scale.
///
/// # Example
///
/// ```rust
/// use audiocipher_codec::morse::{MorseDecoder, MorseEncoder};
/// use audiocipher_core::Scale;
///
/// let scale = Scale::new("A Minor", [220.0, 246.94, 261.63, 293.66, 329.63, 349.23, 392.0, 440.0]);
/// let audio = MorseEncoder::new(scale).encode("sos").unwrap();
/// assert_eq!(MorseDecoder::new().decode(&audio).unwrap(), "SOS");
/// ```
#[derive(Debug, Clone)]
pub struct MorseEncoder {
    scale: Scale,
    synth: ToneSynthesizer,
}

impl MorseEncoder {
    /// Encoder playing notes from `scale` at 44.1 kHz.
    pub fn new(scale: Scale) -> Self {
        Self {
            scale,
            synth: ToneSynthesizer::default(),
        }
    }

    /// The active scale.
    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    /// Identity stamped on every rendered buffer.
    pub fn identity(&self) -> CodecId {
        CodecId::Morse
    }

    /// Event sequence for `text`, drawing notes from `rng`.
    pub fn sequence<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<MusicalEvent> {
        to_morse_sequence(text, rng)
    }

    /// Render an event sequence in this encoder's scale.
    pub fn render(&self, sequence: &[MusicalEvent]) -> Result<AudioBuffer> {
        Ok(render(sequence, &self.scale, &self.synth)?.with_origin(self.identity()))
    }

    /// Encode `text` with notes drawn from `rng`.
    pub fn encode_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Result<AudioBuffer> {
        self.render(&self.sequence(text, rng))
    }

    /// Encode `text` with thread-local randomness.
    pub fn encode(&self, text: &str) -> Result<AudioBuffer> {
        self.encode_with_rng(text, &mut rand::thread_rng())
    }
}
