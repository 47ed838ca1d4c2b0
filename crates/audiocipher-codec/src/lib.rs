//! Audiocipher Codec - text to tones and back
//!
//! Two independent codec families:
//!
//! - **Alphabet** - every character has its own tone frequency under a
//!   [`Scheme`]. [`Encoder`] concatenates 100 ms symbol tones with a reserved
//!   gap tone between words; [`SpectralDecoder`] reads the dominant frequency
//!   of each 100 ms window and maps it back to the nearest symbol.
//! - **Morse** - text becomes Morse code played as random notes of a
//!   [`Scale`]. [`morse::MorseDecoder`] recovers it from tone timing alone.
//!
//! Encoded buffers carry their [`CodecId`](audiocipher_core::CodecId);
//! decoding a tagged buffer with a different codec is an error rather than
//! silent garbage.
//!
//! ## Example
//!
//! ```rust
//! use audiocipher_codec::{decode, encode};
//! use audiocipher_core::Scheme;
//!
//! let audio = encode("meet at 9", Scheme::NonHuman).unwrap();
//! assert_eq!(decode(&audio, Scheme::NonHuman).unwrap(), "meet at 9");
//! ```

pub mod alphabet;
pub mod codec;
pub mod encoder;
pub mod morse;
pub mod spectral;
pub mod tone_bank;

pub use alphabet::{PUNCTUATION, Symbol, SymbolAlphabet, stable_name, symbol_chars};
pub use codec::Codec;
pub use encoder::Encoder;
pub use spectral::{Classification, SpectralDecoder, WindowReading};
pub use tone_bank::ToneBank;

use audiocipher_core::{AudioBuffer, Result, Scale, Scheme};
use morse::{MorseDecoder, MorseEncoder};
use rand::Rng;

/// Encode `text` as alphabet tones under `scheme`.
pub fn encode(text: &str, scheme: Scheme) -> Result<AudioBuffer> {
    Ok(Encoder::new(scheme)?.encode(text))
}

/// Decode alphabet tones under `scheme`.
pub fn decode(buffer: &AudioBuffer, scheme: Scheme) -> Result<String> {
    SpectralDecoder::new(scheme).decode(buffer)
}

/// Encode `text` as a Morse melody in `scale` with random note choice.
pub fn morse_encode(text: &str, scale: &Scale) -> Result<AudioBuffer> {
    MorseEncoder::new(scale.clone()).encode(text)
}

/// Encode `text` as a Morse melody, drawing notes from `rng`.
pub fn morse_encode_with_rng<R: Rng + ?Sized>(
    text: &str,
    scale: &Scale,
    rng: &mut R,
) -> Result<AudioBuffer> {
    MorseEncoder::new(scale.clone()).encode_with_rng(text, rng)
}

/// Decode a Morse melody.
pub fn morse_decode(buffer: &AudioBuffer) -> Result<String> {
    MorseDecoder::new().decode(buffer)
}

/// Names of the built-in schemes.
pub fn available_schemes() -> Vec<String> {
    Scheme::ALL.iter().map(|s| s.name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schemes_listed() {
        assert_eq!(available_schemes(), vec!["modulated", "beeps", "non_human"]);
    }
}
