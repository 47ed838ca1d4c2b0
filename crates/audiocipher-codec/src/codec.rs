//! One codec identity for both directions.

use crate::morse::{MorseDecoder, MorseEncoder};
use crate::{Encoder, SpectralDecoder};
use audiocipher_core::{AudioBuffer, CodecId, Result, Scale, Scheme};

/// An encoder/decoder pair sharing one [`CodecId`].
///
/// Choosing the codec once and using the same value to encode and decode
/// keeps scheme and decoder thresholds in agreement.
///
/// ```rust
/// use audiocipher_codec::Codec;
/// use audiocipher_core::Scheme;
///
/// let codec = Codec::alphabet(Scheme::Modulated).unwrap();
/// let audio = codec.encode("hello 123").unwrap();
/// assert_eq!(codec.decode(&audio).unwrap(), "hello 123");
/// ```
#[derive(Debug)]
pub enum Codec {
    /// Frequency-identity alphabet codec.
    Alphabet {
        /// Tone encoder.
        encoder: Encoder,
        /// Spectral decoder for the same scheme.
        decoder: SpectralDecoder,
    },
    /// Morse melody codec.
    Morse {
        /// Melody encoder.
        encoder: MorseEncoder,
        /// Timing decoder.
        decoder: MorseDecoder,
    },
}

impl Codec {
    /// Alphabet codec for `scheme`.
    pub fn alphabet(scheme: Scheme) -> Result<Self> {
        Ok(Codec::Alphabet {
            encoder: Encoder::new(scheme)?,
            decoder: SpectralDecoder::new(scheme),
        })
    }

    /// Alphabet codec around an existing encoder, e.g. one built from assets.
    pub fn from_encoder(encoder: Encoder) -> Self {
        let decoder = SpectralDecoder::new(encoder.scheme());
        Codec::Alphabet { encoder, decoder }
    }

    /// Morse codec playing notes from `scale`.
    pub fn morse(scale: Scale) -> Self {
        Codec::Morse {
            encoder: MorseEncoder::new(scale),
            decoder: MorseDecoder::new(),
        }
    }

    /// Identity of this codec.
    pub fn id(&self) -> CodecId {
        match self {
            Codec::Alphabet { encoder, .. } => encoder.identity(),
            Codec::Morse { .. } => CodecId::Morse,
        }
    }

    /// Encode `text`.
    pub fn encode(&self, text: &str) -> Result<AudioBuffer> {
        match self {
            Codec::Alphabet { encoder, .. } => Ok(encoder.encode(text)),
            Codec::Morse { encoder, .. } => encoder.encode(text),
        }
    }

    /// Decode `buffer`.
    pub fn decode(&self, buffer: &AudioBuffer) -> Result<String> {
        match self {
            Codec::Alphabet { decoder, .. } => decoder.decode(buffer),
            Codec::Morse { decoder, .. } => decoder.decode(buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audiocipher_core::Error;

    fn scale() -> Scale {
        Scale::new(
            "G Major",
            [196.0, 220.0, 246.94, 261.63, 293.66, 329.63, 369.99, 392.0],
        )
    }

    #[test]
    fn ids() {
        assert_eq!(
            Codec::alphabet(Scheme::Beeps).unwrap().id(),
            CodecId::Alphabet(Scheme::Beeps)
        );
        assert_eq!(Codec::morse(scale()).id(), CodecId::Morse);
    }

    #[test]
    fn cross_family_decode_fails_loudly() {
        let morse = Codec::morse(scale());
        let alpha = Codec::alphabet(Scheme::Beeps).unwrap();
        let err = alpha.decode(&morse.encode("hi").unwrap()).unwrap_err();
        assert!(matches!(err, Error::CodecMismatch { found: CodecId::Morse, .. }));
        let err = morse.decode(&alpha.encode("hi").unwrap()).unwrap_err();
        assert!(matches!(err, Error::CodecMismatch { expected: CodecId::Morse, .. }));
    }

    #[test]
    fn morse_roundtrip_through_facade() {
        let codec = Codec::morse(scale());
        let audio = codec.encode("cq dx").unwrap();
        assert_eq!(codec.decode(&audio).unwrap(), "CQ DX");
    }
}
