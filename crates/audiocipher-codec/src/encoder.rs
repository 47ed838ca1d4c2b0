//! Text to tone-sequence encoder.

use crate::{SymbolAlphabet, ToneBank};
use audiocipher_core::{AudioBuffer, CodecId, Result, Scheme};
use audiocipher_synth::ToneSynthesizer;
use tracing::debug;

/// Concatenates per-character tones, with one gap tone between words.
///
/// # Example
///
/// ```rust
/// use audiocipher_codec::Encoder;
/// use audiocipher_core::Scheme;
///
/// let encoder = Encoder::new(Scheme::Beeps).unwrap();
/// let audio = encoder.encode("hi there");
/// // 7 symbols of 100 ms and one 200 ms gap
/// assert_eq!(audio.len(), 7 * 4410 + 8820);
/// ```
#[derive(Debug, Clone)]
pub struct Encoder {
    bank: ToneBank,
}

impl Encoder {
    /// Encoder for `scheme` with tones synthesized at 44.1 kHz.
    pub fn new(scheme: Scheme) -> Result<Self> {
        let alphabet = SymbolAlphabet::new(scheme);
        let bank = ToneBank::synthesize(&alphabet, &ToneSynthesizer::default())?;
        Ok(Self::with_bank(bank))
    }

    /// Encoder over an existing tone bank, e.g. one loaded from assets.
    pub fn with_bank(bank: ToneBank) -> Self {
        Self { bank }
    }

    /// Scheme of the underlying tones.
    pub fn scheme(&self) -> Scheme {
        self.bank.scheme()
    }

    /// Identity stamped on every encoded buffer.
    pub fn identity(&self) -> CodecId {
        CodecId::Alphabet(self.bank.scheme())
    }

    /// The tones this encoder draws from.
    pub fn bank(&self) -> &ToneBank {
        &self.bank
    }

    /// Encode `text`.
    ///
    /// Words are separated by whitespace; characters without a tone are
    /// skipped. No gap follows the final word.
    pub fn encode(&self, text: &str) -> AudioBuffer {
        let mut out = AudioBuffer::new(self.bank.sample_rate());
        for (i, word) in text.split_whitespace().enumerate() {
            if i > 0 {
                out.append(self.bank.gap());
            }
            for c in word.chars() {
                match self.bank.tone(c) {
                    Some(tone) => out.append(tone),
                    None => debug!(symbol = ?c, scheme = %self.scheme(), "skipping unmapped symbol"),
                }
            }
        }
        out.with_origin(self.identity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoder() -> Encoder {
        Encoder::new(Scheme::Beeps).unwrap()
    }

    #[test]
    fn empty_input_is_empty_buffer() {
        let enc = encoder();
        assert!(enc.encode("").is_empty());
        assert!(enc.encode("   \n\t ").is_empty());
    }

    #[test]
    fn gap_only_between_words() {
        let enc = encoder();
        let bank = enc.bank();
        let joined = enc.encode("abcd");
        let split = enc.encode("ab cd");
        assert_eq!(joined.len(), 4 * 4410);
        assert_eq!(split.len(), 4 * 4410 + 8820);

        let expected = AudioBuffer::concat(
            44100,
            [
                bank.tone('a').unwrap(),
                bank.tone('b').unwrap(),
                bank.gap(),
                bank.tone('c').unwrap(),
                bank.tone('d').unwrap(),
            ],
        );
        assert_eq!(split.samples(), expected.samples());
    }

    #[test]
    fn repeated_whitespace_yields_one_gap() {
        let enc = encoder();
        assert_eq!(enc.encode("  ab \t\n cd  ").samples(), enc.encode("ab cd").samples());
    }

    #[test]
    fn unmapped_characters_are_skipped() {
        let enc = encoder();
        assert_eq!(enc.encode("a~b").samples(), enc.encode("ab").samples());
        assert_eq!(enc.encode("AB").samples(), enc.encode("ab").samples());
    }

    #[test]
    fn output_is_tagged_with_scheme() {
        let enc = Encoder::new(Scheme::NonHuman).unwrap();
        assert_eq!(
            enc.encode("x").origin(),
            Some(CodecId::Alphabet(Scheme::NonHuman))
        );
    }
}
