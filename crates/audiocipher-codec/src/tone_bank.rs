//! Pre-rendered tones for one scheme.

use crate::SymbolAlphabet;
use audiocipher_core::{AudioBuffer, Result, Scheme};
use audiocipher_synth::ToneSynthesizer;

/// One rendered buffer per symbol, plus the gap tone and a silence clip.
///
/// Built once by synthesis or loaded from exported assets, then shared
/// read-only by the encoder.
#[derive(Debug, Clone)]
pub struct ToneBank {
    scheme: Scheme,
    tones: Vec<(char, AudioBuffer)>,
    gap: AudioBuffer,
    silence: AudioBuffer,
}

impl ToneBank {
    /// Render every tone of `alphabet`.
    pub fn synthesize(alphabet: &SymbolAlphabet, synth: &ToneSynthesizer) -> Result<Self> {
        let tones = alphabet
            .symbols()
            .iter()
            .map(|s| Ok((s.character, synth.synthesize(&alphabet.spec_for(s.character)?))))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            scheme: alphabet.scheme(),
            tones,
            gap: synth.synthesize(&alphabet.gap_spec()?),
            silence: synth.silence(alphabet.params().silence_ms),
        })
    }

    /// Assemble a bank from already rendered buffers.
    ///
    /// `tones` should be keyed by lowercase character.
    pub fn from_parts(
        scheme: Scheme,
        tones: Vec<(char, AudioBuffer)>,
        gap: AudioBuffer,
        silence: AudioBuffer,
    ) -> Self {
        Self {
            scheme,
            tones,
            gap,
            silence,
        }
    }

    /// Scheme the tones belong to.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Sample rate of the gap tone, shared by every tone in the bank.
    pub fn sample_rate(&self) -> u32 {
        self.gap.sample_rate()
    }

    /// Tone for `c` (case-insensitive).
    pub fn tone(&self, c: char) -> Option<&AudioBuffer> {
        let c = c.to_ascii_lowercase();
        self.tones.iter().find(|(t, _)| *t == c).map(|(_, b)| b)
    }

    /// Word-gap tone.
    pub fn gap(&self) -> &AudioBuffer {
        &self.gap
    }

    /// Silence clip.
    pub fn silence(&self) -> &AudioBuffer {
        &self.silence
    }

    /// Symbol tones in the order they were added.
    pub fn tones(&self) -> impl Iterator<Item = (char, &AudioBuffer)> {
        self.tones.iter().map(|(c, b)| (*c, b))
    }

    /// Number of symbol tones.
    pub fn len(&self) -> usize {
        self.tones.len()
    }

    /// Whether the bank holds no symbol tones.
    pub fn is_empty(&self) -> bool {
        self.tones.is_empty()
    }
}
