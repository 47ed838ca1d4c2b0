//! Tone-presence timing decoder.

use super::table::from_morse;
use audiocipher_analysis::{Run, gate, merge_short_gaps, normalize, runs};
use audiocipher_core::{AudioBuffer, CodecId, Error, Result, samples_for_ms};
use tracing::{debug, trace};

/// Gate level on the peak-normalized signal.
pub const GATE_THRESHOLD: f32 = 0.5;
/// Tone runs at least this long are dashes; shorter ones are dots.
pub const DASH_MIN_SECS: f32 = 0.18;
/// Silences at least this long separate letters.
pub const LETTER_GAP_MIN_SECS: f32 = 0.18;
/// Silences at least this long separate words.
pub const WORD_GAP_MIN_SECS: f32 = 0.4;
/// Tone runs at least this long are the closing note.
pub const TERMINATOR_MIN_SECS: f32 = 0.4;
/// Sub-threshold dips shorter than this inside a tone are bridged.
pub const DEBOUNCE_MS: u32 = 10;

/// Decodes Morse melodies by tone timing alone.
///
/// Note pitch is never examined, so the output does not depend on the scale
/// or on which notes were drawn.
#[derive(Debug, Clone, Copy, Default)]
pub struct MorseDecoder;

impl MorseDecoder {
    /// Create a decoder.
    pub fn new() -> Self {
        Self
    }

    /// Identity this decoder accepts.
    pub fn identity(&self) -> CodecId {
        CodecId::Morse
    }

    /// Recover the dot/dash string: letters separated by one space, words
    /// by three.
    pub fn to_morse(&self, buffer: &AudioBuffer) -> Result<String> {
        if let Some(found) = buffer.origin() {
            if found != CodecId::Morse {
                return Err(Error::CodecMismatch {
                    expected: CodecId::Morse,
                    found,
                });
            }
        }

        let sample_rate = buffer.sample_rate() as f32;
        let trace = gate(&normalize(&buffer.to_f32()), GATE_THRESHOLD);
        let debounce = samples_for_ms(buffer.sample_rate(), DEBOUNCE_MS);
        let runs = merge_short_gaps(&runs(&trace), debounce);

        let (Some(first), Some(last)) = (
            runs.iter().position(|r| r.on),
            runs.iter().rposition(|r| r.on),
        ) else {
            return Ok(String::new());
        };

        let mut morse = String::new();
        for run in &runs[first..=last] {
            let secs = run.duration_secs(sample_rate);
            trace!(on = run.on, start = run.start, secs, "run");
            if run.on && secs >= TERMINATOR_MIN_SECS {
                break;
            }
            if let Some(symbol) = classify(run, secs) {
                morse.push_str(symbol);
            }
        }
        debug!(%morse, "recovered morse");
        Ok(morse)
    }

    /// Decode `buffer` to uppercase text.
    ///
    /// Decoding stops at the first terminator note; anything after it is
    /// ignored.
    ///
    /// Empty or silent buffers decode to `""`.
    pub fn decode(&self, buffer: &AudioBuffer) -> Result<String> {
        Ok(from_morse(&self.to_morse(buffer)?))
    }
}

fn classify(run: &Run, secs: f32) -> Option<&'static str> {
    if run.on {
        if secs >= DASH_MIN_SECS {
            Some("-")
        } else {
            Some(".")
        }
    } else if secs >= WORD_GAP_MIN_SECS {
        Some("   ")
    } else if secs >= LETTER_GAP_MIN_SECS {
        Some(" ")
    } else {
        None
    }
}
