//! Window-by-window dominant-frequency decoder.

use crate::SymbolAlphabet;
use audiocipher_analysis::{SpectrumAnalyzer, Window};
use audiocipher_core::{AudioBuffer, CodecId, Error, Result, SAMPLE_RATE, Scheme, samples_for_ms};
use tracing::trace;

/// How one analysis window was read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    /// Dominant frequency below the gap threshold: a word boundary.
    Boundary,
    /// Nearest alphabet symbol.
    Symbol(char),
}

/// Per-window decoder output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowReading {
    /// Index of the window's first sample.
    pub start: usize,
    /// Dominant frequency in Hz.
    pub frequency: f32,
    /// Boundary or symbol.
    pub class: Classification,
}

/// Decodes alphabet-encoded audio for one scheme.
///
/// The buffer is cut into back-to-back windows as long as one symbol tone
/// (100 ms). Each window's dominant FFT bin is classified as a word boundary
/// or as the nearest symbol. A run of boundary windows produces a single
/// space. The output is not trimmed.
#[derive(Debug)]
pub struct SpectralDecoder {
    alphabet: SymbolAlphabet,
    analyzer: SpectrumAnalyzer,
    sample_rate: u32,
    window_len: usize,
}

impl SpectralDecoder {
    /// Decoder for `scheme` at 44.1 kHz with a rectangular window.
    pub fn new(scheme: Scheme) -> Self {
        Self::with_window(scheme, Window::Rectangular)
    }

    /// Decoder for `scheme` using the given analysis window shape.
    pub fn with_window(scheme: Scheme, window: Window) -> Self {
        let alphabet = SymbolAlphabet::new(scheme);
        let window_len = samples_for_ms(SAMPLE_RATE, alphabet.params().symbol_ms);
        Self {
            analyzer: SpectrumAnalyzer::new(SAMPLE_RATE as f32, window_len, window),
            alphabet,
            sample_rate: SAMPLE_RATE,
            window_len,
        }
    }

    /// Identity this decoder accepts.
    pub fn identity(&self) -> CodecId {
        CodecId::Alphabet(self.alphabet.scheme())
    }

    /// The alphabet symbols are matched against.
    pub fn alphabet(&self) -> &SymbolAlphabet {
        &self.alphabet
    }

    /// Analysis window length in samples.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Classify a dominant frequency.
    pub fn classify(&self, frequency: f64) -> Classification {
        if frequency < self.alphabet.gap_threshold() {
            Classification::Boundary
        } else {
            Classification::Symbol(self.alphabet.nearest(frequency).character)
        }
    }

    /// Read every window of `buffer`. A trailing partial window is zero-padded.
    pub fn readings(&self, buffer: &AudioBuffer) -> Result<Vec<WindowReading>> {
        self.check(buffer)?;
        let samples = buffer.to_f32();
        let readings = samples
            .chunks(self.window_len)
            .enumerate()
            .map(|(i, window)| {
                let frequency = self.analyzer.dominant_frequency(window);
                let class = self.classify(f64::from(frequency));
                trace!(window = i, frequency, ?class, "classified window");
                WindowReading {
                    start: i * self.window_len,
                    frequency,
                    class,
                }
            })
            .collect();
        Ok(readings)
    }

    /// Decode `buffer` to text.
    ///
    /// An empty buffer decodes to `""`; silence decodes to a single space.
    pub fn decode(&self, buffer: &AudioBuffer) -> Result<String> {
        let mut text = String::new();
        let mut in_boundary = false;
        for reading in self.readings(buffer)? {
            match reading.class {
                Classification::Boundary => {
                    if !in_boundary {
                        text.push(' ');
                    }
                    in_boundary = true;
                }
                Classification::Symbol(c) => {
                    text.push(c);
                    in_boundary = false;
                }
            }
        }
        Ok(text)
    }

    fn check(&self, buffer: &AudioBuffer) -> Result<()> {
        if let Some(found) = buffer.origin() {
            let expected = self.identity();
            if found != expected {
                return Err(Error::CodecMismatch { expected, found });
            }
        }
        if buffer.sample_rate() != self.sample_rate {
            return Err(Error::SampleRateMismatch {
                expected: self.sample_rate,
                found: buffer.sample_rate(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Encoder;

    #[test]
    fn decodes_encoded_words() {
        let enc = Encoder::new(Scheme::Beeps).unwrap();
        let dec = SpectralDecoder::new(Scheme::Beeps);
        assert_eq!(dec.decode(&enc.encode("hello world")).unwrap(), "hello world");
    }

    #[test]
    fn gap_run_collapses_to_one_space() {
        let enc = Encoder::new(Scheme::Beeps).unwrap();
        let dec = SpectralDecoder::new(Scheme::Beeps);
        let readings = dec.readings(&enc.encode("a b")).unwrap();
        // a, gap, gap, b
        assert_eq!(readings.len(), 4);
        assert_eq!(readings[1].class, Classification::Boundary);
        assert_eq!(readings[2].class, Classification::Boundary);
        assert_eq!(readings[2].start, 8820);
        assert_eq!(dec.decode(&enc.encode("a b")).unwrap(), "a b");
    }

    #[test]
    fn empty_and_silent_buffers() {
        let dec = SpectralDecoder::new(Scheme::Modulated);
        assert_eq!(dec.decode(&AudioBuffer::new(44100)).unwrap(), "");
        let silence = AudioBuffer::silence(44100, 500);
        assert_eq!(dec.decode(&silence).unwrap(), " ");
    }

    #[test]
    fn partial_window_is_decoded() {
        let enc = Encoder::new(Scheme::Beeps).unwrap();
        let full = enc.encode("ab");
        let cut: Vec<i16> = full.samples()[..4410 + 3000].to_vec();
        let dec = SpectralDecoder::new(Scheme::Beeps);
        let text = dec.decode(&AudioBuffer::from_samples(cut, 44100)).unwrap();
        assert_eq!(text, "ab");
    }

    #[test]
    fn mismatched_scheme_is_rejected() {
        let enc = Encoder::new(Scheme::Beeps).unwrap();
        let dec = SpectralDecoder::new(Scheme::NonHuman);
        let err = dec.decode(&enc.encode("abc")).unwrap_err();
        assert_eq!(
            err,
            Error::CodecMismatch {
                expected: CodecId::Alphabet(Scheme::NonHuman),
                found: CodecId::Alphabet(Scheme::Beeps),
            }
        );
    }

    #[test]
    fn untagged_buffer_is_accepted() {
        let enc = Encoder::new(Scheme::NonHuman).unwrap();
        let raw = AudioBuffer::from_samples(enc.encode("q7").into_samples(), 44100);
        let dec = SpectralDecoder::new(Scheme::NonHuman);
        assert_eq!(dec.decode(&raw).unwrap(), "q7");
    }

    #[test]
    fn wrong_sample_rate_is_rejected() {
        let dec = SpectralDecoder::new(Scheme::Beeps);
        let buf = AudioBuffer::silence(48000, 100);
        assert!(matches!(
            dec.decode(&buf),
            Err(Error::SampleRateMismatch { expected: 44100, found: 48000 })
        ));
    }

    #[test]
    fn classify_threshold_and_tie_break() {
        let dec = SpectralDecoder::new(Scheme::Beeps);
        assert_eq!(dec.classify(494.9), Classification::Boundary);
        assert_eq!(dec.classify(0.0), Classification::Boundary);
        assert_eq!(dec.classify(495.0), Classification::Symbol('a'));
        assert_eq!(dec.classify(515.0), Classification::Symbol('b'));
    }

    #[test]
    fn hann_window_decodes_too() {
        let enc = Encoder::new(Scheme::Modulated).unwrap();
        let dec = SpectralDecoder::with_window(Scheme::Modulated, Window::Hann);
        assert_eq!(dec.decode(&enc.encode("ok 42")).unwrap(), "ok 42");
    }
}
