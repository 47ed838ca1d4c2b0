//! Tone synthesizer: waveform, modulation, envelope and quantization.

use crate::Oscillator;
use audiocipher_core::{AudioBuffer, SAMPLE_RATE, ToneSpec, samples_for_ms};
use std::f64::consts::PI;

/// Renders [`ToneSpec`]s to 16-bit buffers at a fixed sample rate.
///
/// Each sample is computed as
///
/// ```text
/// x[i] = osc[i] * (1 + depth * sin(2π f_mod t))   (if modulated)
///            * amplitude * envelope(i / n)
/// ```
///
/// and then clamped and quantized with [`AudioBuffer::quantize`].
#[derive(Debug, Clone, Copy)]
pub struct ToneSynthesizer {
    sample_rate: u32,
}

impl Default for ToneSynthesizer {
    fn default() -> Self {
        Self::new(SAMPLE_RATE)
    }
}

impl ToneSynthesizer {
    /// Create a synthesizer at the given sample rate.
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Render one tone. The output has `duration_ms * sample_rate / 1000` samples.
    pub fn synthesize(&self, spec: &ToneSpec) -> AudioBuffer {
        let samples = self.render(spec).map(AudioBuffer::quantize).collect();
        AudioBuffer::from_samples(samples, self.sample_rate)
    }

    /// Render one tone as unquantized samples.
    ///
    /// Values may exceed [-1, 1] when a large modulation depth meets a high
    /// amplitude; quantization clamps them.
    pub fn render<'a>(&self, spec: &'a ToneSpec) -> impl Iterator<Item = f64> + 'a {
        let length = samples_for_ms(self.sample_rate, spec.duration_ms());
        let osc = Oscillator::new(self.sample_rate, spec.waveform(), spec.frequency(), length);
        let sample_rate = f64::from(self.sample_rate);
        let n = length as f64;
        let envelope = spec.envelope();
        let amplitude = spec.amplitude();
        let modulation = spec.modulation();

        (0..length).map(move |i| {
            let mut x = osc.sample(i);
            if let Some(m) = modulation {
                let t = i as f64 / sample_rate;
                x *= 1.0 + m.depth * (2.0 * PI * m.frequency * t).sin();
            }
            x * amplitude * envelope.level(i as f64 / n)
        })
    }

    /// A zero buffer of the given duration.
    pub fn silence(&self, duration_ms: u32) -> AudioBuffer {
        AudioBuffer::silence(self.sample_rate, duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audiocipher_core::{Envelope, Modulation, Waveform};

    fn tone(waveform: Waveform, freq: f64, ms: u32) -> ToneSpec {
        ToneSpec::new(waveform, freq, ms).unwrap()
    }

    #[test]
    fn test_length_matches_duration() {
        let synth = ToneSynthesizer::default();
        assert_eq!(synth.synthesize(&tone(Waveform::Sine, 500.0, 100)).len(), 4410);
        assert_eq!(synth.synthesize(&tone(Waveform::Square, 500.0, 200)).len(), 8820);
        assert_eq!(synth.silence(125).len(), 5512);
    }

    #[test]
    fn test_flat_envelope_full_amplitude_peaks_near_full_scale() {
        let synth = ToneSynthesizer::default();
        let spec = tone(Waveform::Square, 500.0, 10)
            .with_envelope(Envelope::FLAT)
            .unwrap();
        let buf = synth.synthesize(&spec);
        assert!(buf.samples().iter().all(|&s| s == 32767 || s == -32767));
    }

    #[test]
    fn test_default_envelope_scales_amplitude() {
        let synth = ToneSynthesizer::default();
        let spec = tone(Waveform::Square, 500.0, 100).with_amplitude(0.4).unwrap();
        let buf = synth.synthesize(&spec);
        let first = buf.samples()[0];
        // 0.4 * 0.2875 * 32767
        assert_eq!(first, 3768);
    }

    #[test]
    fn test_overdriven_modulation_clips_instead_of_wrapping() {
        let synth = ToneSynthesizer::default();
        let spec = tone(Waveform::Square, 500.0, 100)
            .with_envelope(Envelope::FLAT)
            .unwrap()
            .with_modulation(Modulation {
                frequency: 5.0,
                depth: 7.0,
            });
        let raw_max = synth.render(&spec).fold(0.0f64, |m, x| m.max(x.abs()));
        assert!(raw_max > 1.0, "test needs an out-of-range render");

        let buf = synth.synthesize(&spec);
        let max = buf.samples().iter().map(|s| s.unsigned_abs()).max().unwrap();
        assert_eq!(max, 32767);
    }

    #[test]
    fn test_symbol_tone_stays_in_range_without_clipping() {
        let synth = ToneSynthesizer::default();
        let spec = tone(Waveform::Sine, 500.0, 100)
            .with_amplitude(0.4)
            .unwrap()
            .with_modulation(Modulation::default());
        let raw_max = synth.render(&spec).fold(0.0f64, |m, x| m.max(x.abs()));
        assert!(raw_max < 1.0, "symbol tones should not clip: {raw_max}");
    }
}
