//! Spectral checks on synthesized tones.

use audiocipher_analysis::{SpectrumAnalyzer, Window};
use audiocipher_core::{AudioBuffer, Envelope, Scheme, ToneSpec, Waveform};
use audiocipher_synth::ToneSynthesizer;
use proptest::prelude::*;

fn analyzer() -> SpectrumAnalyzer {
    SpectrumAnalyzer::new(44100.0, 4410, Window::Rectangular)
}

fn scheme_tone(scheme: Scheme, frequency: f64) -> AudioBuffer {
    let p = scheme.params();
    let mut spec = ToneSpec::new(p.waveform, frequency, p.symbol_ms)
        .unwrap()
        .with_amplitude(p.amplitude)
        .unwrap();
    if let Some(m) = p.modulation {
        spec = spec.with_modulation(m);
    }
    ToneSynthesizer::default().synthesize(&spec)
}

#[test]
fn scheme_tones_peak_at_their_frequency() {
    let analyzer = analyzer();
    for scheme in Scheme::ALL {
        let p = scheme.params();
        for index in [0.0, 1.0, 25.0, 63.0] {
            let freq = p.base_frequency + index * p.step;
            let tone = scheme_tone(scheme, freq);
            let found = analyzer.dominant_frequency(&tone.to_f32());
            assert!(
                (f64::from(found) - freq).abs() < 0.5,
                "{scheme}: expected {freq} Hz, got {found} Hz"
            );
        }
    }
}

#[test]
fn gap_tone_peaks_below_threshold() {
    let analyzer = analyzer();
    for scheme in Scheme::ALL {
        let p = scheme.params();
        let gap = scheme_tone(scheme, p.gap_frequency());
        let samples = gap.to_f32();
        for window in samples.chunks(4410) {
            let found = f64::from(analyzer.dominant_frequency(window));
            assert!(found < p.gap_threshold(), "{scheme}: gap read as {found} Hz");
        }
    }
}

#[test]
fn square_tone_fundamental_dominates() {
    let spec = ToneSpec::new(Waveform::Square, 600.0, 100)
        .unwrap()
        .with_envelope(Envelope::FLAT)
        .unwrap();
    let tone = ToneSynthesizer::default().synthesize(&spec);
    assert_eq!(analyzer().dominant_frequency(&tone.to_f32()), 600.0);
}

#[test]
fn silence_has_no_dominant_tone() {
    let silence = ToneSynthesizer::default().silence(200);
    assert_eq!(silence.len(), 8820);
    assert_eq!(analyzer().dominant_frequency(&silence.to_f32()), 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn synthesized_length_tracks_duration(ms in 1u32..2000, freq in 20.0f64..20000.0) {
        let spec = ToneSpec::new(Waveform::Sine, freq, ms).unwrap();
        let tone = ToneSynthesizer::default().synthesize(&spec);
        prop_assert_eq!(tone.len(), (ms as usize * 44100) / 1000);
    }

    #[test]
    fn output_never_exceeds_full_scale(
        amp in 0.0f64..=1.0,
        depth in 0.0f64..10.0,
        waveform in prop::sample::select(Waveform::ALL.to_vec()),
    ) {
        let spec = ToneSpec::new(waveform, 440.0, 20)
            .unwrap()
            .with_amplitude(amp)
            .unwrap()
            .with_modulation(audiocipher_core::Modulation { frequency: 5.0, depth });
        let tone = ToneSynthesizer::default().synthesize(&spec);
        prop_assert!(tone.samples().iter().all(|s| s.unsigned_abs() <= 32767));
    }
}
