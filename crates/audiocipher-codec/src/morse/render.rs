//! Musical events to audio.

use super::MusicalEvent;
use audiocipher_core::{AudioBuffer, Envelope, Result, Scale, ToneSpec, Waveform, samples_for_ms};
use audiocipher_synth::ToneSynthesizer;

/// Peak amplitude of rendered notes.
pub const NOTE_AMPLITUDE: f64 = 0.8;

/// Silence at the end of every note, inside the note's own duration.
///
/// Consecutive dots and dashes of one character have no rest between them;
/// this tail keeps them apart in the gated trace.
pub const ARTICULATION_MS: u32 = 62;

/// Render `sequence` with note frequencies from `scale`.
///
/// Each event occupies exactly `duration_ms` worth of samples, so the
/// output length depends on event durations only, never on the notes.
pub fn render(
    sequence: &[MusicalEvent],
    scale: &Scale,
    synth: &ToneSynthesizer,
) -> Result<AudioBuffer> {
    let sample_rate = synth.sample_rate();
    let mut out = AudioBuffer::new(sample_rate);
    for event in sequence {
        let ms = event.duration_ms();
        let total = samples_for_ms(sample_rate, ms);
        let tone_ms = ms.saturating_sub(ARTICULATION_MS);
        let tone = match event.note {
            Some(note) if tone_ms > 0 => {
                let spec = ToneSpec::new(Waveform::Sine, scale.frequency(note), tone_ms)?
                    .with_amplitude(NOTE_AMPLITUDE)?
                    .with_envelope(Envelope::FLAT)?;
                synth.synthesize(&spec)
            }
            _ => AudioBuffer::new(sample_rate),
        };
        let tail = total.saturating_sub(tone.len());
        out.append(&tone);
        out.append(&AudioBuffer::from_samples(vec![0; tail], sample_rate));
    }
    Ok(out)
}
