//! Morse text to a sequence of timed notes and rests.

use super::table::code_for;
use audiocipher_core::Note;
use rand::Rng;

/// Dot note length in seconds.
pub const DOT_SECS: f64 = 0.125;
/// Dash note length in seconds.
pub const DASH_SECS: f64 = 0.25;
/// Rest after every character.
pub const LETTER_REST_SECS: f64 = 0.125;
/// Rest for a space.
pub const WORD_REST_SECS: f64 = 0.25;
/// Closing note length.
pub const TERMINATOR_SECS: f64 = 0.5;
/// Closing note.
pub const TERMINATOR_NOTE: Note = Note::C;

/// A note (or rest) with a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicalEvent {
    /// Note to play, `None` for a rest.
    pub note: Option<Note>,
    /// Duration in seconds.
    pub duration_secs: f64,
}

impl MusicalEvent {
    /// A sounding note.
    pub fn note(note: Note, duration_secs: f64) -> Self {
        Self {
            note: Some(note),
            duration_secs,
        }
    }

    /// A rest.
    pub fn rest(duration_secs: f64) -> Self {
        Self {
            note: None,
            duration_secs,
        }
    }

    /// Whether this event is silent.
    pub fn is_rest(&self) -> bool {
        self.note.is_none()
    }

    /// Duration rounded to whole milliseconds.
    pub fn duration_ms(&self) -> u32 {
        (self.duration_secs * 1000.0).round() as u32
    }
}

/// Translate `text` into musical events.
///
/// Each dot or dash becomes a note drawn at random from the eight scale
/// degrees; every character is followed by a short rest and every space is a
/// longer rest. Characters with no Morse code are skipped. A terminator note
/// closes the sequence, so even empty text yields one event.
pub fn to_morse_sequence<R: Rng + ?Sized>(text: &str, rng: &mut R) -> Vec<MusicalEvent> {
    let mut sequence = Vec::new();
    for c in text.chars() {
        if c == ' ' {
            sequence.push(MusicalEvent::rest(WORD_REST_SECS));
            continue;
        }
        let Some(code) = code_for(c) else {
            continue;
        };
        for symbol in code.chars() {
            let note = Note::ALL[rng.gen_range(0..Note::ALL.len())];
            let duration = if symbol == '.' { DOT_SECS } else { DASH_SECS };
            sequence.push(MusicalEvent::note(note, duration));
        }
        sequence.push(MusicalEvent::rest(LETTER_REST_SECS));
    }
    sequence.push(MusicalEvent::note(TERMINATOR_NOTE, TERMINATOR_SECS));
    sequence
}

/// Total duration of a sequence in seconds.
pub fn total_secs(sequence: &[MusicalEvent]) -> f64 {
    sequence.iter().map(|e| e.duration_secs).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn durations(seq: &[MusicalEvent]) -> Vec<(bool, f64)> {
        seq.iter().map(|e| (e.is_rest(), e.duration_secs)).collect()
    }

    #[test]
    fn sos_shape() {
        let mut rng = Pcg32::seed_from_u64(7);
        let seq = to_morse_sequence("SOS", &mut rng);
        let expected = vec![
            (false, DOT_SECS),
            (false, DOT_SECS),
            (false, DOT_SECS),
            (true, LETTER_REST_SECS),
            (false, DASH_SECS),
            (false, DASH_SECS),
            (false, DASH_SECS),
            (true, LETTER_REST_SECS),
            (false, DOT_SECS),
            (false, DOT_SECS),
            (false, DOT_SECS),
            (true, LETTER_REST_SECS),
            (false, TERMINATOR_SECS),
        ];
        assert_eq!(durations(&seq), expected);
        assert_eq!(seq.last().and_then(|e| e.note), Some(Note::C));
    }

    #[test]
    fn space_is_a_word_rest() {
        let mut rng = Pcg32::seed_from_u64(1);
        let seq = to_morse_sequence("e e", &mut rng);
        assert_eq!(
            durations(&seq),
            vec![
                (false, DOT_SECS),
                (true, LETTER_REST_SECS),
                (true, WORD_REST_SECS),
                (false, DOT_SECS),
                (true, LETTER_REST_SECS),
                (false, TERMINATOR_SECS),
            ]
        );
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let mut a = Pcg32::seed_from_u64(3);
        let mut b = Pcg32::seed_from_u64(3);
        assert_eq!(
            to_morse_sequence("a!b", &mut a),
            to_morse_sequence("ab", &mut b)
        );
    }

    #[test]
    fn empty_text_is_just_the_terminator() {
        let mut rng = Pcg32::seed_from_u64(0);
        let seq = to_morse_sequence("", &mut rng);
        assert_eq!(seq, vec![MusicalEvent::note(Note::C, TERMINATOR_SECS)]);
    }

    #[test]
    fn same_seed_same_notes() {
        let a = to_morse_sequence("melody", &mut Pcg32::seed_from_u64(42));
        let b = to_morse_sequence("melody", &mut Pcg32::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn duration_ms_rounds() {
        assert_eq!(MusicalEvent::rest(0.125).duration_ms(), 125);
        assert_eq!(MusicalEvent::rest(0.0004).duration_ms(), 0);
        let total = total_secs(&[MusicalEvent::rest(0.25), MusicalEvent::rest(0.5)]);
        assert!((total - 0.75).abs() < 1e-12);
    }
}
