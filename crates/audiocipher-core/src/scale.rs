//! Eight-note musical scales.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Note names in the positional order used by scale tables.
pub const NOTE_NAMES: [&str; 8] = ["C", "D", "E", "F", "G", "A", "B", "C5"];

/// One of the eight scale degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    /// First degree.
    C,
    /// Second degree.
    D,
    /// Third degree.
    E,
    /// Fourth degree.
    F,
    /// Fifth degree.
    G,
    /// Sixth degree.
    A,
    /// Seventh degree.
    B,
    /// Octave.
    C5,
}

impl Note {
    /// All notes in positional order.
    pub const ALL: [Note; 8] = [
        Note::C,
        Note::D,
        Note::E,
        Note::F,
        Note::G,
        Note::A,
        Note::B,
        Note::C5,
    ];

    /// Position within a scale row.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Note name as written in scale tables.
    pub fn name(&self) -> &'static str {
        NOTE_NAMES[self.index()]
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_uppercase();
        Note::ALL
            .into_iter()
            .find(|note| note.name() == wanted)
            .ok_or_else(|| Error::UnknownNote(s.to_string()))
    }
}

/// A named mapping from the eight notes to frequencies in Hz.
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    name: String,
    frequencies: [f64; 8],
}

impl Scale {
    /// Create a scale; `frequencies` are assigned to C, D, E, F, G, A, B, C5 in order.
    pub fn new(name: impl Into<String>, frequencies: [f64; 8]) -> Self {
        Self {
            name: name.into(),
            frequencies,
        }
    }

    /// Scale name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Frequency of `note` in Hz.
    pub fn frequency(&self, note: Note) -> f64 {
        self.frequencies[note.index()]
    }

    /// All eight frequencies in note order.
    pub fn frequencies(&self) -> &[f64; 8] {
        &self.frequencies
    }

    /// `(note, frequency)` pairs in note order.
    pub fn notes(&self) -> impl Iterator<Item = (Note, f64)> + '_ {
        Note::ALL.into_iter().map(|n| (n, self.frequency(n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_major() -> Scale {
        Scale::new(
            "C Major",
            [261.63, 293.66, 329.63, 349.23, 392.0, 440.0, 493.88, 523.25],
        )
    }

    #[test]
    fn frequencies_are_positional() {
        let scale = c_major();
        assert_eq!(scale.frequency(Note::C), 261.63);
        assert_eq!(scale.frequency(Note::A), 440.0);
        assert_eq!(scale.frequency(Note::C5), 523.25);
    }

    #[test]
    fn note_names_parse() {
        assert_eq!("c5".parse::<Note>().unwrap(), Note::C5);
        assert_eq!("G".parse::<Note>().unwrap(), Note::G);
        assert!("H".parse::<Note>().is_err());
    }

    #[test]
    fn notes_iterates_in_order() {
        let names: Vec<_> = c_major().notes().map(|(n, _)| n.name()).collect();
        assert_eq!(names, NOTE_NAMES);
    }
}
