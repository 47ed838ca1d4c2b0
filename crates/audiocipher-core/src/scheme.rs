//! Named alphabet schemes.
//!
//! A scheme fixes every parameter of one symbol-to-tone alphabet: where the
//! symbol frequencies start, how far apart they are, the waveform, whether
//! tones are amplitude-modulated, and the timing of symbol and gap tones.

use crate::{Error, Modulation, Result, Waveform};
use std::fmt;
use std::str::FromStr;

/// The three built-in schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// Plain audible sine beeps starting at 500 Hz.
    Beeps,
    /// Sine tones starting at 20.9 kHz, at the edge of human hearing.
    NonHuman,
    /// Audible beeps with 5 Hz amplitude modulation.
    Modulated,
}

/// Immutable parameter set for one scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeParams {
    /// Stable lowercase name, also the asset subdirectory.
    pub name: &'static str,
    /// Frequency of the first symbol (`a`), in Hz.
    pub base_frequency: f64,
    /// Frequency increment between consecutive symbols, in Hz.
    pub step: f64,
    /// Waveform for every tone.
    pub waveform: Waveform,
    /// Modulation applied to every tone, if any.
    pub modulation: Option<Modulation>,
    /// Peak amplitude for every tone.
    pub amplitude: f64,
    /// Duration of one symbol tone, in milliseconds.
    pub symbol_ms: u32,
    /// Duration of the word-gap tone, in milliseconds.
    pub gap_ms: u32,
    /// Duration of the silence asset, in milliseconds.
    pub silence_ms: u32,
}

impl SchemeParams {
    /// Reserved frequency of the gap tone, one step below the first symbol.
    pub fn gap_frequency(&self) -> f64 {
        self.base_frequency - self.step
    }

    /// Windows whose dominant frequency falls below this are word boundaries.
    ///
    /// Sits halfway between the gap tone and the first symbol.
    pub fn gap_threshold(&self) -> f64 {
        self.gap_frequency() + self.step / 2.0
    }
}

const BEEPS: SchemeParams = SchemeParams {
    name: "beeps",
    base_frequency: 500.0,
    step: 10.0,
    waveform: Waveform::Sine,
    modulation: None,
    amplitude: 0.4,
    symbol_ms: 100,
    gap_ms: 200,
    silence_ms: 200,
};

const NON_HUMAN: SchemeParams = SchemeParams {
    name: "non_human",
    base_frequency: 20900.0,
    ..BEEPS
};

const MODULATED: SchemeParams = SchemeParams {
    name: "modulated",
    modulation: Some(Modulation {
        frequency: 5.0,
        depth: 7.0,
    }),
    ..BEEPS
};

impl Scheme {
    /// All schemes in listing order.
    pub const ALL: [Scheme; 3] = [Scheme::Modulated, Scheme::Beeps, Scheme::NonHuman];

    /// Parameters for this scheme.
    pub fn params(&self) -> SchemeParams {
        match self {
            Scheme::Beeps => BEEPS,
            Scheme::NonHuman => NON_HUMAN,
            Scheme::Modulated => MODULATED,
        }
    }

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        self.params().name
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Scheme::ALL
            .into_iter()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| Error::UnknownScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.name().parse::<Scheme>().unwrap(), scheme);
        }
        assert_eq!("Non-Human".parse::<Scheme>().unwrap(), Scheme::NonHuman);
    }

    #[test]
    fn unknown_scheme_is_an_error() {
        assert_eq!(
            "whistle".parse::<Scheme>().unwrap_err(),
            Error::UnknownScheme("whistle".to_string())
        );
    }

    #[test]
    fn gap_threshold_sits_between_gap_and_first_symbol() {
        for scheme in Scheme::ALL {
            let p = scheme.params();
            assert!(p.gap_frequency() < p.gap_threshold());
            assert!(p.gap_threshold() < p.base_frequency);
        }
        assert_eq!(Scheme::Beeps.params().gap_threshold(), 495.0);
        assert_eq!(Scheme::NonHuman.params().gap_threshold(), 20895.0);
    }

    #[test]
    fn only_modulated_scheme_modulates() {
        assert!(Scheme::Modulated.params().modulation.is_some());
        assert!(Scheme::Beeps.params().modulation.is_none());
        assert!(Scheme::NonHuman.params().modulation.is_none());
    }
}
