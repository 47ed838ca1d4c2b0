//! Symbol-to-tone alphabet for one scheme.

use audiocipher_core::{Envelope, Error, Result, Scheme, SchemeParams, ToneSpec};
use std::borrow::Cow;

/// Punctuation in enumeration order, with the names used for asset files.
pub const PUNCTUATION: [(char, &str); 28] = [
    ('!', "exclamation"),
    ('@', "at"),
    ('#', "hash"),
    ('$', "dollar"),
    ('%', "percent"),
    ('^', "caret"),
    ('&', "ampersand"),
    ('*', "asterisk"),
    ('(', "left_parenthesis"),
    (')', "right_parenthesis"),
    ('_', "underscore"),
    ('-', "hyphen"),
    ('+', "plus"),
    ('=', "equals"),
    ('{', "left_brace"),
    ('<', "less_than"),
    ('}', "right_brace"),
    ('>', "greater_than"),
    ('?', "question_mark"),
    ('/', "forward_slash"),
    ('\'', "single_quote"),
    ('"', "double_quote"),
    (',', "comma"),
    ('.', "period"),
    (';', "semicolon"),
    (':', "colon"),
    ('[', "left_square_bracket"),
    (']', "right_square_bracket"),
];

/// Every encodable character in enumeration order: letters, digits, punctuation.
pub fn symbol_chars() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('0'..='9')
        .chain(PUNCTUATION.iter().map(|&(c, _)| c))
}

/// File-safe name for a symbol: letters and digits as themselves,
/// punctuation by name. `None` for characters outside the alphabet.
pub fn stable_name(c: char) -> Option<Cow<'static, str>> {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_lowercase() || c.is_ascii_digit() {
        return Some(Cow::Owned(c.to_string()));
    }
    PUNCTUATION
        .iter()
        .find(|&&(p, _)| p == c)
        .map(|&(_, name)| Cow::Borrowed(name))
}

/// One alphabet entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    /// The encoded character (lowercase for letters).
    pub character: char,
    /// Tone frequency in Hz.
    pub frequency: f64,
}

impl Symbol {
    /// File-safe name of the symbol.
    pub fn name(&self) -> Cow<'static, str> {
        stable_name(self.character).unwrap_or(Cow::Borrowed("unknown"))
    }
}

/// Immutable mapping from characters to tones for one [`Scheme`].
///
/// Frequencies start at the scheme's base frequency and rise by one step per
/// symbol in enumeration order, so they are distinct and strictly increasing.
/// The gap tone sits one step below the first symbol.
///
/// # Example
///
/// ```rust
/// use audiocipher_codec::SymbolAlphabet;
/// use audiocipher_core::Scheme;
///
/// let alphabet = SymbolAlphabet::new(Scheme::Beeps);
/// assert_eq!(alphabet.frequency('a'), Some(500.0));
/// assert_eq!(alphabet.frequency('B'), Some(510.0));
/// assert_eq!(alphabet.gap_frequency(), 490.0);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolAlphabet {
    scheme: Scheme,
    params: SchemeParams,
    symbols: Vec<Symbol>,
}

impl SymbolAlphabet {
    /// Build the alphabet for `scheme`.
    pub fn new(scheme: Scheme) -> Self {
        let params = scheme.params();
        let symbols = symbol_chars()
            .enumerate()
            .map(|(i, character)| Symbol {
                character,
                frequency: params.base_frequency + params.step * i as f64,
            })
            .collect();
        Self {
            scheme,
            params,
            symbols,
        }
    }

    /// The scheme this alphabet was built for.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Scheme parameters.
    pub fn params(&self) -> &SchemeParams {
        &self.params
    }

    /// All symbols in enumeration order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// `(character, frequency)` pairs in enumeration order.
    pub fn frequencies(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.symbols.iter().map(|s| (s.character, s.frequency))
    }

    /// Case-insensitive symbol lookup.
    pub fn lookup(&self, c: char) -> Option<&Symbol> {
        let c = c.to_ascii_lowercase();
        self.symbols.iter().find(|s| s.character == c)
    }

    /// Frequency of `c`, if mapped.
    pub fn frequency(&self, c: char) -> Option<f64> {
        self.lookup(c).map(|s| s.frequency)
    }

    /// Tone descriptor for `c`.
    pub fn spec_for(&self, c: char) -> Result<ToneSpec> {
        let symbol = self.lookup(c).ok_or(Error::UnmappedSymbol(c))?;
        self.tone(symbol.frequency, self.params.symbol_ms)
    }

    /// Reserved word-gap frequency.
    pub fn gap_frequency(&self) -> f64 {
        self.params.gap_frequency()
    }

    /// Dominant frequencies below this mark a word boundary.
    pub fn gap_threshold(&self) -> f64 {
        self.params.gap_threshold()
    }

    /// Tone descriptor for the word gap.
    pub fn gap_spec(&self) -> Result<ToneSpec> {
        self.tone(self.gap_frequency(), self.params.gap_ms)
    }

    /// Symbol whose frequency is closest to `frequency`.
    ///
    /// Equidistant candidates resolve to the one earliest in enumeration order.
    pub fn nearest(&self, frequency: f64) -> Symbol {
        let mut best = self.symbols[0];
        let mut best_diff = (best.frequency - frequency).abs();
        for symbol in &self.symbols[1..] {
            let diff = (symbol.frequency - frequency).abs();
            if diff < best_diff {
                best = *symbol;
                best_diff = diff;
            }
        }
        best
    }

    fn tone(&self, frequency: f64, duration_ms: u32) -> Result<ToneSpec> {
        let spec = ToneSpec::new(self.params.waveform, frequency, duration_ms)?
            .with_amplitude(self.params.amplitude)?
            .with_envelope(Envelope::default())?;
        Ok(match self.params.modulation {
            Some(m) => spec.with_modulation(m),
            None => spec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_every_symbol() {
        let alphabet = SymbolAlphabet::new(Scheme::Beeps);
        assert_eq!(alphabet.symbols().len(), 26 + 10 + 28);
        assert_eq!(alphabet.frequency('z'), Some(750.0));
        assert_eq!(alphabet.frequency('0'), Some(760.0));
        assert_eq!(alphabet.frequency('!'), Some(860.0));
        assert_eq!(alphabet.frequency(']'), Some(1130.0));
    }

    #[test]
    fn frequencies_strictly_increase_above_gap() {
        for scheme in Scheme::ALL {
            let alphabet = SymbolAlphabet::new(scheme);
            let freqs: Vec<f64> = alphabet.frequencies().map(|(_, f)| f).collect();
            assert!(freqs.windows(2).all(|w| w[0] < w[1]), "{scheme}");
            assert!(freqs.iter().all(|&f| f > alphabet.gap_frequency()));
        }
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let alphabet = SymbolAlphabet::new(Scheme::NonHuman);
        assert_eq!(alphabet.frequency('Q'), alphabet.frequency('q'));
        assert_eq!(alphabet.frequency('a'), Some(20900.0));
    }

    #[test]
    fn unmapped_symbol_is_an_error() {
        let alphabet = SymbolAlphabet::new(Scheme::Beeps);
        assert_eq!(alphabet.spec_for('~'), Err(Error::UnmappedSymbol('~')));
        assert_eq!(alphabet.spec_for('é'), Err(Error::UnmappedSymbol('é')));
    }

    #[test]
    fn spec_carries_scheme_parameters() {
        let spec = SymbolAlphabet::new(Scheme::Modulated).spec_for('c').unwrap();
        assert_eq!(spec.frequency(), 520.0);
        assert_eq!(spec.duration_ms(), 100);
        assert_eq!(spec.amplitude(), 0.4);
        assert!(spec.modulation().is_some());

        let gap = SymbolAlphabet::new(Scheme::Beeps).gap_spec().unwrap();
        assert_eq!(gap.frequency(), 490.0);
        assert_eq!(gap.duration_ms(), 200);
        assert!(gap.modulation().is_none());
    }

    #[test]
    fn stable_names() {
        assert_eq!(stable_name('A').as_deref(), Some("a"));
        assert_eq!(stable_name('7').as_deref(), Some("7"));
        assert_eq!(stable_name('?').as_deref(), Some("question_mark"));
        assert_eq!(stable_name('"').as_deref(), Some("double_quote"));
        assert_eq!(stable_name('~'), None);
    }

    #[test]
    fn stable_names_are_unique() {
        let mut names: Vec<_> = symbol_chars().filter_map(stable_name).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn nearest_breaks_ties_by_enumeration_order() {
        let alphabet = SymbolAlphabet::new(Scheme::Beeps);
        // 505 Hz is equidistant from 'a' (500) and 'b' (510)
        for _ in 0..10 {
            assert_eq!(alphabet.nearest(505.0).character, 'a');
        }
        assert_eq!(alphabet.nearest(506.0).character, 'b');
        assert_eq!(alphabet.nearest(9000.0).character, ']');
    }
}
