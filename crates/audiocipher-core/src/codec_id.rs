//! Codec identity carried by encoded buffers.

use crate::Scheme;
use std::fmt;

/// Identity of the codec that produced (or is expected to consume) a buffer.
///
/// The alphabet codec is parameterized by its [`Scheme`]; decoding with a
/// different scheme produces garbage, so the scheme is part of the identity.
/// The Morse codec decodes on tone timing alone and is independent of the
/// scale used to render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecId {
    /// Frequency-identity alphabet codec under one scheme.
    Alphabet(Scheme),
    /// Morse-duration codec.
    Morse,
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecId::Alphabet(scheme) => write!(f, "alphabet:{}", scheme.name()),
            CodecId::Morse => f.write_str("morse"),
        }
    }
}
