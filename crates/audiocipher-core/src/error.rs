//! Error types shared by the codec crates.

use crate::CodecId;
use thiserror::Error;

/// Errors raised by tone construction, alphabet lookup and decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The requested scheme name does not exist.
    #[error("unknown scheme: {0}")]
    UnknownScheme(String),

    /// The requested waveform shape is not one of sine, triangle, square, sawtooth.
    #[error("unsupported waveform: {0}")]
    UnsupportedWaveform(String),

    /// The symbol has no tone in the active alphabet.
    #[error("no tone mapped for symbol {0:?}")]
    UnmappedSymbol(char),

    /// The note name is not one of C, D, E, F, G, A, B, C5.
    #[error("unknown note: {0}")]
    UnknownNote(String),

    /// A tone descriptor was built with out-of-range parameters.
    #[error("invalid tone: {0}")]
    InvalidTone(String),

    /// A buffer produced by one codec was handed to another codec's decoder.
    #[error("codec mismatch: decoder is {expected}, buffer was encoded with {found}")]
    CodecMismatch {
        /// Identity of the decoder.
        expected: CodecId,
        /// Identity recorded on the buffer.
        found: CodecId,
    },

    /// The buffer's sample rate differs from the one the decoder was built for.
    #[error("sample rate mismatch: expected {expected} Hz, got {found} Hz")]
    SampleRateMismatch {
        /// Rate the decoder analyzes at.
        expected: u32,
        /// Rate of the buffer.
        found: u32,
    },
}

/// Convenience result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;
