//! Audio I/O for audiocipher.
//!
//! This crate provides:
//!
//! - **WAV file I/O**: [`read_wav`] and [`write_wav`] for 16-bit mono buffers
//! - **Tone assets**: [`export_assets`] and [`load_tone_bank`] for per-symbol
//!   WAV files
//! - **Playback**: the [`AudioSink`] trait, an in-memory [`MemorySink`], and
//!   `CpalSink` behind the `cpal-backend` feature
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use audiocipher_codec::encode;
//! use audiocipher_core::Scheme;
//! use audiocipher_io::{read_wav, write_wav};
//!
//! let audio = encode("hello", Scheme::Beeps)?;
//! write_wav("hello.wav", &audio)?;
//! let loaded = read_wav("hello.wav")?;
//! assert_eq!(loaded.samples(), audio.samples());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod assets;
mod sink;
mod wav;

#[cfg(feature = "cpal-backend")]
pub mod cpal_backend;

pub use assets::{
    GAP_ASSET, SILENCE_ASSET, asset_dir, asset_path, export_assets, export_bank, load_tone_bank,
};
pub use sink::{AudioSink, MemorySink};
pub use wav::{read_wav, write_wav};

#[cfg(feature = "cpal-backend")]
pub use cpal_backend::CpalSink;

use std::path::PathBuf;

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file's sample format cannot be represented.
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// A tone asset file is missing.
    #[error("Missing tone asset: {}", .0.display())]
    AssetMissing(PathBuf),

    /// A tone asset file has the wrong sample rate or length.
    #[error("Bad tone asset {}: {reason}", path.display())]
    AssetFormat {
        /// The offending file.
        path: PathBuf,
        /// What did not match.
        reason: String,
    },

    /// Tone construction or codec error.
    #[error(transparent)]
    Codec(#[from] audiocipher_core::Error),

    /// A sink was asked to play before anything was loaded.
    #[error("No audio loaded")]
    NothingLoaded,

    /// Audio stream setup or runtime error.
    #[error("Audio stream error: {0}")]
    Stream(String),

    /// No audio device available on the system.
    #[error("No audio device available")]
    NoDevice,
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
