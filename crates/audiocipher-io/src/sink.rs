//! Playback sinks.

use crate::{Error, Result};
use audiocipher_core::AudioBuffer;

/// Something that can play a loaded buffer.
///
/// Playback is started with [`play`](Self::play) and never awaited; callers
/// poll [`is_busy`](Self::is_busy) until it reports `false`.
pub trait AudioSink {
    /// Replace the loaded buffer. Stops anything currently playing.
    fn load(&mut self, buffer: AudioBuffer) -> Result<()>;

    /// Start playing the loaded buffer from the beginning.
    fn play(&mut self) -> Result<()>;

    /// Stop playback.
    fn stop(&mut self);

    /// Whether playback is in progress.
    fn is_busy(&self) -> bool;
}

/// Sink that records what it was asked to play.
///
/// Playback completes instantly, so the sink is never busy after `play`
/// returns.
#[derive(Debug, Default)]
pub struct MemorySink {
    loaded: Option<AudioBuffer>,
    played: Vec<AudioBuffer>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every buffer played so far, in order.
    pub fn played(&self) -> &[AudioBuffer] {
        &self.played
    }

    /// The currently loaded buffer.
    pub fn loaded(&self) -> Option<&AudioBuffer> {
        self.loaded.as_ref()
    }
}

impl AudioSink for MemorySink {
    fn load(&mut self, buffer: AudioBuffer) -> Result<()> {
        self.loaded = Some(buffer);
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        let buffer = self.loaded.clone().ok_or(Error::NothingLoaded)?;
        self.played.push(buffer);
        Ok(())
    }

    fn stop(&mut self) {}

    fn is_busy(&self) -> bool {
        false
    }
}
