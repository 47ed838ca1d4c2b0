//! Shared CLI helpers used across multiple commands.

use anyhow::Context as _;
use audiocipher_config::{Settings, config_file_path};
use audiocipher_core::{AudioBuffer, Scheme};
use audiocipher_io::AudioSink;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

/// Settings and where they came from.
pub struct Context {
    pub settings: Settings,
    pub config_path: PathBuf,
}

impl Context {
    /// Load settings from `explicit`, or the user config file.
    ///
    /// A missing file yields defaults.
    pub fn load(explicit: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = explicit.unwrap_or_else(config_file_path);
        let settings = Settings::load_or_default(&config_path)?;
        debug!(path = %config_path.display(), "settings loaded");
        Ok(Self {
            settings,
            config_path,
        })
    }

    /// `arg` if given, else the configured default scheme.
    pub fn scheme(&self, arg: Option<Scheme>) -> anyhow::Result<Scheme> {
        match arg {
            Some(scheme) => Ok(scheme),
            None => self.settings.scheme().with_context(|| {
                format!(
                    "bad default_scheme in {}",
                    self.config_path.display()
                )
            }),
        }
    }
}

/// Text from positional words or a file.
pub fn read_text(words: &[String], file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None if words.is_empty() => anyhow::bail!("no text given (pass TEXT or --file)"),
        None => Ok(words.join(" ")),
    }
}

/// Play `buffer` through `sink`, polling until it finishes or `stop` is set.
pub fn play_through(
    sink: &mut dyn AudioSink,
    buffer: AudioBuffer,
    stop: &AtomicBool,
) -> anyhow::Result<()> {
    sink.load(buffer)?;
    sink.play()?;
    while sink.is_busy() {
        if stop.load(Ordering::SeqCst) {
            sink.stop();
            break;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    Ok(())
}

/// Play `buffer` on the default output device. Ctrl+C stops playback.
#[cfg(feature = "playback")]
pub fn play(buffer: AudioBuffer) -> anyhow::Result<()> {
    use audiocipher_io::CpalSink;
    use std::sync::Arc;

    let stop = Arc::new(AtomicBool::new(false));
    let s = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        s.store(true, Ordering::SeqCst);
    })?;

    println!(
        "Playing {:.1}s... Press Ctrl+C to stop.",
        buffer.duration_secs()
    );
    let mut sink = CpalSink::new();
    play_through(&mut sink, buffer, &stop)
}

/// Playback is unavailable without the `playback` feature.
#[cfg(not(feature = "playback"))]
pub fn play(_buffer: AudioBuffer) -> anyhow::Result<()> {
    anyhow::bail!("playback is not available in this build (rebuild with --features playback)")
}
