//! cpal-based playback sink.
//!
//! Plays a loaded buffer on the default (or a named) output device through
//! [cpal](https://crates.io/crates/cpal): ALSA on Linux, CoreAudio on macOS,
//! WASAPI on Windows.
//!
//! ```rust,ignore
//! use audiocipher_io::{AudioSink, CpalSink};
//!
//! let mut sink = CpalSink::new();
//! sink.load(audio)?;
//! sink.play()?;
//! while sink.is_busy() {
//!     std::thread::sleep(std::time::Duration::from_millis(20));
//! }
//! ```

use crate::{AudioSink, Error, Result};
use audiocipher_core::AudioBuffer;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Output sink on a cpal device.
///
/// The buffer is played mono, duplicated to every device channel. The
/// stream is dropped on [`stop`](AudioSink::stop) or when the sink is
/// dropped.
pub struct CpalSink {
    host: cpal::Host,
    device_name: Option<String>,
    samples: Arc<Vec<f32>>,
    sample_rate: u32,
    position: Arc<AtomicUsize>,
    stream: Option<cpal::Stream>,
}

impl CpalSink {
    /// Sink on the default output device.
    pub fn new() -> Self {
        tracing::info!(
            host = cpal::default_host().id().name(),
            "cpal playback initialized"
        );
        Self {
            host: cpal::default_host(),
            device_name: None,
            samples: Arc::new(Vec::new()),
            sample_rate: audiocipher_core::SAMPLE_RATE,
            position: Arc::new(AtomicUsize::new(0)),
            stream: None,
        }
    }

    /// Use the first output device whose name contains `name` (case-insensitive).
    pub fn with_device(mut self, name: impl Into<String>) -> Self {
        self.device_name = Some(name.into());
        self
    }

    fn find_output_device(&self) -> Result<cpal::Device> {
        match &self.device_name {
            Some(search) => {
                let search_lower = search.to_lowercase();
                let devices = self
                    .host
                    .output_devices()
                    .map_err(|e| Error::Stream(e.to_string()))?;

                for device in devices {
                    if let Ok(desc) = device.description()
                        && desc.name().to_lowercase().contains(&search_lower)
                    {
                        return Ok(device);
                    }
                }
                Err(Error::Stream(format!("no output device matching '{search}'")))
            }
            None => self.host.default_output_device().ok_or(Error::NoDevice),
        }
    }
}

impl Default for CpalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CpalSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpalSink")
            .field("device_name", &self.device_name)
            .field("samples", &self.samples.len())
            .field("playing", &self.stream.is_some())
            .finish_non_exhaustive()
    }
}

impl AudioSink for CpalSink {
    fn load(&mut self, buffer: AudioBuffer) -> Result<()> {
        self.stop();
        self.sample_rate = buffer.sample_rate();
        self.samples = Arc::new(buffer.to_f32());
        self.position = Arc::new(AtomicUsize::new(0));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        if self.samples.is_empty() {
            return Err(Error::NothingLoaded);
        }
        self.stream = None;
        self.position.store(0, Ordering::SeqCst);

        let device = self.find_output_device()?;
        let channels = device
            .default_output_config()
            .map_err(|e| Error::Stream(e.to_string()))?
            .channels();

        let stream_config = cpal::StreamConfig {
            channels,
            sample_rate: self.sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let samples = Arc::clone(&self.samples);
        let position = Arc::clone(&self.position);
        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    for frame in data.chunks_mut(usize::from(channels)) {
                        let i = position.fetch_add(1, Ordering::Relaxed);
                        frame.fill(samples.get(i).copied().unwrap_or(0.0));
                    }
                },
                move |err| {
                    tracing::error!(%err, "output stream error");
                },
                None,
            )
            .map_err(|e| Error::Stream(e.to_string()))?;

        stream.play().map_err(|e| Error::Stream(e.to_string()))?;
        tracing::info!(
            channels,
            sample_rate = self.sample_rate,
            samples = self.samples.len(),
            "playback started"
        );
        self.stream = Some(stream);
        Ok(())
    }

    fn stop(&mut self) {
        if self.stream.take().is_some() {
            tracing::debug!("playback stopped");
        }
        self.position.store(self.samples.len(), Ordering::SeqCst);
    }

    fn is_busy(&self) -> bool {
        self.stream.is_some() && self.position.load(Ordering::Relaxed) < self.samples.len()
    }
}
