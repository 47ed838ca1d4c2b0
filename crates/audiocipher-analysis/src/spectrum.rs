//! Spectral analysis utilities

use crate::fft::{Fft, Window};

/// Reusable magnitude-spectrum analyzer for fixed-size frames.
///
/// Frames shorter than the FFT size are zero-padded, so bin spacing is always
/// `sample_rate / fft_size` regardless of the frame length.
#[derive(Debug)]
pub struct SpectrumAnalyzer {
    fft: Fft,
    window: Window,
    sample_rate: f32,
}

impl SpectrumAnalyzer {
    /// Create an analyzer for frames of `fft_size` samples.
    pub fn new(sample_rate: f32, fft_size: usize, window: Window) -> Self {
        Self {
            fft: Fft::new(fft_size),
            window,
            sample_rate,
        }
    }

    /// FFT size in samples.
    pub fn fft_size(&self) -> usize {
        self.fft.size()
    }

    /// Frequency spacing between bins, in Hz.
    pub fn bin_width(&self) -> f32 {
        self.sample_rate / self.fft.size() as f32
    }

    /// Centre frequency of `bin`, in Hz.
    pub fn bin_frequency(&self, bin: usize) -> f32 {
        bin as f32 * self.bin_width()
    }

    /// Magnitude of each bin from DC to Nyquist.
    pub fn magnitudes(&self, frame: &[f32]) -> Vec<f32> {
        let mut windowed: Vec<f32> = frame.iter().take(self.fft.size()).copied().collect();
        windowed.resize(self.fft.size(), 0.0);
        self.window.apply(&mut windowed);

        let spectrum = self.fft.forward(&windowed);
        spectrum.iter().map(|c| c.norm()).collect()
    }

    /// Index of the largest-magnitude bin. Ties resolve to the lowest bin.
    pub fn dominant_bin(&self, frame: &[f32]) -> usize {
        let magnitudes = self.magnitudes(frame);
        let mut best = 0;
        for (i, &mag) in magnitudes.iter().enumerate().skip(1) {
            if mag > magnitudes[best] {
                best = i;
            }
        }
        best
    }

    /// Frequency of the largest-magnitude bin, in Hz.
    ///
    /// A silent frame reports 0 Hz (the DC bin wins every tie).
    pub fn dominant_frequency(&self, frame: &[f32]) -> f32 {
        self.bin_frequency(self.dominant_bin(frame))
    }
}
