//! WAV file reading and writing.

use crate::{Error, Result};
use audiocipher_core::AudioBuffer;
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Read a WAV file as a 16-bit mono buffer.
///
/// Integer files of any depth are rescaled to 16 bits and float files are
/// quantized. Multi-channel files are mixed down to mono by averaging
/// channels. The sample rate is kept as found; decoders check it.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<AudioBuffer> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<Vec<_>, _>>()?,
        SampleFormat::Int => {
            let bits = spec.bits_per_sample;
            if bits == 0 || bits > 32 {
                return Err(Error::UnsupportedFormat(format!("{bits}-bit integer PCM")));
            }
            let max_val = f64::from(1u32 << (bits - 1));
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / max_val))
                .collect::<std::result::Result<Vec<_>, _>>()?
        }
    };

    let mono: Vec<i16> = if channels > 1 {
        samples
            .chunks(channels)
            .map(|frame| AudioBuffer::quantize(frame.iter().sum::<f64>() / channels as f64))
            .collect()
    } else if spec.sample_format == SampleFormat::Int && spec.bits_per_sample == 16 {
        samples.iter().map(|&s| (s * 32768.0).round() as i16).collect()
    } else {
        samples.into_iter().map(AudioBuffer::quantize).collect()
    };

    Ok(AudioBuffer::from_samples(mono, spec.sample_rate))
}

/// Write a buffer as 16-bit mono PCM.
pub fn write_wav<P: AsRef<Path>>(path: P, buffer: &AudioBuffer) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in buffer.samples() {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;
    Ok(())
}
