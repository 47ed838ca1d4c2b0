//! Inspect command: per-window decoder readings.

use super::common::Context;
use audiocipher_codec::{Classification, SpectralDecoder};
use audiocipher_core::Scheme;
use audiocipher_io::read_wav;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    /// WAV file to inspect
    file: PathBuf,

    /// Alphabet scheme used for classification
    #[arg(short, long)]
    scheme: Option<Scheme>,
}

pub fn run(args: InspectArgs, ctx: &Context) -> anyhow::Result<()> {
    let scheme = ctx.scheme(args.scheme)?;
    let audio = read_wav(&args.file)?;
    let decoder = SpectralDecoder::new(scheme);
    let readings = decoder.readings(&audio)?;

    println!("File: {}", args.file.display());
    println!(
        "Scheme: {} (gap threshold {:.0} Hz)",
        scheme,
        decoder.alphabet().gap_threshold()
    );
    println!(
        "Windows: {} x {} samples",
        readings.len(),
        decoder.window_len()
    );
    println!();
    println!("{:>6}  {:>8}  {:>10}  Reading", "Window", "Time", "Frequency");

    let sample_rate = f64::from(audio.sample_rate());
    for (i, reading) in readings.iter().enumerate() {
        let class = match reading.class {
            Classification::Boundary => "(gap)".to_string(),
            Classification::Symbol(c) => format!("{c:?}"),
        };
        println!(
            "{:>6}  {:>7.2}s  {:>7.1} Hz  {}",
            i,
            reading.start as f64 / sample_rate,
            reading.frequency,
            class
        );
    }
    Ok(())
}
