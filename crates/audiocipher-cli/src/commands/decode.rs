//! Decode command: alphabet tone WAV to text.

use super::common::Context;
use audiocipher_codec::SpectralDecoder;
use audiocipher_core::Scheme;
use audiocipher_io::read_wav;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct DecodeArgs {
    /// WAV file to decode
    file: PathBuf,

    /// Alphabet scheme the file was encoded with
    #[arg(short, long)]
    scheme: Option<Scheme>,
}

pub fn run(args: DecodeArgs, ctx: &Context) -> anyhow::Result<()> {
    let scheme = ctx.scheme(args.scheme)?;
    let audio = read_wav(&args.file)?;
    let text = SpectralDecoder::new(scheme).decode(&audio)?;
    println!("{text}");
    Ok(())
}
