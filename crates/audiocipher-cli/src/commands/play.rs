//! Play command.

use super::common;
use audiocipher_io::read_wav;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct PlayArgs {
    /// WAV file to play
    file: PathBuf,
}

pub fn run(args: PlayArgs) -> anyhow::Result<()> {
    let audio = read_wav(&args.file)?;
    common::play(audio)
}
