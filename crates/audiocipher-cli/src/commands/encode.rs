//! Encode command: text to alphabet tone WAV.

use super::common::{self, Context};
use audiocipher_codec::{Encoder, SpectralDecoder};
use audiocipher_core::Scheme;
use audiocipher_io::{load_tone_bank, write_wav};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct EncodeArgs {
    /// Text to encode (words are joined with spaces)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Alphabet scheme (modulated, beeps, non_human)
    #[arg(short, long)]
    scheme: Option<Scheme>,

    /// Encode from exported tone assets under DIR
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Decode the result and check it matches the input
    #[arg(long)]
    verify: bool,

    /// Play the result after writing it
    #[arg(long)]
    play: bool,
}

pub fn run(args: EncodeArgs, ctx: &Context) -> anyhow::Result<()> {
    let text = common::read_text(&args.text, args.file.as_deref())?;
    let scheme = ctx.scheme(args.scheme)?;

    let encoder = match args.assets.or_else(|| ctx.settings.assets_dir.clone()) {
        Some(dir) => Encoder::with_bank(load_tone_bank(&dir, scheme)?),
        None => Encoder::new(scheme)?,
    };

    let audio = encoder.encode(&text);
    write_wav(&args.output, &audio)?;
    println!(
        "Wrote {} ({:.1}s, scheme {})",
        args.output.display(),
        audio.duration_secs(),
        scheme
    );

    if args.verify {
        let decoded = SpectralDecoder::new(scheme).decode(&audio)?;
        let expected = expected_text(&text, &encoder);
        if decoded.trim() != expected {
            anyhow::bail!("verification failed: expected {expected:?}, decoded {decoded:?}");
        }
        println!("Verified: {decoded}");
    }

    if args.play {
        common::play(audio)?;
    }

    Ok(())
}

/// What a clean decode of `text` should produce: mapped characters only,
/// lowercased, one space between the words that keep any.
fn expected_text(text: &str, encoder: &Encoder) -> String {
    let bank = encoder.bank();
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| c.to_ascii_lowercase())
                .filter(|c| bank.tone(*c).is_some())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
