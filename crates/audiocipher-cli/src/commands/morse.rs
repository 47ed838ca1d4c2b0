//! Morse commands: melody encode and decode.

use super::common::{self, Context};
use audiocipher_codec::morse::{MorseDecoder, MorseEncoder, to_morse};
use audiocipher_io::{read_wav, write_wav};
use clap::{Args, Subcommand};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use std::path::PathBuf;

#[derive(Args)]
pub struct MorseArgs {
    #[command(subcommand)]
    command: MorseCommand,
}

#[derive(Subcommand)]
enum MorseCommand {
    /// Render text as a Morse melody
    Encode(EncodeArgs),

    /// Decode a Morse melody recording
    Decode(DecodeArgs),
}

#[derive(Args)]
struct EncodeArgs {
    /// Text to encode (words are joined with spaces)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read the text from a file instead
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Scale to pick notes from
    #[arg(long)]
    scale: Option<String>,

    /// Scale table file
    #[arg(long, value_name = "PATH")]
    scales_file: Option<PathBuf>,

    /// Seed for note selection (reproducible output)
    #[arg(long)]
    seed: Option<u64>,

    /// Output WAV file
    #[arg(short, long)]
    output: PathBuf,

    /// Play the result after writing it
    #[arg(long)]
    play: bool,
}

#[derive(Args)]
struct DecodeArgs {
    /// WAV file to decode
    file: PathBuf,

    /// Also print the recovered dot/dash code
    #[arg(long)]
    code: bool,
}

pub fn run(args: MorseArgs, ctx: &Context) -> anyhow::Result<()> {
    match args.command {
        MorseCommand::Encode(args) => encode(args, ctx),
        MorseCommand::Decode(args) => decode(args),
    }
}

fn encode(args: EncodeArgs, ctx: &Context) -> anyhow::Result<()> {
    let text = common::read_text(&args.text, args.file.as_deref())?;
    // Morse words split on single spaces only.
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let table = ctx.settings.scale_table(args.scales_file.as_deref())?;
    let scale_name = args.scale.as_deref().unwrap_or(&ctx.settings.default_scale);
    let scale = table.get(scale_name)?.clone();

    println!("Morse: {}", to_morse(&text));

    let encoder = MorseEncoder::new(scale);
    let audio = match args.seed {
        Some(seed) => encoder.encode_with_rng(&text, &mut Pcg32::seed_from_u64(seed))?,
        None => encoder.encode(&text)?,
    };

    write_wav(&args.output, &audio)?;
    println!(
        "Wrote {} ({:.1}s, scale {})",
        args.output.display(),
        audio.duration_secs(),
        encoder.scale().name()
    );

    if args.play {
        common::play(audio)?;
    }
    Ok(())
}

fn decode(args: DecodeArgs) -> anyhow::Result<()> {
    let audio = read_wav(&args.file)?;
    let decoder = MorseDecoder::new();
    if args.code {
        println!("{}", decoder.to_morse(&audio)?.trim_end());
    }
    println!("{}", decoder.decode(&audio)?);
    Ok(())
}
