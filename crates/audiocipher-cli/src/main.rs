//! Audiocipher CLI - encode text as tones and decode it back.

mod commands;

use clap::{Parser, Subcommand};
use commands::common::Context;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "audiocipher")]
#[command(author, version, about = "Encode text as tone sequences and decode it back", long_about = None)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode text as an alphabet tone sequence
    Encode(commands::encode::EncodeArgs),

    /// Decode an alphabet tone recording
    Decode(commands::decode::DecodeArgs),

    /// Show the dominant frequency and reading of every window
    Inspect(commands::inspect::InspectArgs),

    /// Morse melody encode and decode
    Morse(commands::morse::MorseArgs),

    /// List alphabet schemes
    Schemes,

    /// List musical scales
    Scales(commands::scales::ScalesArgs),

    /// Export per-symbol tone assets
    Assets(commands::assets::AssetsArgs),

    /// Play a WAV file
    Play(commands::play::PlayArgs),

    /// Show or initialize settings
    Config(commands::config::ConfigArgs),
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::load(cli.config)?;

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, &ctx),
        Commands::Decode(args) => commands::decode::run(args, &ctx),
        Commands::Inspect(args) => commands::inspect::run(args, &ctx),
        Commands::Morse(args) => commands::morse::run(args, &ctx),
        Commands::Schemes => commands::schemes::run(),
        Commands::Scales(args) => commands::scales::run(args, &ctx),
        Commands::Assets(args) => commands::assets::run(args, &ctx),
        Commands::Play(args) => commands::play::run(args),
        Commands::Config(args) => commands::config::run(args, &ctx),
    }
}
