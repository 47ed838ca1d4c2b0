//! Assets command: export per-symbol tone WAVs.

use super::common::Context;
use audiocipher_codec::{SymbolAlphabet, ToneBank};
use audiocipher_core::Scheme;
use audiocipher_io::{asset_dir, export_bank};
use audiocipher_synth::ToneSynthesizer;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Args)]
pub struct AssetsArgs {
    /// Root directory (one subdirectory per scheme)
    dir: Option<PathBuf>,

    /// Export only this scheme (all schemes when omitted)
    #[arg(short, long)]
    scheme: Option<Scheme>,
}

pub fn run(args: AssetsArgs, ctx: &Context) -> anyhow::Result<()> {
    let Some(root) = args.dir.or_else(|| ctx.settings.assets_dir.clone()) else {
        anyhow::bail!("no asset directory given (pass DIR or set assets_dir)");
    };
    let schemes: Vec<Scheme> = match args.scheme {
        Some(scheme) => vec![scheme],
        None => Scheme::ALL.to_vec(),
    };

    let synth = ToneSynthesizer::default();
    let banks = schemes
        .iter()
        .map(|&scheme| ToneBank::synthesize(&SymbolAlphabet::new(scheme), &synth))
        .collect::<Result<Vec<_>, _>>()?;

    let total: usize = banks.iter().map(|b| b.len() + 2).sum();
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("##-"),
    );

    for bank in &banks {
        pb.set_message(bank.scheme().name());
        export_bank(&root, bank, |_| pb.inc(1))?;
    }
    pb.finish_with_message("done");

    for bank in &banks {
        println!("{}", asset_dir(&root, bank.scheme()).display());
    }
    Ok(())
}
