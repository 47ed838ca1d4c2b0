//! Scales command.

use super::common::Context;
use audiocipher_core::NOTE_NAMES;
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ScalesArgs {
    /// Scale table file
    #[arg(long, value_name = "PATH")]
    scales_file: Option<PathBuf>,
}

pub fn run(args: ScalesArgs, ctx: &Context) -> anyhow::Result<()> {
    let table = ctx.settings.scale_table(args.scales_file.as_deref())?;

    print!("{:<16}", "Scale");
    for name in NOTE_NAMES {
        print!("  {name:>7}");
    }
    println!();

    for scale in table.iter() {
        print!("{:<16}", scale.name());
        for f in scale.frequencies() {
            print!("  {f:>7.2}");
        }
        println!();
    }
    Ok(())
}
