//! Config commands: show and initialize settings.

use super::common::Context;
use audiocipher_config::Settings;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective settings
    Show,

    /// Write the default settings file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, ctx: &Context) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            println!("# {}", ctx.config_path.display());
            print!("{}", ctx.settings.to_toml()?);
        }
        ConfigCommand::Init { force } => {
            if ctx.config_path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    ctx.config_path.display()
                );
            }
            Settings::default().save(&ctx.config_path)?;
            println!("Wrote {}", ctx.config_path.display());
        }
    }
    Ok(())
}
