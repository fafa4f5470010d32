//! rcsetup - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use rcsetup::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    rcsetup::logging::init(cli.verbose);

    let code = match cli.command {
        Commands::SelfInstall { yes } => {
            commands::install::handle_install(cli.config.as_deref(), yes)?
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
