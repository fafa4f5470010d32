//! CLI definitions for rcsetup
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Parser, Subcommand};

/// Version string: adds the git commit on dev builds.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string for official releases.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "rcsetup")]
#[command(about = "Install or update CLI configuration files in your shell")]
#[command(
    long_about = "rcsetup - wire a command-line tool into bash or zsh.

rcsetup copies the tool's shell integration script into its per-user
directory and adds two lines to your shell startup file: one that puts the
tool's bin directory on PATH and one that loads the integration script.
Running it again is safe; an already configured file is left untouched.

QUICK START:
    rcsetup self:install           Set up the shell (asks before editing)
    rcsetup self:install --yes     Set up the shell without asking"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Configuration file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "Config file (default: $RCSETUP_CONFIG or ~/.config/rcsetup/config.toml)"
    )]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Install or update CLI configuration files
    #[command(name = "self:install", alias = "local:install")]
    #[command(
        long_about = "Install or update CLI configuration files.

This command installs shell configuration for the CLI, adding
autocompletion support and handy aliases. Bash and ZSH are supported.

The startup file is picked in this order:
    <APP_DIR>/.environment      on managed hosting, when APP_DIR is your home
    ~/.zprofile, ~/.zshrc       when your login shell is zsh
    ~/.bash_profile, ~/.bashrc

The original file is copied to <file>.cli.bak before it is changed.

EXAMPLES:
    rcsetup self:install
    rcsetup self:install --yes
    rcsetup --config ./tool.toml self:install"
    )]
    SelfInstall {
        /// Update the startup file without asking
        #[arg(long, short, help = "Update the startup file without asking")]
        yes: bool,
    },
}
