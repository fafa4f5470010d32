//! `self:install` handler

use std::io;
use std::path::Path;

use anyhow::Result;

use rcsetup::prompt::{AutoConfirm, Confirm, TerminalPrompt};
use rcsetup::shell::SystemEnv;
use rcsetup::theme::{current_theme, Theme};
use rcsetup::{Config, InstallOutcome, Installer};

/// Load the configuration from `--config` or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Install shell configuration for the current user.
///
/// Status lines go to stderr. Returns the process exit code.
#[cfg(not(tarpaulin_include))]
pub fn handle_install(config_path: Option<&Path>, yes: bool) -> Result<i32> {
    let config = load_config(config_path)?;
    let theme = current_theme();

    let outcome = if yes {
        run(&config, AutoConfirm, theme)
    } else {
        let prompt = TerminalPrompt::new(theme.clone());
        run(&config, prompt, theme)
    };

    Ok(outcome.exit_code())
}

fn run<C: Confirm>(config: &Config, confirm: C, theme: Theme) -> InstallOutcome {
    let env = SystemEnv;
    let stderr = io::stderr();
    Installer::new(config, &env, confirm, stderr.lock())
        .with_theme(theme)
        .run()
}
