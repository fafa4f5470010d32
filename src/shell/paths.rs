//! Path detection for shell integration
//!
//! This module picks the startup file to amend and names the files the
//! installer deploys inside the user config directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::env::ShellEnv;
use crate::error::InstallError;

/// File name of the deployed managed resource.
pub const MANAGED_RESOURCE_NAME: &str = "shell-config.rc";

/// Startup file used on managed hosting, relative to the app directory.
pub const HOSTING_ENVIRONMENT_FILE: &str = ".environment";

/// Candidates for every POSIX shell, in priority order.
const BASH_CANDIDATES: [&str; 2] = [".bash_profile", ".bashrc"];

/// Candidates tried ahead of the bash ones when the login shell is zsh.
const ZSH_CANDIDATES: [&str; 2] = [".zprofile", ".zshrc"];

/// Locate the single startup file that should carry the tool's snippet.
///
/// Resolution order, first match wins:
/// 1. Managed hosting: `<prefix>PROJECT` and `<prefix>APP_DIR` are set and
///    the app directory is the home directory. Returns
///    `<app dir>/.environment` whether or not it exists yet.
/// 2. The first existing file among [`candidate_files`].
pub fn locate(env: &impl ShellEnv, env_prefix: &str) -> Result<PathBuf, InstallError> {
    let home = env.home_dir().ok_or(InstallError::LocatorNotFound)?;

    if let Some(path) = hosting_environment_file(env, env_prefix, &home) {
        debug!(path = %path.display(), "Using managed hosting environment file");
        return Ok(path);
    }

    let found = candidate_files(env, &home)
        .into_iter()
        .find(|candidate| candidate.exists());

    match found {
        Some(path) => {
            debug!(path = %path.display(), "Found shell configuration file");
            Ok(path)
        }
        None => Err(InstallError::LocatorNotFound),
    }
}

/// Ordered candidate startup files in `home` for the user's login shell.
pub fn candidate_files(env: &impl ShellEnv, home: &Path) -> Vec<PathBuf> {
    let mut names: Vec<&str> = Vec::with_capacity(4);
    if login_shell(env).as_deref() == Some("zsh") {
        names.extend(ZSH_CANDIDATES);
    }
    names.extend(BASH_CANDIDATES);

    names.into_iter().map(|name| home.join(name)).collect()
}

/// Basename of `$SHELL`, e.g. `zsh` for `/usr/local/bin/zsh`.
fn login_shell(env: &impl ShellEnv) -> Option<String> {
    let shell = env.var("SHELL")?;
    Path::new(&shell)
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

fn hosting_environment_file(
    env: &impl ShellEnv,
    env_prefix: &str,
    home: &Path,
) -> Option<PathBuf> {
    env.var(&format!("{env_prefix}PROJECT"))?;
    let app_dir = PathBuf::from(env.var(&format!("{env_prefix}APP_DIR"))?);

    if app_dir == home {
        Some(app_dir.join(HOSTING_ENVIRONMENT_FILE))
    } else {
        None
    }
}

/// Directory prepended to `PATH`; its path doubles as the install marker.
pub fn user_bin_dir(user_config_dir: &Path) -> PathBuf {
    user_config_dir.join("bin")
}

/// Destination of the managed resource inside the user config directory.
pub fn managed_resource_path(user_config_dir: &Path) -> PathBuf {
    user_config_dir.join(MANAGED_RESOURCE_NAME)
}
