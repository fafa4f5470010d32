//! Configuration management for rcsetup

mod io;
mod types;

pub use io::CONFIG_ENV;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::shell::ResourceSource;

impl Config {
    /// Get the config file path (`$RCSETUP_CONFIG` or ~/.config/rcsetup/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Check values that parse fine but cannot be used.
    pub fn validate(&self) -> Result<(), String> {
        if self.application.name.trim().is_empty() {
            return Err("application.name must not be empty".to_string());
        }
        if self.application.user_config_dir.trim().is_empty() {
            return Err("application.user_config_dir must not be empty".to_string());
        }
        if !is_home_relative(&self.application.user_config_dir)
            && !Path::new(&self.application.user_config_dir).is_absolute()
        {
            return Err(format!(
                "application.user_config_dir must be absolute or start with ~/, got {:?}",
                self.application.user_config_dir
            ));
        }
        Ok(())
    }

    /// Expand ~ in the user config directory against `home`
    ///
    /// Returns `None` unless the result is an absolute path: a `~` value
    /// with no home directory, or a relative value from the config file.
    pub fn user_config_dir(&self, home: Option<&Path>) -> Option<PathBuf> {
        let dir = &self.application.user_config_dir;
        let resolved = if dir == "~" {
            home?.to_path_buf()
        } else if let Some(stripped) = dir.strip_prefix("~/") {
            home?.join(stripped)
        } else {
            PathBuf::from(dir)
        };

        resolved.is_absolute().then_some(resolved)
    }

    /// Where the managed shell config is read from
    pub fn resource_source(&self) -> ResourceSource {
        match &self.application.shell_config_source {
            Some(path) => ResourceSource::File(path.clone()),
            None => ResourceSource::Bundled,
        }
    }
}

fn is_home_relative(dir: &str) -> bool {
    dir == "~" || dir.starts_with("~/")
}
