//! Environment access for shell detection
//!
//! The locator and installer never touch `std::env` directly. They read
//! through [`ShellEnv`] so the same logic runs against the real process
//! environment or a fixed one.

use std::collections::HashMap;
use std::path::PathBuf;

/// Read-only view of the signals used to pick a startup file.
pub trait ShellEnv {
    /// Absolute path of the current user's home directory.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Value of an environment variable, if set and valid unicode.
    fn var(&self, name: &str) -> Option<String>;

    /// Current working directory of the process.
    fn current_dir(&self) -> Option<PathBuf>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ShellEnv for SystemEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

/// A fixed environment, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    pub home: Option<PathBuf>,
    pub vars: HashMap<String, String>,
    pub cwd: Option<PathBuf>,
}

impl StaticEnv {
    /// Environment with the given home directory and nothing else set.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
            ..Self::default()
        }
    }

    /// Set a variable, returning the updated environment.
    pub fn set(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Set the working directory, returning the updated environment.
    pub fn in_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl ShellEnv for StaticEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        self.home.clone()
    }

    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        self.cwd.clone()
    }
}
