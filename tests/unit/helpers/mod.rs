//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use rcsetup::shell::StaticEnv;
use tempfile::TempDir;

/// A temporary home directory with the given startup files.
pub fn home_with(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp dir");
    for (name, content) in files {
        fs::write(temp.path().join(name), content).expect("Failed to write startup file");
    }
    temp
}

/// Environment rooted at `home` with `SHELL` set.
pub fn env_for(home: &Path, shell: &str) -> StaticEnv {
    StaticEnv::with_home(home).set("SHELL", shell)
}

/// The tool directory used throughout the tests.
pub fn tool_dir(home: &Path) -> PathBuf {
    home.join(".tool")
}
