//! Backup utilities for shell startup files.
//!
//! A backup is a plain copy taken right before the startup file is
//! rewritten. There is only ever one backup per file; a later run replaces it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix appended to a startup file path to form its backup path.
pub const BACKUP_SUFFIX: &str = ".cli.bak";

/// Get the backup path for a given file.
///
/// The backup path is the original path with `.cli.bak` appended.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}

/// Check if a backup exists for the given file.
pub fn has_backup(path: &Path) -> bool {
    backup_path_for(path).exists()
}

/// Copy `path` to its backup location, replacing any previous backup.
///
/// Returns the backup path on success.
pub fn create_backup(path: &Path) -> io::Result<PathBuf> {
    let backup = backup_path_for(path);
    fs::copy(path, &backup)?;
    Ok(backup)
}
