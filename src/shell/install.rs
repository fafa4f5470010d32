//! Startup file reconciliation
//!
//! This module deploys the managed resource into the user config directory
//! and merges the snippet into the user's startup file. The startup file is
//! opaque text: the only thing ever looked for is the marker substring.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::InstallError;
use crate::files::{atomic_write, create_backup};

/// The shell integration script bundled into the binary.
pub const BUNDLED_SHELL_CONFIG: &str = include_str!("../../assets/shell-config.rc");

/// Where the managed resource text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSource {
    /// The script compiled into this binary.
    Bundled,
    /// A script on disk, read at install time.
    File(PathBuf),
}

/// Whether the user agreed to have the startup file edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

impl From<bool> for Decision {
    fn from(confirmed: bool) -> Self {
        if confirmed {
            Decision::Confirmed
        } else {
            Decision::Declined
        }
    }
}

/// Result of reconciling the snippet into a startup file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The file was rewritten. `backup` is set when a copy of the previous
    /// content was saved.
    Applied { backup: Option<PathBuf> },
    /// The marker was already present; nothing was written.
    AlreadyConfigured,
    /// The user declined; nothing was written.
    Declined,
}

/// Load the managed resource text.
pub fn read_managed_resource(source: &ResourceSource) -> Result<String, InstallError> {
    match source {
        ResourceSource::Bundled => Ok(BUNDLED_SHELL_CONFIG.to_string()),
        ResourceSource::File(path) => {
            fs::read_to_string(path).map_err(|source| InstallError::ResourceRead {
                path: path.clone(),
                source,
            })
        }
    }
}

/// Write the managed resource to `destination`, replacing whatever is there.
///
/// The parent directory is created if needed.
pub fn deploy_managed_resource(source_text: &str, destination: &Path) -> Result<(), InstallError> {
    let write = || -> io::Result<()> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(destination, source_text)
    };

    write().map_err(|source| InstallError::ResourceWrite {
        path: destination.to_path_buf(),
        source,
    })?;

    debug!(path = %destination.display(), "Deployed managed shell config");
    Ok(())
}

/// Read a startup file, treating a missing file as empty.
pub fn read_startup_file(path: &Path) -> Result<String, InstallError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(InstallError::StartupRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Whether `content` already carries the marker anywhere.
pub fn is_configured(content: &str, marker: &str) -> bool {
    content.contains(marker)
}

/// Append the header and snippet to `content`.
///
/// Trailing line terminators of `content` are collapsed into one blank
/// separator line. Empty content gets no separator.
pub fn merge(content: &str, header: &str, snippet: &str) -> String {
    let existing = content.trim_end_matches(['\r', '\n']);
    let block = format!("{header}\n{snippet}\n");

    if existing.is_empty() {
        block
    } else {
        format!("{existing}\n\n{block}")
    }
}

/// Back up and rewrite `startup_file` with the merged content.
///
/// The backup is best-effort: if it cannot be written the rewrite still
/// happens. A missing startup file is created and gets no backup.
pub fn apply(
    startup_file: &Path,
    content: &str,
    header: &str,
    snippet: &str,
) -> Result<Option<PathBuf>, InstallError> {
    let backup = if startup_file.exists() {
        match create_backup(startup_file) {
            Ok(path) => {
                debug!(path = %path.display(), "Backed up shell configuration file");
                Some(path)
            }
            Err(e) => {
                warn!(
                    path = %startup_file.display(),
                    error = %e,
                    "Could not back up shell configuration file, continuing"
                );
                None
            }
        }
    } else {
        None
    };

    let new_content = merge(content, header, snippet);
    atomic_write(startup_file, &new_content).map_err(|source| InstallError::StartupWrite {
        path: startup_file.to_path_buf(),
        source,
    })?;

    Ok(backup)
}

/// Reconcile the snippet into `startup_file`.
///
/// Reads the file once. A file that already carries the marker is reported
/// as configured and `decide` is never called. Otherwise `decide` picks
/// between leaving the file alone and applying the change.
pub fn reconcile(
    startup_file: &Path,
    snippet: &str,
    marker: &str,
    header: &str,
    decide: impl FnOnce() -> Decision,
) -> Result<ReconcileOutcome, InstallError> {
    let content = read_startup_file(startup_file)?;

    if is_configured(&content, marker) {
        return Ok(ReconcileOutcome::AlreadyConfigured);
    }

    match decide() {
        Decision::Declined => Ok(ReconcileOutcome::Declined),
        Decision::Confirmed => {
            let backup = apply(startup_file, &content, header, snippet)?;
            Ok(ReconcileOutcome::Applied { backup })
        }
    }
}
