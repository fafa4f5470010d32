//! Installation errors.
//!
//! Every variant renders as a single user-facing line. Backup failures have
//! no variant: a backup that cannot be written is logged and the
//! installation carries on.

use std::io;
use std::path::PathBuf;

/// Errors that can stop a shell configuration install.
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    /// `~` with no home directory, or a relative directory.
    #[error("Failed to resolve the CLI configuration directory: {dir}")]
    ConfigDirUnresolved { dir: String },

    #[error("Failed to read file: {}", path.display())]
    ResourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file: {}", path.display())]
    ResourceWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to find a shell configuration file.")]
    LocatorNotFound,

    #[error("Failed to read file: {}", path.display())]
    StartupRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Not a defect: the user chose to configure the shell by hand.
    #[error("Shell configuration was not updated")]
    UserDeclined,

    #[error("Failed to modify configuration file: {}", path.display())]
    StartupWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
