//! File helpers shared by the installer: backups and atomic writes.

pub mod backup;
pub mod write;

pub use backup::{backup_path_for, create_backup, has_backup, BACKUP_SUFFIX};
pub use write::atomic_write;
