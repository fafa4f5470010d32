//! rcsetup library
//!
//! Wires a command-line tool into the user's bash or zsh startup file:
//! deploys the tool's shell integration script, finds the right startup
//! file, and appends a `PATH` export plus a guarded `source` line exactly
//! once.

pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod installer;
pub mod logging;
pub mod prompt;
pub mod shell;
pub mod theme;

pub use config::Config;
pub use error::InstallError;
pub use installer::{InstallOutcome, Installer};
pub use shell::{Decision, ReconcileOutcome};
