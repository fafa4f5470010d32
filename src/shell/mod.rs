//! Shell integration for the CLI
//!
//! This module locates the user's startup file, renders the snippet that
//! puts the tool on `PATH`, and merges it into the startup file once.

pub mod env;
pub mod install;
pub mod paths;
pub mod snippet;

// env.rs
pub use env::{ShellEnv, StaticEnv, SystemEnv};

// paths.rs
pub use paths::{
    candidate_files, locate, managed_resource_path, user_bin_dir, MANAGED_RESOURCE_NAME,
};

// snippet.rs
pub use snippet::{shell_escape, shell_escape_path};

// install.rs
pub use install::{
    apply, deploy_managed_resource, is_configured, merge, read_managed_resource,
    read_startup_file, reconcile, Decision, ReconcileOutcome, ResourceSource,
    BUNDLED_SHELL_CONFIG,
};
