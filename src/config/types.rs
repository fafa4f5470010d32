//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub service: ServiceConfig,
}

/// Identity of the tool being wired into the shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Display name used in status messages and the startup file comment
    #[serde(default = "default_name")]
    pub name: String,
    /// Per-user directory owned by the tool; `~/` is expanded
    #[serde(default = "default_user_config_dir")]
    pub user_config_dir: String,
    /// Shell integration script to deploy; the bundled one when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shell_config_source: Option<PathBuf>,
}

pub fn default_name() -> String {
    "CLI".to_string()
}

pub fn default_user_config_dir() -> String {
    "~/.rcsetup".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            user_config_dir: default_user_config_dir(),
            shell_config_source: None,
        }
    }
}

/// Hosting provider settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Prefix of the hosting environment variables (`<prefix>PROJECT`,
    /// `<prefix>APP_DIR`)
    #[serde(default = "default_env_prefix")]
    pub env_prefix: String,
}

pub fn default_env_prefix() -> String {
    "PLATFORM_".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            env_prefix: default_env_prefix(),
        }
    }
}
