//! Install orchestration
//!
//! Runs one shell configuration install from start to finish:
//!
//! 1. deploy the managed resource into the user config directory
//! 2. locate the startup file
//! 3. reconcile the snippet into it: stop early if the marker is already
//!    there, otherwise ask, then either apply the snippet or print it as
//!    manual instructions
//!
//! Every step reports to a line-oriented sink. The first failure ends the
//! run; nothing is retried.

use std::fmt::Display;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::error::InstallError;
use crate::prompt::Confirm;
use crate::shell::install::{
    deploy_managed_resource, read_managed_resource, reconcile, Decision, ReconcileOutcome,
};
use crate::shell::paths::{locate, managed_resource_path};
use crate::shell::snippet::{self, shell_escape};
use crate::shell::ShellEnv;
use crate::theme::Theme;

/// Question asked before the startup file is edited.
pub const CONFIRM_PROMPT: &str = "Do you want to update the file automatically?";

/// How an install run ended.
#[derive(Debug)]
pub enum InstallOutcome {
    /// The snippet was written to the startup file.
    Configured { startup_file: PathBuf },
    /// The startup file already carried the marker.
    AlreadyConfigured { startup_file: PathBuf },
    /// A step failed, or the user chose to edit the file by hand
    /// ([`InstallError::UserDeclined`]).
    Failed(InstallError),
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            InstallOutcome::Configured { .. } | InstallOutcome::AlreadyConfigured { .. }
        )
    }

    pub fn is_declined(&self) -> bool {
        matches!(self, InstallOutcome::Failed(InstallError::UserDeclined))
    }

    /// Process exit code: 0 on success, 1 for anything else, a decline included.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// One install run against an environment, a confirmation source and an
/// output sink.
pub struct Installer<'a, E: ShellEnv, C: Confirm, W: Write> {
    config: &'a Config,
    env: &'a E,
    confirm: C,
    out: W,
    theme: Theme,
}

impl<'a, E: ShellEnv, C: Confirm, W: Write> Installer<'a, E, C, W> {
    pub fn new(config: &'a Config, env: &'a E, confirm: C, out: W) -> Self {
        Self {
            config,
            env,
            confirm,
            out,
            theme: Theme::plain(),
        }
    }

    /// Use `theme` for highlighted parts of status lines.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Run the install and report the outcome.
    pub fn run(mut self) -> InstallOutcome {
        match self.execute() {
            Ok(outcome) => outcome,
            // Instructions were printed instead of an error
            Err(InstallError::UserDeclined) => InstallOutcome::Failed(InstallError::UserDeclined),
            Err(err) => {
                let line = self.theme.error_text(&err.to_string());
                self.say(line);
                InstallOutcome::Failed(err)
            }
        }
    }

    fn execute(&mut self) -> Result<InstallOutcome, InstallError> {
        let home = self.env.home_dir();
        let config_dir = self.config.user_config_dir(home.as_deref()).ok_or_else(|| {
            InstallError::ConfigDirUnresolved {
                dir: self.config.application.user_config_dir.clone(),
            }
        })?;

        let resource_text = read_managed_resource(&self.config.resource_source())?;
        let resource_path = managed_resource_path(&config_dir);
        deploy_managed_resource(&resource_text, &resource_path)?;
        self.say(format!(
            "Successfully copied CLI configuration to: {}",
            resource_path.display()
        ));

        let startup_file = locate(self.env, &self.config.service.env_prefix)?;
        if startup_file.exists() {
            self.say(format!(
                "Reading shell configuration file: {}",
                startup_file.display()
            ));
        }

        let app_name = self.config.application.name.clone();
        let block = snippet::build(&config_dir, &resource_path);
        let confirm = &mut self.confirm;
        let outcome = reconcile(
            &startup_file,
            &block,
            &snippet::marker(&config_dir),
            &snippet::header(&app_name),
            || Decision::from(confirm.confirm(CONFIRM_PROMPT)),
        )?;

        match outcome {
            ReconcileOutcome::AlreadyConfigured => {
                let shown = self.theme.accent_text(&startup_file.display().to_string());
                self.say(format!("Already configured: {shown}"));
                Ok(InstallOutcome::AlreadyConfigured { startup_file })
            }
            ReconcileOutcome::Declined => {
                debug!(path = %startup_file.display(), "User declined automatic update");
                let shown = self
                    .theme
                    .highlight_text(&startup_file.display().to_string());
                self.say(format!(
                    "To set up the CLI, add the following lines to: {shown}"
                ));
                self.say(snippet::manual_instructions(&app_name, &block));
                Err(InstallError::UserDeclined)
            }
            ReconcileOutcome::Applied { backup } => {
                if let Some(backup) = backup {
                    debug!(path = %backup.display(), "Previous configuration saved");
                }

                let short = short_path(&startup_file, self.env.current_dir().as_deref());
                let hint = self.theme.accent_text(&format!("source {short}"));
                self.say("Updated successfully. Start a new terminal to use the new configuration.");
                self.say("Or to use it now, type:");
                self.say(format!("  {hint}"));
                Ok(InstallOutcome::Configured { startup_file })
            }
        }
    }

    /// Write one status line. The sink is best-effort.
    fn say(&mut self, line: impl Display) {
        let _ = writeln!(self.out, "{line}");
    }
}

/// Path as the user would type it after `source`.
///
/// Just the file name when `cwd` is the file's directory; quoted when it
/// contains a space.
pub fn short_path(file: &Path, cwd: Option<&Path>) -> String {
    let shown = match (cwd, file.parent(), file.file_name()) {
        (Some(cwd), Some(parent), Some(name)) if cwd == parent => {
            name.to_string_lossy().into_owned()
        }
        _ => file.to_string_lossy().into_owned(),
    };

    if shown.contains(' ') {
        shell_escape(&shown)
    } else {
        shown
    }
}
