//! Snippet rendering
//!
//! Renders the two lines appended to a startup file: a `PATH` export for the
//! tool's bin directory and a guarded source of the managed resource. The
//! guard keeps non bash/zsh shells (e.g. plain `sh` reading `.profile`) from
//! choking on bash-only syntax in the managed script.

use std::path::Path;

use super::paths::user_bin_dir;

/// Escape a single shell word safely for POSIX sh.
///
/// Words made only of safe characters are returned unchanged, anything
/// else is single-quoted.
pub fn shell_escape(s: &str) -> String {
    if s.is_empty() {
        "''".to_string()
    } else if s
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_=./:@".contains(c))
    {
        s.to_string()
    } else {
        let escaped = s.replace('\'', "'\"'\"'");
        format!("'{}'", escaped)
    }
}

/// Escape a path for inclusion in a shell file.
pub fn shell_escape_path(path: &Path) -> String {
    shell_escape(&path.to_string_lossy())
}

/// Render the snippet for `user_config_dir` and the deployed resource.
///
/// Lines are joined with `\n` and the result has no trailing terminator.
pub fn build(user_config_dir: &Path, managed_resource: &Path) -> String {
    let bin = shell_escape_path(&user_bin_dir(user_config_dir));
    let resource = shell_escape_path(managed_resource);

    format!(
        "export PATH={bin}:\"$PATH\"\n\
         [ \"$BASH\" ] || [ \"$ZSH\" ] && . {resource} 2>/dev/null || true"
    )
}

/// The text whose presence means the tool is already configured.
///
/// This is the unescaped bin directory path; any occurrence counts.
pub fn marker(user_config_dir: &Path) -> String {
    user_bin_dir(user_config_dir).to_string_lossy().into_owned()
}

/// Comment line written above the snippet.
pub fn header(app_name: &str) -> String {
    format!("# Automatically added by the {app_name}")
}

/// Snippet as shown to a user who declined the automatic update.
///
/// Starts with a blank line and a comment naming the tool; every line is
/// indented by two spaces.
pub fn manual_instructions(app_name: &str, snippet: &str) -> String {
    let block = format!("\n# {app_name} configuration\n{snippet}");
    block
        .split('\n')
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
