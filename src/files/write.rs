//! Atomic file replacement.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `content` to `path` atomically.
///
/// The content goes to a hidden temp file in the same directory first and
/// is then renamed over the target, so readers see either the old or the
/// new file. If `path` is a symlink, the link target is replaced and the
/// link is left alone.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let target = resolve_target(path)?;

    // Same directory keeps the rename on one filesystem
    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let temp_path = parent.join(format!(
        ".{}.tmp",
        target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("rcsetup")
    ));

    if let Err(e) = fs::write(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    // Keep the mode of the file being replaced
    if let Ok(meta) = fs::metadata(&target) {
        let _ = fs::set_permissions(&temp_path, meta.permissions());
    }

    if let Err(e) = fs::rename(&temp_path, &target) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Longest symlink chain followed before giving up, as the kernel does.
const MAX_LINK_HOPS: usize = 40;

/// Follow a symlink to the file it points at; other paths pass through.
///
/// The final target does not have to exist, so a link to a file that was
/// never created is written through.
fn resolve_target(path: &Path) -> io::Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_LINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current)?;
                current = match current.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                };
            }
            _ => return Ok(current),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::Other,
        format!("too many levels of symbolic links: {}", path.display()),
    ))
}
