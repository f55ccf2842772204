//! String-level path helpers. Nothing here touches the filesystem except [`modified_at`],
//! [`is_symlink`] and [`remove_link`].

use std::io::ErrorKind;
use std::path::{MAIN_SEPARATOR, Path};
use std::time::SystemTime;

use crate::core::Result;
use crate::error::NodeError;

const CURRENT_DIR: &str = ".";

/// Joins `segments` with the platform separator.
///
/// Empty segments are ignored and every run of consecutive separators in the result is
/// collapsed into one, so `join(["a/", "/b"])` and `join(["a", "", "b"])` both give `a/b`.
pub fn join<I, S>(segments: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .filter(|segment| !segment.as_ref().is_empty())
        .fold(String::new(), |mut acc, segment| {
            if !acc.is_empty() {
                acc.push(MAIN_SEPARATOR);
            }
            acc.push_str(segment.as_ref());
            acc
        });
    collapse_separators(&joined)
}

fn collapse_separators(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        let is_separator = ch == MAIN_SEPARATOR;
        if !(is_separator && previous_was_separator) {
            collapsed.push(ch);
        }
        previous_was_separator = is_separator;
    }
    collapsed
}

/// Both POSIX and drive-letter separators are recognised, independent of the host platform.
fn is_any_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

/// `C:` and the like.
fn is_drive(path: &str) -> bool {
    matches!(path.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}

/// Returns `true` for `/` (or `\`) alone and for drive roots such as `C:\`.
pub fn is_root(path: &str) -> bool {
    match path.as_bytes() {
        [separator] => is_any_separator(*separator as char),
        [letter, b':', separator] => {
            letter.is_ascii_alphabetic() && is_any_separator(*separator as char)
        }
        _ => false,
    }
}

/// Final path component. Roots and paths ending in `..` have none.
pub fn base_name(path: &str) -> String {
    if is_root(path) {
        return String::new();
    }
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Strips `levels` trailing segments from `path` without touching the filesystem.
///
/// Absolute paths clamp at their root (`/`, `C:\`), relative paths clamp at `.`.
pub fn strip_segments(path: &str, levels: usize) -> String {
    let mut current = path.to_string();
    for _ in 0..levels {
        let stripped = strip_segment(&current);
        if stripped == current {
            // clamped at a root or `.`
            break;
        }
        current = stripped;
    }
    current
}

fn strip_segment(path: &str) -> String {
    if is_root(path) {
        return path.to_string();
    }
    let trimmed = path.trim_end_matches(is_any_separator);
    if trimmed.is_empty() {
        // "" or a run of separators only
        if path.is_empty() {
            return CURRENT_DIR.to_string();
        }
        return path[..1].to_string();
    }
    match trimmed.rfind(is_any_separator) {
        Some(idx) => {
            let head = trimmed[..idx].trim_end_matches(is_any_separator);
            if head.is_empty() || is_drive(head) {
                // keep the separator that makes it a root
                trimmed[..head.len() + 1].to_string()
            } else {
                head.to_string()
            }
        }
        None if is_drive(trimmed) => trimmed.to_string(),
        None => CURRENT_DIR.to_string(),
    }
}

/// Last modification time of whatever `path` resolves to (symlinks followed).
pub fn modified_at(path: &str) -> Result<SystemTime> {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => NodeError::NotFound {
                path: path.to_string(),
            },
            _ => NodeError::Metadata {
                path: path.to_string(),
                source,
            },
        })
}

/// Returns `true` if the entry at `path` is itself a symbolic link (not followed).
pub fn is_symlink(path: &str) -> bool {
    std::fs::symlink_metadata(path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}

/// Removes the link itself, never its target.
pub fn remove_link(path: &str) -> std::io::Result<()> {
    #[cfg(windows)]
    {
        use std::os::windows::fs::FileTypeExt;

        // directory links on Windows must go through remove_dir
        let is_directory_link = std::fs::symlink_metadata(path)
            .map(|metadata| metadata.file_type().is_symlink_dir())
            .unwrap_or(false);
        if is_directory_link {
            return std::fs::remove_dir(path);
        }
        std::fs::remove_file(path)
    }
    #[cfg(not(windows))]
    {
        std::fs::remove_file(path)
    }
}
