// src/fs_util.rs

//! Small filesystem helpers used by the walker and the ignore loader.

use crate::constants::SEPARATOR;
use crate::errors::{io_error_with_path, Result};
use std::fs;
use std::path::{Component, Path};

/// Checks whether the final component of `path` starts with a dot.
///
/// Only the last component counts: `.abc/d` is not hidden, `.abc/` is.
///
/// # Examples
///
/// ```
/// use ignorewalk::fs_util::is_hidden;
///
/// assert!(is_hidden(".abc"));
/// assert!(!is_hidden(".abc/d"));
/// assert!(!is_hidden(""));
/// ```
pub fn is_hidden<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Reads the whole file at `path`, annotating errors with the path.
pub fn read_to_string(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Returns `path` relative to `base`, with components joined by `/`.
///
/// Returns `None` if `path` does not live under `base`.
pub fn relative_str(path: &Path, base: &Path) -> Option<String> {
    let rel = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy()),
            _ => None,
        })
        .collect();
    Some(parts.join(&*SEPARATOR.to_string()))
}
