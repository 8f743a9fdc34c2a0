//! `ignorewalk` is a library and command-line tool for walking a directory
//! tree while honoring the `.gitignore` files found along the way.
//!
//! It is built from three layers:
//! 1.  **Glob**: a small wildcard matcher where `*` stays within one path
//!     component and `**` crosses separators.
//! 2.  **Ignore**: a ruleset compiled from ignore-file text, with `!`
//!     patterns re-including what the other patterns exclude.
//! 3.  **Walker**: a depth-first traversal that keeps one ruleset per
//!     directory owning an ignore file and hands every surviving regular
//!     file to a visitor.
//!
//! # Example: Library Usage
//!
//! ```
//! use ignorewalk::{walk, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join(".gitignore"), "*.log\n").unwrap();
//! fs::write(temp_dir.path().join("debug.log"), "noise").unwrap();
//! fs::write(temp_dir.path().join("main.rs"), "fn main() {}").unwrap();
//!
//! let config = ConfigBuilder::new().basedir(temp_dir.path()).build().unwrap();
//!
//! let mut names = Vec::new();
//! walk(&config, |path| -> ignorewalk::Result<()> {
//!     names.push(path.file_name().unwrap().to_string_lossy().into_owned());
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(names, vec!["main.rs"]);
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod discovery;
pub mod errors;
pub mod fs_util;
pub mod glob;
pub mod ignore;
pub mod prelude;
pub mod signal;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, ListOptions};
pub use discovery::{walk, Walker};
pub use errors::{Error, Result};
pub use glob::{Glob, Wildcard};
pub use ignore::Ignore;

use crate::errors::{io_error_with_path, visitor_aborted};
use std::io::Write;

/// Writes every file visited by a walk of `config.basedir` to `writer`.
///
/// This is what the `ignorewalk` binary runs. The visitor checks `token` before
/// each file and stops the walk with `Error::Interrupted` once it is
/// cancelled. When `options.max_files` is reached the walk is stopped early
/// and the call still succeeds.
///
/// # Returns
/// The number of files written.
///
/// # Examples
///
/// ```
/// use ignorewalk::{list_files, CancellationToken, Config, ListOptions};
/// use std::fs;
///
/// let temp = tempfile::tempdir().unwrap();
/// fs::create_dir(temp.path().join("src")).unwrap();
/// fs::write(temp.path().join("src").join("lib.rs"), "").unwrap();
///
/// let options = ListOptions { relative: true, ..Default::default() };
/// let mut out = Vec::new();
/// let count = list_files(
///     &Config::new(temp.path()),
///     &options,
///     &CancellationToken::new(),
///     &mut out,
/// )
/// .unwrap();
///
/// assert_eq!(count, 1);
/// assert_eq!(String::from_utf8(out).unwrap(), "src/lib.rs\n");
/// ```
pub fn list_files(
    config: &Config,
    options: &ListOptions,
    token: &CancellationToken,
    writer: &mut dyn Write,
) -> Result<usize> {
    if options.max_files == Some(0) {
        return Ok(0);
    }

    let mut count = 0usize;
    let mut limit_reached = false;
    let result = walk(config, |path| {
        if token.is_cancelled() {
            return Err(Error::Interrupted);
        }

        let shown = if options.relative {
            fs_util::relative_str(path, &config.basedir)
                .unwrap_or_else(|| path.to_string_lossy().into_owned())
        } else {
            path.to_string_lossy().into_owned()
        };
        writer
            .write_all(shown.as_bytes())
            .map_err(|e| io_error_with_path(e, "<output>"))?;
        writer
            .write_all(&[options.terminator()])
            .map_err(|e| io_error_with_path(e, "<output>"))?;
        count += 1;

        if options.max_files.is_some_and(|max| count >= max) {
            limit_reached = true;
            return Err(visitor_aborted(path, "file limit reached"));
        }
        Ok(())
    });

    match result {
        Ok(()) => {}
        Err(Error::VisitorAborted { .. }) if limit_reached => {
            log::debug!("Stopped after {} files (limit reached)", count);
        }
        Err(e) => return Err(e),
    }

    writer
        .flush()
        .map_err(|e| io_error_with_path(e, "<output>"))?;
    log::info!("Listed {} files under {}", count, config.basedir.display());
    Ok(count)
}
