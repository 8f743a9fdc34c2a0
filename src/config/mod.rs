//! Defines the walk configuration and the options of the listing front end.
//!
//! `Config` is all the walker itself knows about. `ListOptions` only shapes
//! how the CLI prints what the walk visits.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;
mod validation;

/// Configuration of one walk. Immutable for the walk's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the walk starts at. Ignore scopes are anchored below it.
    pub basedir: PathBuf,
    /// Whether entries whose name starts with `.` are considered at all.
    pub include_hidden: bool,
}

impl Config {
    /// Creates a configuration for `basedir` with hidden entries excluded.
    ///
    /// The path is used as given; use [`ConfigBuilder`] to resolve and
    /// validate it first.
    pub fn new(basedir: impl Into<PathBuf>) -> Self {
        Self {
            basedir: basedir.into(),
            include_hidden: false,
        }
    }

    pub fn with_include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }
}

/// How visited files are reported by [`crate::list_files`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Print paths relative to the base directory instead of in full.
    pub relative: bool,
    /// Stop after this many files.
    pub max_files: Option<usize>,
    /// Terminate each path with NUL instead of a newline.
    pub null_terminated: bool,
}

impl ListOptions {
    pub(crate) fn terminator(&self) -> u8 {
        if self.null_terminated {
            b'\0'
        } else {
            b'\n'
        }
    }
}
