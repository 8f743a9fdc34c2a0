//! Compiles ignore-file text into a ruleset and evaluates relative paths against it.
//!
//! Supported syntax is a subset of `.gitignore`:
//!
//! * `#` starts a comment line, `!` negates (re-includes) a pattern.
//! * A leading `/` anchors the pattern to the ignore file's directory,
//!   otherwise it may match at any depth.
//! * A trailing `/` makes the pattern cover everything beneath it.
//! * `*` stays within one path component, `**` crosses separators.

use crate::cursor::Cursor;
use crate::errors::Result;
use crate::fs_util;
use crate::glob::{Glob, Wildcard};
use log::{debug, trace};
use std::path::Path;

const WHITESPACE: &str = " \t";

/// An immutable ignore ruleset: ignore patterns plus include overrides.
#[derive(Debug, Clone, Default)]
pub struct Ignore {
    ignores: Vec<Glob>,
    includes: Vec<Glob>,
}

impl Ignore {
    /// Builds a ruleset from ignore-file content.
    ///
    /// # Examples
    ///
    /// ```
    /// use ignorewalk::ignore::Ignore;
    ///
    /// let ignore = Ignore::load("build/\n!build/keep.txt\n");
    /// assert!(ignore.matches("build/anything"));
    /// assert!(!ignore.matches("build/keep.txt"));
    /// ```
    pub fn load(content: &str) -> Self {
        let mut ignore = Self::default();

        let mut cursor = Cursor::new(content);
        while let Some(mut line) = cursor.pop_line() {
            line.strip_left(WHITESPACE);
            line.strip_right(WHITESPACE);

            if line.pop_if('#') {
                continue;
            }

            let dst = if line.pop_if('!') {
                &mut ignore.includes
            } else {
                &mut ignore.ignores
            };

            if line.is_empty() {
                continue;
            }

            let front = if line.pop_if('/') {
                Wildcard::Nothing
            } else {
                Wildcard::All
            };
            let back = if line.back() == Some('/') {
                Wildcard::All
            } else {
                Wildcard::Nothing
            };
            trace!("Compiling ignore pattern {:?}", line.as_str());
            dst.push(Glob::with_wildcards(front, line.as_str(), back));
        }

        debug!(
            "Loaded ignore rules: {} ignore, {} include",
            ignore.ignores.len(),
            ignore.includes.len()
        );
        ignore
    }

    /// Reads and compiles the ignore file at `path`.
    ///
    /// # Errors
    /// Returns `Error::Io` if the file cannot be read.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs_util::read_to_string(path)?;
        Ok(Self::load(&content))
    }

    /// Checks whether `relative_path` is excluded by this ruleset.
    ///
    /// The first matching ignore pattern excludes the path, after which the
    /// first matching include pattern re-admits it. Declaration order across
    /// the two lists plays no role.
    pub fn matches(&self, relative_path: &str) -> bool {
        if !self.ignore_matches(relative_path) {
            return false;
        }
        let included = self.include_matches(relative_path);
        trace!(
            "{:?}: ignored, include override {}",
            relative_path,
            included
        );
        !included
    }

    /// Checks the ignore list alone.
    pub fn ignore_matches(&self, relative_path: &str) -> bool {
        self.ignores.iter().any(|glob| glob.is_match(relative_path))
    }

    /// Checks the include (`!`) list alone.
    pub fn include_matches(&self, relative_path: &str) -> bool {
        self.includes.iter().any(|glob| glob.is_match(relative_path))
    }

    /// Checks whether the ruleset holds no patterns at all.
    pub fn is_empty(&self) -> bool {
        self.ignores.is_empty() && self.includes.is_empty()
    }

    /// Number of ignore patterns.
    pub fn ignore_count(&self) -> usize {
        self.ignores.len()
    }

    /// Number of include (`!`) patterns.
    pub fn include_count(&self) -> usize {
        self.includes.len()
    }
}
