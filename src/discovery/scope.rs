// src/discovery/scope.rs

use crate::constants::IGNORE_FILENAMES;
use crate::errors::Result;
use crate::fs_util::relative_str;
use crate::ignore::Ignore;
use log::{debug, trace, warn};
use std::path::{Path, PathBuf};

/// An ignore ruleset anchored at the directory that defined it.
#[derive(Debug, Clone)]
pub(crate) struct Scope {
    pub(crate) ignore: Ignore,
    pub(crate) basedir: PathBuf,
}

impl Scope {
    fn relative(&self, path: &Path) -> String {
        relative_str(path, &self.basedir).unwrap_or_else(|| {
            warn!(
                "'{}' is not below scope '{}', matching full path",
                path.display(),
                self.basedir.display()
            );
            path.to_string_lossy().into_owned()
        })
    }
}

/// The chain of active scopes during one walk, innermost last.
#[derive(Debug, Default)]
pub(crate) struct ScopeStack {
    scopes: Vec<Scope>,
}

impl ScopeStack {
    pub(crate) fn len(&self) -> usize {
        self.scopes.len()
    }

    /// Pushes a scope for `dir` if it holds an ignore file, or an empty one if
    /// the stack has no scope yet. Returns whether a scope was pushed.
    ///
    /// Nothing is pushed when loading the ignore file fails.
    pub(crate) fn enter(&mut self, dir: &Path) -> Result<bool> {
        for filename in IGNORE_FILENAMES {
            let fp = dir.join(filename);
            if fp.is_file() {
                debug!("Found ignore file {}", fp.display());
                let ignore = Ignore::load_from_file(&fp)?;
                self.scopes.push(Scope {
                    ignore,
                    basedir: dir.to_path_buf(),
                });
                return Ok(true);
            }
        }

        if self.scopes.is_empty() {
            trace!("No ignore file at walk root {}, using empty rules", dir.display());
            self.scopes.push(Scope {
                ignore: Ignore::default(),
                basedir: dir.to_path_buf(),
            });
            return Ok(true);
        }
        Ok(false)
    }

    pub(crate) fn leave(&mut self) {
        self.scopes.pop();
    }

    /// Checks whether `path` is excluded by the active scopes.
    ///
    /// Each scope sees `path` relative to its own directory. The innermost
    /// scope whose ignore list matches decides: the path is excluded unless
    /// that scope or a deeper one has a matching include pattern. Include
    /// patterns of outer scopes never cancel an inner ignore.
    pub(crate) fn is_ignored(&self, path: &Path) -> bool {
        let relative: Vec<(&Scope, String)> = self
            .scopes
            .iter()
            .rev()
            .map(|scope| (scope, scope.relative(path)))
            .collect();

        let Some(deciding) = relative
            .iter()
            .position(|(scope, rel)| scope.ignore.ignore_matches(rel))
        else {
            return false;
        };
        !relative[..=deciding]
            .iter()
            .any(|(scope, rel)| scope.ignore.include_matches(rel))
    }
}
