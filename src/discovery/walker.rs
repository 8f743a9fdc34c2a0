// src/discovery/walker.rs

use super::scope::ScopeStack;
use crate::config::Config;
use crate::errors::{io_error_with_path, Error};
use crate::fs_util::is_hidden;
use log::{debug, trace, warn};
use std::fs;
use std::io;
use std::path::Path;
use tracing::instrument;

/// Recursively visits the regular files below `Config::basedir`.
///
/// Each directory that holds a `.gitignore` adds a scope for the duration of
/// its subtree. Hidden entries are skipped unless `include_hidden` is set,
/// regardless of ignore rules.
#[derive(Debug, Clone)]
pub struct Walker {
    config: Config,
}

impl Walker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walks the tree depth-first, calling `visitor` with the full path of
    /// every regular file that is neither hidden nor ignored.
    ///
    /// Entries are visited in filesystem enumeration order. The first error,
    /// from the visitor or from reading the tree, stops the walk and is
    /// returned as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use ignorewalk::{Config, Walker};
    /// use std::fs;
    ///
    /// let temp = tempfile::tempdir().unwrap();
    /// fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();
    /// fs::write(temp.path().join("a.log"), "").unwrap();
    /// fs::write(temp.path().join("a.txt"), "").unwrap();
    ///
    /// let walker = Walker::new(Config::new(temp.path()));
    /// let mut found = Vec::new();
    /// walker
    ///     .walk(|path| -> ignorewalk::Result<()> {
    ///         found.push(path.to_path_buf());
    ///         Ok(())
    ///     })
    ///     .unwrap();
    /// assert_eq!(found, vec![temp.path().join("a.txt")]);
    /// ```
    pub fn walk<F, E>(&self, mut visitor: F) -> Result<(), E>
    where
        F: FnMut(&Path) -> Result<(), E>,
        E: From<Error>,
    {
        let mut scopes = ScopeStack::default();
        let result = self.walk_dir(&self.config.basedir, &mut scopes, &mut visitor);
        debug_assert_eq!(scopes.len(), 0);
        result
    }

    #[instrument(level = "debug", skip(self, dir, scopes, visitor), fields(dir = %dir.display()))]
    fn walk_dir<F, E>(&self, dir: &Path, scopes: &mut ScopeStack, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Path) -> Result<(), E>,
        E: From<Error>,
    {
        let pushed = scopes.enter(dir)?;
        let result = self.scan_dir(dir, scopes, visitor);
        if pushed {
            scopes.leave();
        }
        result
    }

    fn scan_dir<F, E>(&self, dir: &Path, scopes: &mut ScopeStack, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&Path) -> Result<(), E>,
        E: From<Error>,
    {
        let entries = fs::read_dir(dir).map_err(|e| io_error_with_path(e, dir))?;
        for entry in entries {
            let entry = entry.map_err(|e| io_error_with_path(e, dir))?;
            let path = entry.path();
            trace!("Processing entry: {}", path.display());

            if !self.config.include_hidden && is_hidden(&path) {
                debug!("Skipping hidden path {}", path.display());
                continue;
            }

            if scopes.is_ignored(&path) {
                debug!("Skipping ignored path {}", path.display());
                continue;
            }

            // Follows symlinks; a dangling one is skipped.
            let metadata = match fs::metadata(&path) {
                Ok(md) => md,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    warn!("Skipping vanished or dangling entry {}", path.display());
                    continue;
                }
                Err(e) => return Err(io_error_with_path(e, &path).into()),
            };

            if metadata.is_file() {
                trace!("Found regular file {}", path.display());
                visitor(&path)?;
            } else if metadata.is_dir() {
                trace!("Found directory {}", path.display());
                self.walk_dir(&path, scopes, visitor)?;
            }
        }
        Ok(())
    }
}
