// src/config/path_resolve.rs

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Resolves the base directory to an absolute, canonicalized PathBuf.
pub fn resolve_basedir(input: &Path) -> Result<PathBuf> {
    input
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: '{}'", input.display()))
}
