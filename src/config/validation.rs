// src/config/validation.rs

use crate::errors::Error;
use std::path::Path;

/// Checks that the resolved base path can be walked.
pub(super) fn validate_basedir(basedir: &Path) -> Result<(), Error> {
    if !basedir.is_dir() {
        return Err(Error::Config(format!(
            "'{}' is not a directory",
            basedir.display()
        )));
    }
    Ok(())
}
