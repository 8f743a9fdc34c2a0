//! Ignore-aware directory traversal.
use crate::config::Config;
use crate::errors::Error;
use std::path::Path;

mod scope;
mod walker;

pub use walker::Walker;

/// Walks `config.basedir`, calling `visitor` for every visible, non-ignored file.
///
/// Shorthand for `Walker::new(config.clone()).walk(visitor)`.
pub fn walk<F, E>(config: &Config, visitor: F) -> Result<(), E>
where
    F: FnMut(&Path) -> Result<(), E>,
    E: From<Error>,
{
    Walker::new(config.clone()).walk(visitor)
}
