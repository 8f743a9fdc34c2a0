// src/constants.rs

/// Names of per-directory ignore files, checked in order. The first regular file wins.
pub const IGNORE_FILENAMES: &[&str] = &[".gitignore"];

/// Separator used in relative paths handed to ignore rules.
pub const SEPARATOR: char = '/';
