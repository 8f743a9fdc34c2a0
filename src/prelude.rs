//! The `ignorewalk` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use ignorewalk::prelude::*;
//!
//! let ignore = Ignore::load("target/\n");
//! assert!(ignore.matches("target/debug/app"));
//! assert!(Glob::with_wildcards(Wildcard::All, "*.rs", Wildcard::Nothing).is_match("src/lib.rs"));
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, ListOptions};
pub use crate::discovery::{walk, Walker};
pub use crate::errors::{Error, Result};
pub use crate::fs_util::is_hidden;
pub use crate::glob::{Glob, Wildcard};
pub use crate::ignore::Ignore;
pub use crate::list_files;
