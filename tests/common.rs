// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not by the library tests.
pub fn ignorewalk_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("ignorewalk"))
}

/// Writes `content` to `root/relative`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(root: &Path, relative: &str, content: &str) -> std::io::Result<()> {
    let file_path = root.join(relative);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)
}
