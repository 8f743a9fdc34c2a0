// tests/basic.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, ignorewalk_cmd};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_lists_absolute_paths_by_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "one.txt", "1")?;
    let canonical = temp.path().canonicalize()?;

    ignorewalk_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(format!("{}\n", canonical.join("one.txt").display()));

    temp.close()?;
    Ok(())
}

#[test]
fn test_null_terminated_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "dir/one.txt", "1")?;

    ignorewalk_cmd()
        .args(["--relative", "--null"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout("dir/one.txt\0");

    temp.close()?;
    Ok(())
}

#[test]
fn test_max_files_stops_early() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    for name in ["a.txt", "b.txt", "c/d.txt", "c/e.txt"] {
        create_file(temp.path(), name, "")?;
    }

    let output = ignorewalk_cmd()
        .args(["-r", "--max-files", "2"])
        .arg(temp.path())
        .output()?;
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(stdout.lines().count(), 2);

    temp.close()?;
    Ok(())
}

#[test]
fn test_empty_directory_lists_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    ignorewalk_cmd()
        .arg(temp.path())
        .assert()
        .success()
        .stdout("");

    temp.close()?;
    Ok(())
}

#[test]
fn test_missing_input_path_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    ignorewalk_cmd()
        .arg(temp.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to resolve input path"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_file_input_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    create_file(temp.path(), "file.txt", "")?;

    ignorewalk_cmd()
        .arg(temp.path().join("file.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));

    temp.close()?;
    Ok(())
}
