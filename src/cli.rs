// src/cli.rs

use clap::Parser;

/// Lists the files below a directory, honoring `.gitignore` files.
///
/// ignorewalk walks the directory depth-first. Every directory may carry its
/// own `.gitignore`; its rules apply to that directory's subtree on top of
/// the rules of its ancestors. Hidden entries (names starting with `.`) are
/// skipped unless --hidden is given.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to walk.
    #[arg(default_value = ".")]
    pub input_path: String,

    /// Include hidden files and directories (names starting with '.').
    #[arg(short = 'H', long, action = clap::ArgAction::SetTrue)]
    pub hidden: bool,

    /// Print paths relative to the input directory.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub relative: bool,

    /// Stop after listing this many files.
    #[arg(short = 'm', long, value_name = "COUNT")]
    pub max_files: Option<usize>,

    /// Terminate each path with a NUL byte instead of a newline.
    #[arg(short = '0', long, action = clap::ArgAction::SetTrue)]
    pub null: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ignorewalk"]);
        assert_eq!(cli.input_path, ".");
        assert!(!cli.hidden);
        assert!(!cli.relative);
        assert_eq!(cli.max_files, None);
        assert!(!cli.null);
    }

    #[test]
    fn test_max_files_must_be_a_number() {
        let result = Cli::try_parse_from(["ignorewalk", ".", "--max-files", "many"]);
        assert!(result.is_err());
    }
}
