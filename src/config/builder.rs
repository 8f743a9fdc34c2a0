use super::{path_resolve::resolve_basedir, validation::validate_basedir, Config, ListOptions};
use crate::cli::Cli;
use anyhow::Result;
use std::path::PathBuf;

/// Builds a [`Config`] with a resolved, validated base directory.
///
/// # Examples
///
/// ```
/// use ignorewalk::ConfigBuilder;
///
/// let temp = tempfile::tempdir().unwrap();
/// let config = ConfigBuilder::new()
///     .basedir(temp.path())
///     .include_hidden(true)
///     .build()
///     .unwrap();
/// assert!(config.basedir.is_absolute());
/// assert!(config.include_hidden);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    basedir: Option<PathBuf>,
    include_hidden: bool,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder starting from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            basedir: Some(PathBuf::from(&cli.input_path)),
            include_hidden: cli.hidden,
        }
    }

    pub fn basedir(mut self, basedir: impl Into<PathBuf>) -> Self {
        self.basedir = Some(basedir.into());
        self
    }

    pub fn include_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Resolves the base directory (default `.`) and checks it is a directory.
    pub fn build(self) -> Result<Config> {
        let input = self.basedir.unwrap_or_else(|| PathBuf::from("."));
        let basedir = resolve_basedir(&input)?;
        validate_basedir(&basedir)?;
        log::debug!("Resolved base directory: {}", basedir.display());
        Ok(Config {
            basedir,
            include_hidden: self.include_hidden,
        })
    }
}

impl TryFrom<&Cli> for Config {
    type Error = anyhow::Error;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        ConfigBuilder::from_cli(cli).build()
    }
}

impl From<&Cli> for ListOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            relative: cli.relative,
            max_files: cli.max_files,
            null_terminated: cli.null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::errors::Error;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_basic_config_creation() -> Result<()> {
        let cli = Cli::parse_from(["ignorewalk", "."]);
        let config = Config::try_from(&cli)?;
        assert!(config.basedir.is_absolute());
        assert!(!config.include_hidden);

        let options = ListOptions::from(&cli);
        assert_eq!(options, ListOptions::default());
        Ok(())
    }

    #[test]
    fn test_cli_flags() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().to_string_lossy().into_owned();
        let cli = Cli::parse_from(["ignorewalk", &path, "--hidden", "-r", "-m", "3", "-0"]);
        let config = Config::try_from(&cli)?;
        assert!(config.include_hidden);
        assert_eq!(config.basedir, temp.path().canonicalize()?);

        let options = ListOptions::from(&cli);
        assert!(options.relative);
        assert_eq!(options.max_files, Some(3));
        assert!(options.null_terminated);
        Ok(())
    }

    #[test]
    fn test_builder_defaults_to_current_dir() -> Result<()> {
        let config = ConfigBuilder::new().build()?;
        assert_eq!(config.basedir, std::env::current_dir()?.canonicalize()?);
        Ok(())
    }

    #[test]
    fn test_builder_rejects_file() -> Result<()> {
        let temp = tempdir()?;
        let file = temp.path().join("a.txt");
        fs::write(&file, "a")?;
        let err = ConfigBuilder::new().basedir(&file).build().unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::Config(_))));
        Ok(())
    }
}
