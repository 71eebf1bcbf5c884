//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Decimal places shown in text and table output
    #[serde(default = "default_precision")]
    pub precision: u32,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single summary line
    Text,
    /// JSON object
    Json,
    /// Table with the projected probability
    Table,
}

/// Upper bound for `precision`; components are stored at six places.
pub const MAX_PRECISION: u32 = 6;

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".sublogic").join("config.toml"))
    }

    /// Load configuration from the default path, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.settings.precision > MAX_PRECISION {
            return Err(CliError::Config(format!(
                "precision must be at most {}, got {}",
                MAX_PRECISION, self.settings.precision
            )));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
            precision: 3,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_precision() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
        assert_eq!(config.settings.precision, 3);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [settings]
            color = false
            format = "table"
            precision = 5
            "#
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.precision, 5);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nformat = \"json\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert_eq!(config.settings.precision, 3);
    }

    #[test]
    fn test_precision_too_large() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings]\nprecision = 9").unwrap();

        assert!(matches!(
            Config::load_from(file.path()),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[settings\nformat = ").unwrap();

        assert!(matches!(Config::load_from(file.path()), Err(CliError::Toml(_))));
    }
}
