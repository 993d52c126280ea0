//! Configuration management for tugboat-calc
//!
//! Config stored at: ~/.config/tugboat-calc/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tugboat_types::{ConfigError, OutputFormat, Result};

/// Narrowest console report that still fits the fixed-width tables
pub const MIN_REPORT_WIDTH: usize = 72;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,

    /// Write single-line JSON instead of indented JSON
    #[serde(default)]
    pub compact_json: bool,

    /// Directory for exported files when no explicit path is given
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Width of section banners in the console report
    #[serde(default = "default_report_width")]
    pub report_width: usize,
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_report_width() -> usize {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: default_output_format(),
            compact_json: false,
            output_dir: None,
            report_width: default_report_width(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tugboat-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from a specific file, or fall back to defaults when absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.report_width < MIN_REPORT_WIDTH {
            return Err(ConfigError::InvalidValue(format!(
                "report_width must be at least {} (got {})",
                MIN_REPORT_WIDTH, self.report_width
            ))
            .into());
        }
        Ok(())
    }

    /// Resolve where an export with the given file name should go
    pub fn output_path(&self, explicit: Option<PathBuf>, file_name: &str) -> PathBuf {
        match explicit {
            Some(path) => path,
            None => match &self.output_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            },
        }
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tugboat Calculator Configuration")?;
        writeln!(f, "================================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        writeln!(f, "Compact JSON:   {}", self.compact_json)?;
        writeln!(
            f,
            "Output dir:     {}",
            self.output_dir
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(current directory)".to_string())
        )?;
        writeln!(f, "Report width:   {}", self.report_width)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tugboat_types::Error;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.report_width, 80);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"output_format": "json"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(!config.compact_json);
        assert_eq!(config.report_width, 80);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            output_format: OutputFormat::Json,
            compact_json: true,
            output_dir: Some(dir.path().to_path_buf()),
            report_width: 100,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_rejects_narrow_report() {
        let config = Config {
            report_width: 40,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_output_path_resolution() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/reports")),
            ..Config::default()
        };
        assert_eq!(
            config.output_path(None, "tugboat_results.json"),
            PathBuf::from("/tmp/reports/tugboat_results.json")
        );
        assert_eq!(
            config.output_path(Some(PathBuf::from("out.json")), "tugboat_results.json"),
            PathBuf::from("out.json")
        );
        assert_eq!(
            Config::default().output_path(None, "a.xlsx"),
            PathBuf::from("a.xlsx")
        );
    }
}
