//! Configuration for mind-map conversion and row export.
//!
//! Configuration is stored in TOML. Every section and field is optional; missing
//! values fall back to the defaults shown below.
//!
//! ## Lookup Order
//!
//! 1. `$MINDCASE_CONFIG` if set
//! 2. Platform config directory (`~/.config/mindcase/config.toml` on Linux)
//! 3. Built-in defaults
//!
//! ## Example Configuration File
//!
//! ```toml
//! [convert]
//! default_separator = " "
//! valid_separators = "&>+/-"
//! precondition_separator = "\n"
//! summary_separator = "\n----\n"
//! ignore_chars = "#!！"
//! empty_placeholder = "无"
//! default_importance = 2
//!
//! [markers]
//! pass = ["symbol-right", "c_simbol-right"]
//! failed = ["symbol-wrong", "c_simbol-wrong"]
//! blocked = ["symbol-pause", "c_simbol-pause"]
//! skipped = ["symbol-minus", "c_simbol-minus"]
//!
//! [export]
//! owner = "july"
//! status = "Prepare"
//! edit_mode = "STEP"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "MINDCASE_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tree-to-model compiler settings
    pub convert: ConvertConfig,
    /// Marker vocabulary for test results
    pub markers: MarkerConfig,
    /// Tabular export settings
    pub export: ExportConfig,
}

/// Settings that drive the tree-to-model compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Separator used to join case titles when the sheet root names none.
    pub default_separator: String,

    /// Characters that, as the last character of a sheet root title, become
    /// that sheet's title separator.
    pub valid_separators: String,

    /// Joins numbered preconditions.
    pub precondition_separator: String,

    /// Joins ancestor comments into the case summary.
    pub summary_separator: String,

    /// Topics and text values starting with one of these characters are ignored.
    pub ignore_chars: String,

    /// Value used for preconditions or summary when the chain has none.
    pub empty_placeholder: String,

    /// Importance given to cases without a priority marker.
    pub default_importance: u8,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            default_separator: " ".to_string(),
            valid_separators: "&>+/-".to_string(),
            precondition_separator: "\n".to_string(),
            summary_separator: "\n----\n".to_string(),
            ignore_chars: "#!！".to_string(),
            empty_placeholder: "无".to_string(),
            default_importance: 2,
        }
    }
}

/// Marker identifiers recognized as test results.
///
/// Lists are consulted in the order pass, failed, blocked, skipped; the first
/// list containing one of a topic's markers decides the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Markers meaning the test passed
    pub pass: Vec<String>,
    /// Markers meaning the test failed
    pub failed: Vec<String>,
    /// Markers meaning the test is blocked
    pub blocked: Vec<String>,
    /// Markers meaning the test was skipped
    pub skipped: Vec<String>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            pass: vec!["symbol-right".to_string(), "c_simbol-right".to_string()],
            failed: vec!["symbol-wrong".to_string(), "c_simbol-wrong".to_string()],
            blocked: vec!["symbol-pause".to_string(), "c_simbol-pause".to_string()],
            skipped: vec!["symbol-minus".to_string(), "c_simbol-minus".to_string()],
        }
    }
}

/// Settings for the Zentao row exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Column headers, in output order. Must be known column names.
    pub columns: Vec<String>,
    /// Value of the owner column
    pub owner: String,
    /// Value of the status column
    pub status: String,
    /// Value of the edit mode column
    pub edit_mode: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            columns: crate::export::Column::ALL
                .iter()
                .map(|column| column.header().to_string())
                .collect(),
            owner: "july".to_string(),
            status: "Prepare".to_string(),
            edit_mode: "STEP".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `$MINDCASE_CONFIG` or the platform config
    /// directory, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            },
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {e}")))?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }

    /// Path of the config file that [`Config::load`] reads.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        directories::ProjectDirs::from("dev", "mindcase", "mindcase")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn validate(&self) -> Result<()> {
        if !(1..=4).contains(&self.convert.default_importance) {
            return Err(Error::Config(format!(
                "default_importance must be between 1 and 4, got {}",
                self.convert.default_importance
            )));
        }
        for header in &self.export.columns {
            header.parse::<crate::export::Column>()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_values() {
        // Given: Default configuration is requested
        let config = Config::default();

        // Then: Should match the conversion conventions
        assert_eq!(config.convert.default_separator, " ");
        assert_eq!(config.convert.valid_separators, "&>+/-");
        assert_eq!(config.convert.precondition_separator, "\n");
        assert_eq!(config.convert.summary_separator, "\n----\n");
        assert_eq!(config.convert.ignore_chars, "#!！");
        assert_eq!(config.convert.empty_placeholder, "无");
        assert_eq!(config.convert.default_importance, 2);
        assert_eq!(config.markers.pass[0], "symbol-right");
        assert_eq!(config.export.columns.len(), 13);
        assert_eq!(config.export.columns[0], "ID");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        // Given: A config that only overrides one field
        let config: Config = toml::from_str("[convert]\nsummary_separator = \" | \"\n").unwrap();

        // Then: Everything else keeps its default
        assert_eq!(config.convert.summary_separator, " | ");
        assert_eq!(config.convert.default_separator, " ");
        assert_eq!(config.markers, MarkerConfig::default());
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn test_config_save_and_load_roundtrip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let mut original = Config::default();
        original.convert.ignore_chars = "#".to_string();
        original.export.owner = "qa".to_string();

        original.save_to_path(&config_path)?;
        let loaded = Config::load_from_path(&config_path)?;

        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_config_load_missing_file() {
        let result = Config::load_from_path(Path::new("/definitely/does/not/exist/config.toml"));

        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to read config")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_parse_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("invalid.toml");
        fs::write(&config_path, "this is not valid toml [[[").unwrap();

        match Config::load_from_path(&config_path) {
            Err(Error::Config(msg)) => assert!(msg.contains("Failed to parse config")),
            other => panic!("Expected Config parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_config_rejects_unknown_column() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("columns.toml");
        fs::write(&config_path, "[export]\ncolumns = [\"ID\", \"Reviewer\"]\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();

        assert!(matches!(err, Error::UnknownColumn(ref name) if name == "Reviewer"));
    }

    #[test]
    fn test_config_rejects_out_of_range_importance() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("importance.toml");
        fs::write(&config_path, "[convert]\ndefault_importance = 7\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();

        assert_eq!(err.category(), "config");
    }
}
