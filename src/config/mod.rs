//! Configuration management for branchpick

mod labels;

pub use labels::Labels;

use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// How often the branch list is re-read from git, in milliseconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_ms: u64,

    /// Event poll interval in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Width of the picker panel as a percentage of the terminal
    #[serde(default = "default_picker_width")]
    pub picker_width_percent: u16,

    /// Number of list lines visible before the picker scrolls
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: usize,

    /// Picker text
    #[serde(default)]
    pub labels: Labels,
}

/// Shortest accepted event poll interval.
const MIN_TICK_RATE_MS: u64 = 10;

const fn default_refresh_interval() -> u64 {
    2000
}

const fn default_tick_rate() -> u64 {
    100
}

const fn default_picker_width() -> u16 {
    60
}

const fn default_max_visible_rows() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval(),
            tick_rate_ms: default_tick_rate(),
            picker_width_percent: default_picker_width(),
            max_visible_rows: default_max_visible_rows(),
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("branchpick")
            .join("config.json")
    }

    /// Number of ticks between git refreshes (at least one).
    #[must_use]
    pub fn refresh_every_ticks(&self) -> u64 {
        (self.refresh_interval_ms / self.tick_rate_ms.max(1)).max(1)
    }

    fn normalized(mut self) -> Self {
        self.tick_rate_ms = self.tick_rate_ms.max(MIN_TICK_RATE_MS);
        self.picker_width_percent = self.picker_width_percent.clamp(20, 100);
        self.max_visible_rows = self.max_visible_rows.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.refresh_interval_ms, 2000);
        assert_eq!(config.tick_rate_ms, 100);
        assert_eq!(config.picker_width_percent, 60);
        assert_eq!(config.max_visible_rows, 10);
        assert_eq!(config.labels, Labels::default());
    }

    #[test]
    fn test_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"tick_rate_ms": 50, "labels": {"no_branches": "Nothing here"}}"#,
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.refresh_interval_ms, 2000);
        assert_eq!(config.labels.no_branches, "Nothing here");
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{not json")?;

        let err = Config::load_from(&config_path)
            .err()
            .ok_or("expected a parse error")?;
        assert!(format!("{err:#}").contains("Failed to parse config"));
        Ok(())
    }

    #[test]
    fn test_out_of_range_values_are_clamped() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"picker_width_percent": 400, "max_visible_rows": 0, "tick_rate_ms": 0}"#,
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.tick_rate_ms, MIN_TICK_RATE_MS);
        assert_eq!(config.picker_width_percent, 100);
        assert_eq!(config.max_visible_rows, 1);
        Ok(())
    }

    #[test]
    fn test_refresh_every_ticks() {
        let mut config = Config::default();
        assert_eq!(config.refresh_every_ticks(), 20);

        config.refresh_interval_ms = 10;
        assert_eq!(config.refresh_every_ticks(), 1);

        config.tick_rate_ms = 0;
        config.refresh_interval_ms = 300;
        assert_eq!(config.refresh_every_ticks(), 300);
    }

    #[test]
    fn test_default_path_suffix() {
        assert!(Config::default_path().ends_with("branchpick/config.json"));
    }
}
