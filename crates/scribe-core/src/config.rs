//! Plugin-layer configuration.
//!
//! ## Learning: Serde Defaults
//!
//! `#[serde(default)]` fills missing fields from `Default::default()`, so a
//! config file only needs the keys the user wants to change.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::actions::TableDimensions;

/// Main configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// UI appearance settings
    pub ui: UiConfig,

    /// Table dialog settings
    pub table: TableConfig,

    /// String catalog settings
    pub locale: LocaleConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default config");
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "Loaded config");
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("scribe").join("config.toml"))
    }
}

/// Built-in color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

/// UI appearance configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Built-in theme
    pub theme: ThemeKind,

    /// JSON theme file that overrides `theme`
    pub theme_file: Option<PathBuf>,

    /// Base font size in points
    pub font_size: f32,

    /// Initial window width
    pub window_width: f32,

    /// Initial window height
    pub window_height: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeKind::Dark,
            theme_file: None,
            font_size: 14.0,
            window_width: 960.0,
            window_height: 640.0,
        }
    }
}

/// Table dialog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub default_rows: i64,
    pub default_columns: i64,
}

impl TableConfig {
    /// Default dimensions, clamped into the allowed range.
    pub fn defaults(&self) -> TableDimensions {
        TableDimensions::new(self.default_rows, self.default_columns)
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_rows: TableDimensions::DEFAULT as i64,
            default_columns: TableDimensions::DEFAULT as i64,
        }
    }
}

/// String catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// TOML catalog layered over the built-in English strings
    pub catalog: Option<PathBuf>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
