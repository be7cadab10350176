//! Color themes for the plugin UI.
//!
//! ## Learning: `Copy` Palettes
//!
//! iced style functions are closures that must own what they capture. Keeping
//! the palette `Copy` lets every widget move its own copy into its style
//! closure without lifetimes leaking into the view.

use serde::{Deserialize, Serialize};
use std::path::Path;

use scribe_core::config::{ThemeKind, UiConfig};

/// Color representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Converts to iced Color.
    pub fn to_iced(&self) -> iced::Color {
        iced::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Colors used by dialogs, buttons and the document view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub surface: Color,
    pub hover: Color,
    /// Dim layer behind an open dialog
    pub backdrop: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub danger: Color,
    pub danger_hover: Color,
    pub on_accent: Color,
}

/// Editor plugin theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: String,

    /// Is this a dark theme?
    pub is_dark: bool,

    pub palette: Palette,
}

impl Theme {
    /// Creates the default dark theme.
    pub fn dark() -> Self {
        Self {
            name: "Scribe Dark".to_string(),
            is_dark: true,
            palette: Palette {
                background: Color::rgb(0.11, 0.11, 0.13),
                panel: Color::rgb(0.14, 0.14, 0.16),
                surface: Color::rgb(0.18, 0.18, 0.20),
                hover: Color::rgb(0.22, 0.22, 0.25),
                backdrop: Color::rgba(0.0, 0.0, 0.0, 0.5),
                border: Color::rgb(0.25, 0.25, 0.28),
                text: Color::rgb(0.93, 0.93, 0.93),
                text_secondary: Color::rgb(0.65, 0.65, 0.68),
                text_muted: Color::rgb(0.45, 0.45, 0.48),
                accent: Color::rgb(0.36, 0.54, 0.90),
                accent_hover: Color::rgb(0.40, 0.58, 0.95),
                danger: Color::rgb(0.75, 0.22, 0.22),
                danger_hover: Color::rgb(0.85, 0.25, 0.25),
                on_accent: Color::rgb(1.0, 1.0, 1.0),
            },
        }
    }

    /// Creates a light theme.
    pub fn light() -> Self {
        Self {
            name: "Scribe Light".to_string(),
            is_dark: false,
            palette: Palette {
                background: Color::rgb(1.0, 1.0, 1.0),
                panel: Color::rgb(0.97, 0.97, 0.97),
                surface: Color::rgb(0.92, 0.92, 0.92),
                hover: Color::rgb(0.88, 0.88, 0.88),
                backdrop: Color::rgba(0.0, 0.0, 0.0, 0.3),
                border: Color::rgb(0.85, 0.85, 0.85),
                text: Color::rgb(0.1, 0.1, 0.1),
                text_secondary: Color::rgb(0.3, 0.3, 0.3),
                text_muted: Color::rgb(0.5, 0.5, 0.5),
                accent: Color::rgb(0.2, 0.4, 0.8),
                accent_hover: Color::rgb(0.25, 0.45, 0.88),
                danger: Color::rgb(0.75, 0.2, 0.2),
                danger_hover: Color::rgb(0.85, 0.25, 0.25),
                on_accent: Color::rgb(1.0, 1.0, 1.0),
            },
        }
    }

    /// Picks the theme named by the UI config.
    ///
    /// A theme file that fails to load is logged and the built-in theme is used.
    pub fn from_config(config: &UiConfig) -> Self {
        let builtin = match config.theme {
            ThemeKind::Dark => Self::dark(),
            ThemeKind::Light => Self::light(),
        };

        match &config.theme_file {
            Some(path) => Self::load(path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Falling back to built-in theme");
                builtin
            }),
            None => builtin,
        }
    }

    /// Loads a theme from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// The matching iced base theme.
    pub fn iced_theme(&self) -> iced::Theme {
        if self.is_dark {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Theme loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid theme: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_picks_builtin() {
        let mut config = UiConfig::default();
        assert!(Theme::from_config(&config).is_dark);

        config.theme = ThemeKind::Light;
        assert!(!Theme::from_config(&config).is_dark);
    }

    #[test]
    fn test_theme_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, serde_json::to_string_pretty(&Theme::light()).unwrap()).unwrap();

        let config = UiConfig {
            theme_file: Some(path),
            ..UiConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.name, "Scribe Light");
        assert_eq!(theme.palette, Theme::light().palette);
    }

    #[test]
    fn test_broken_theme_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = UiConfig {
            theme_file: Some(path),
            ..UiConfig::default()
        };
        assert_eq!(Theme::from_config(&config).name, "Scribe Dark");
    }
}
