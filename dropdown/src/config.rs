//! Dropdown configuration.
//!
//! Loaded from TOML; every field is optional and falls back to the default.
//!
//! ```toml
//! margin = 30
//! max_panel_height = 10
//! arrow_expanded = "▴"
//! arrow_collapsed = "▾"
//!
//! [theme]
//! accent = "#89b4fa"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use dropdom::Color;
use log::{debug, info};
use serde::{Deserialize, Deserializer};

use crate::dropdown::PANEL_MARGIN;
use crate::error::ConfigError;

/// Behaviour and appearance settings shared by dropdown instances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Columns kept free at the right edge of the viewport before the panel
    /// flips to right-aligned.
    pub margin: u16,
    /// Rows of content shown before the panel clips.
    pub max_panel_height: u16,
    /// Blank rows between the trigger and the panel.
    pub panel_offset: u16,
    pub arrow_expanded: String,
    pub arrow_collapsed: String,
    /// Spinner glyphs shown while loading, one per tick.
    pub loading_frames: Vec<String>,
    pub theme: Theme,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            margin: PANEL_MARGIN,
            max_panel_height: 10,
            panel_offset: 1,
            arrow_expanded: "▴".into(),
            arrow_collapsed: "▾".into(),
            loading_frames: ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]
                .into_iter()
                .map(String::from)
                .collect(),
            theme: Theme::default(),
        }
    }
}

impl DropdownConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&source)?;
        info!("Loaded dropdown config from {}", path.display());
        Ok(config)
    }

    /// Load from a file, using defaults when it does not exist.
    ///
    /// Other read or parse failures are still reported.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            other => other,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.loading_frames.is_empty() {
            return Err(ConfigError::Invalid(
                "loading_frames must not be empty".into(),
            ));
        }
        if self.max_panel_height == 0 {
            return Err(ConfigError::Invalid(
                "max_panel_height must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Colours used by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "hex_color")]
    pub background: Color,
    #[serde(deserialize_with = "hex_color")]
    pub border: Color,
    /// Focus ring and loading indicator.
    #[serde(deserialize_with = "hex_color")]
    pub accent: Color,
    #[serde(deserialize_with = "hex_color")]
    pub text: Color,
    /// Disabled text.
    #[serde(deserialize_with = "hex_color")]
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x1e, 0x1e, 0x2e),
            border: Color::rgb(0x58, 0x5b, 0x70),
            accent: Color::rgb(0x89, 0xb4, 0xfa),
            text: Color::rgb(0xcd, 0xd6, 0xf4),
            muted: Color::rgb(0x7f, 0x84, 0x9c),
        }
    }
}

fn hex_color<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
    let value = String::deserialize(deserializer)?;
    Color::hex(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid colour '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(DropdownConfig::from_toml("").unwrap(), DropdownConfig::default());
    }

    #[test]
    fn partial_theme_keeps_other_defaults() {
        let config = DropdownConfig::from_toml(
            r##"
            margin = 12

            [theme]
            accent = "#ff0000"
            "##,
        )
        .unwrap();

        assert_eq!(config.margin, 12);
        assert_eq!(config.theme.accent, Color::rgb(255, 0, 0));
        assert_eq!(config.theme.border, Theme::default().border);
        assert_eq!(config.max_panel_height, 10);
    }

    #[test]
    fn bad_colour_is_a_parse_error() {
        let err = DropdownConfig::from_toml("[theme]\ntext = \"blue\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("invalid colour"));
    }

    #[test]
    fn empty_frames_rejected() {
        let err = DropdownConfig::from_toml("loading_frames = []").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("dropdown-config-does-not-exist.toml");
        let config = DropdownConfig::load_or_default(&path).unwrap();
        assert_eq!(config, DropdownConfig::default());
    }

    #[test]
    fn missing_file_is_an_error_for_load() {
        let path = std::env::temp_dir().join("dropdown-config-does-not-exist.toml");
        assert!(matches!(
            DropdownConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }
}
