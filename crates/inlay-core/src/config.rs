//! Configuration types.
//!
//! The overlay reads an optional `overlay.toml` from the Inlay config
//! directory. Every field has a default, so an empty or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::item::IconId;

/// Runtime configuration for the inline button overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Whether inline buttons are drawn at all for this UI mode.
    pub enabled: bool,

    /// Tooltip for the trailing "more" button.
    pub more_actions_label: String,

    /// Glyph for the "more" button on terminal rows.
    pub more_icon: IconId,

    /// Glyph for the "more" button on rows that lead to further steps.
    pub submenu_arrow_icon: IconId,

    /// Button strip geometry.
    pub strip: StripConfig,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            more_actions_label: "More Actions".to_string(),
            more_icon: IconId::from("actions/more"),
            submenu_arrow_icon: IconId::from("ide/menu_arrow"),
            strip: StripConfig::default(),
        }
    }
}

impl OverlayConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Load from the default location, or return defaults if no file exists.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Geometry of the right-aligned inline button strip, in list pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Width of one button slot.
    pub button_width: i32,

    /// Horizontal space between adjacent buttons.
    pub gap: i32,

    /// Space between the last button and the row's right edge.
    pub right_inset: i32,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            button_width: 22,
            gap: 2,
            right_inset: 6,
        }
    }
}

/// Get the path to overlay.toml.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("inlay/overlay.toml"))
}
