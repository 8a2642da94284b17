//! Error types for the Inlay overlay.

use thiserror::Error;

use crate::item::ActionId;

/// Overlay errors - provider contract violations surfaced to the render layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    /// A visible inline item has no icon for the row's selection state.
    #[error("null inline item icon for action '{action}' (selected: {selected})")]
    MissingIcon { action: ActionId, selected: bool },
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}
