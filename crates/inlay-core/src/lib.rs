//! Core types for the Inlay popup overlay.
//!
//! This crate contains the data model shared by all Inlay crates:
//! - Popup rows, steps and their identifiers
//! - Inline items and their close-on-perform policy
//! - Input events and geometry primitives
//! - Configuration types
//! - Error types

mod config;
mod error;
mod input;
mod item;
mod row;

pub use config::{config_path, OverlayConfig, StripConfig};
pub use error::{ConfigError, OverlayError};
pub use input::{InputEvent, InputKind, Modifiers, Point, Rect};
pub use item::{ActionId, IconId, InlineItem, KeepPopupOnPerform};
pub use row::{ActionRow, PopupRow, PopupStep, RowId};
