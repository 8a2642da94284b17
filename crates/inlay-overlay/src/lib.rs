//! Inline button overlay engine for list popups.
//!
//! This crate decides, per visible popup row, which inline buttons are drawn,
//! which one sits under the pointer, and what activating one does:
//! - `InlineButtonOverlay` answers count, hit-test, render, activation and
//!   tooltip queries
//! - `RowItemProvider`, `ListHost` and `ButtonHitTester` are the seams to the
//!   menu model, the list widget and the layout code
//! - `TrailingButtonStrip` is a hit tester for right-aligned button strips

pub mod button;
pub mod engine;
pub mod geometry;
pub mod host;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use button::{ButtonKind, ExtraButton};
pub use engine::{InlineActionDescriptor, InlineButtonOverlay, OverlayState};
pub use geometry::TrailingButtonStrip;
pub use host::{ButtonHitTester, ListHost, RowItemProvider};

// Re-export inlay_core types for convenience
pub use inlay_core::{
    ActionRow, InlineItem, InputEvent, KeepPopupOnPerform, OverlayConfig, OverlayError, Point,
    PopupRow, PopupStep,
};
