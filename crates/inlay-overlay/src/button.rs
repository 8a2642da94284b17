//! Render-facing inline buttons.

use serde::Serialize;

use inlay_core::{ActionId, IconId};

/// What a button slot does when activated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "action", rename_all = "snake_case")]
pub enum ButtonKind {
    /// Runs the inline item with this id.
    Inline(ActionId),
    /// Opens the row's submenu as a new step.
    More,
}

/// One button to draw on a row.
///
/// Derived on every query and never cached, since the row's inline items may
/// change between two paints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraButton {
    pub kind: ButtonKind,
    pub icon: IconId,
    /// Pointer or keyboard highlight.
    pub active: bool,
}

impl ExtraButton {
    pub fn is_more(&self) -> bool {
        self.kind == ButtonKind::More
    }
}
