//! Popup rows and steps.

use serde::{Deserialize, Serialize};

use crate::item::IconId;

/// Stable row identifier within a popup step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId(pub String);

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for RowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A row backed by an action. The only row kind that can carry inline buttons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    /// Identifier the item provider uses to look the row up.
    pub id: RowId,

    /// Primary display text.
    pub text: String,

    /// Leading icon, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconId>,
}

impl ActionRow {
    /// Create a new action row.
    pub fn new(id: impl Into<RowId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            icon: None,
        }
    }
}

/// One entry of a popup list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PopupRow {
    /// An action entry.
    Action(ActionRow),

    /// A divider between groups of entries.
    Separator {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
    },

    /// A non-actionable text entry.
    Plain { text: String },
}

impl PopupRow {
    /// Get the action row if this entry is one.
    pub fn as_action(&self) -> Option<&ActionRow> {
        match self {
            PopupRow::Action(row) => Some(row),
            PopupRow::Separator { .. } | PopupRow::Plain { .. } => None,
        }
    }
}

impl From<ActionRow> for PopupRow {
    fn from(row: ActionRow) -> Self {
        PopupRow::Action(row)
    }
}

/// A page of popup rows, shown as the popup itself or as a submenu.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupStep {
    /// Optional header title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rows in display order.
    pub rows: Vec<PopupRow>,
}

impl PopupStep {
    /// Create a step with a title.
    pub fn new(title: impl Into<String>, rows: Vec<PopupRow>) -> Self {
        Self {
            title: Some(title.into()),
            rows,
        }
    }

    /// Check if the step has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
