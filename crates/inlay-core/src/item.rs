//! Inline items attached to popup rows.

use serde::{Deserialize, Serialize};

/// Identifier used to invoke an inline action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionId(pub String);

impl From<String> for ActionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ActionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ActionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icon identifier (resource path or named icon).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub String);

impl From<String> for IconId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for IconId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for IconId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether performing an inline action leaves the popup open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeepPopupOnPerform {
    /// Popup stays open whatever the outcome.
    Always,
    /// Popup stays open unless the action succeeded.
    UnlessSucceeded,
    /// Popup always closes.
    #[default]
    Never,
}

impl KeepPopupOnPerform {
    /// Decide whether the popup stays open after an action finished.
    pub fn keeps_open(self, succeeded: bool) -> bool {
        match self {
            KeepPopupOnPerform::Always => true,
            KeepPopupOnPerform::UnlessSucceeded => !succeeded,
            KeepPopupOnPerform::Never => false,
        }
    }
}

/// One inline action rendered as a small icon button on a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineItem {
    /// Identity passed back to the provider on perform.
    pub id: ActionId,

    /// Tooltip text.
    pub text: String,

    /// Icon for an unselected row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconId>,

    /// Icon for a selected row. Falls back to `icon`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_icon: Option<IconId>,

    /// Close policy applied after the action runs.
    #[serde(default)]
    pub keep_popup: KeepPopupOnPerform,

    /// Shown even when the owning row is not selected.
    #[serde(default)]
    pub always_visible: bool,
}

impl InlineItem {
    /// Create a new inline item with required fields.
    pub fn new(id: impl Into<ActionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            icon: None,
            selected_icon: None,
            keep_popup: KeepPopupOnPerform::default(),
            always_visible: false,
        }
    }

    /// Set the unselected icon.
    pub fn with_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the selected-row icon.
    pub fn with_selected_icon(mut self, icon: impl Into<IconId>) -> Self {
        self.selected_icon = Some(icon.into());
        self
    }

    /// Set the close policy.
    pub fn with_keep_popup(mut self, keep_popup: KeepPopupOnPerform) -> Self {
        self.keep_popup = keep_popup;
        self
    }

    /// Mark the item as visible on unselected rows.
    pub fn always_visible(mut self) -> Self {
        self.always_visible = true;
        self
    }

    /// Icon for the given row selection state.
    pub fn icon_for(&self, selected: bool) -> Option<&IconId> {
        if selected {
            self.selected_icon.as_ref().or(self.icon.as_ref())
        } else {
            self.icon.as_ref()
        }
    }
}
