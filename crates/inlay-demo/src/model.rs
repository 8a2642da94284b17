//! In-memory menu model for the demo popup.

use std::collections::HashMap;

use parking_lot::Mutex;

use inlay_core::{
    ActionRow, InlineItem, InputEvent, KeepPopupOnPerform, PopupRow, PopupStep, RowId,
};
use inlay_overlay::{ListHost, RowItemProvider};

/// Row data behind one popup entry.
#[derive(Debug, Clone, Default)]
struct RowData {
    items: Vec<InlineItem>,
    submenu: Option<PopupStep>,
    terminal: bool,
}

/// A small "Run" popup: configurations with inline run/debug buttons, a
/// pinnable recent-projects entry and a nested plugins submenu.
pub struct MenuModel {
    rows: Vec<PopupRow>,
    data: Mutex<HashMap<RowId, RowData>>,
    refreshes: Mutex<usize>,
}

impl MenuModel {
    pub fn sample() -> Self {
        let mut data = HashMap::new();

        data.insert(
            RowId::from("run-app"),
            RowData {
                items: vec![
                    InlineItem::new("debug-app", "Debug 'app'")
                        .with_icon("actions/start_debugger")
                        .with_selected_icon("actions/start_debugger_selected")
                        .always_visible(),
                    InlineItem::new("edit-app", "Edit Configuration")
                        .with_icon("actions/edit")
                        .with_keep_popup(KeepPopupOnPerform::UnlessSucceeded),
                ],
                ..RowData::default()
            },
        );
        data.insert(
            RowId::from("recent"),
            RowData {
                items: vec![pin_item(false)],
                submenu: Some(PopupStep::new(
                    "Recent Projects",
                    vec![
                        ActionRow::new("recent-inlay", "inlay").into(),
                        ActionRow::new("recent-notes", "notes").into(),
                    ],
                )),
                terminal: true,
            },
        );
        data.insert(
            RowId::from("plugins"),
            RowData {
                items: Vec::new(),
                submenu: Some(PopupStep::new("Plugins", Vec::new())),
                terminal: false,
            },
        );

        Self {
            rows: vec![
                ActionRow::new("run-app", "Run 'app'").into(),
                PopupRow::Separator { text: None },
                ActionRow::new("recent", "Recent Projects").into(),
                ActionRow::new("plugins", "Plugins").into(),
                PopupRow::Plain {
                    text: "No more configurations".to_string(),
                },
            ],
            data: Mutex::new(data),
            refreshes: Mutex::new(0),
        }
    }

    pub fn rows(&self) -> &[PopupRow] {
        &self.rows
    }

    pub fn refresh_count(&self) -> usize {
        *self.refreshes.lock()
    }

    fn row_data(&self, row: &ActionRow) -> RowData {
        self.data.lock().get(&row.id).cloned().unwrap_or_default()
    }
}

/// Pin toggles into unpin and back, so the row's items change after perform.
fn pin_item(pinned: bool) -> InlineItem {
    let item = if pinned {
        InlineItem::new("unpin", "Unpin Project").with_icon("actions/unpin")
    } else {
        InlineItem::new("pin", "Pin Project").with_icon("actions/pin")
    };
    item.with_keep_popup(KeepPopupOnPerform::Always)
}

impl RowItemProvider for MenuModel {
    fn inline_items(&self, row: &ActionRow) -> Vec<InlineItem> {
        self.row_data(row).items
    }

    fn has_submenu(&self, row: &ActionRow) -> bool {
        self.row_data(row).submenu.is_some()
    }

    fn is_terminal(&self, row: &ActionRow) -> bool {
        self.row_data(row).terminal
    }

    fn resolve_submenu(&self, row: &ActionRow) -> PopupStep {
        self.row_data(row).submenu.unwrap_or_default()
    }

    fn perform(&self, item: &InlineItem, event: Option<&InputEvent>) {
        tracing::info!(action = item.id.as_ref(), ?event, "Performed {}", item.text);

        let toggled = match item.id.as_ref() {
            "pin" => Some(true),
            "unpin" => Some(false),
            _ => None,
        };
        if let Some(pinned) = toggled {
            if let Some(recent) = self.data.lock().get_mut(&RowId::from("recent")) {
                recent.items = vec![pin_item(pinned)];
            }
        }
    }

    fn refresh(&self, list: &dyn ListHost) {
        *self.refreshes.lock() += 1;
        tracing::debug!(
            active = ?list.active_button_index(),
            "Refreshed popup rows"
        );
    }
}
