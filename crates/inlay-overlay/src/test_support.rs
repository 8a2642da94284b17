//! Recording item provider and list host builders shared by engine tests.

use std::collections::HashMap;

use parking_lot::Mutex;

use inlay_core::{ActionId, ActionRow, InlineItem, InputEvent, PopupRow, PopupStep, RowId};

use crate::geometry::TrailingButtonStrip;
use crate::host::{ListHost, MockListHost, RowItemProvider};

/// Per-row data served by [`FakeProvider`].
#[derive(Debug, Clone, Default)]
pub struct FakeRow {
    pub items: Vec<InlineItem>,
    pub has_submenu: bool,
    pub terminal: bool,
    pub submenu: PopupStep,
}

impl FakeRow {
    pub fn with_items(items: Vec<InlineItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Row with a final-step submenu, the shape that gets a "more" button.
    pub fn with_submenu(items: Vec<InlineItem>) -> Self {
        Self {
            items,
            has_submenu: true,
            terminal: true,
            submenu: PopupStep::new("Submenu", Vec::new()),
        }
    }
}

/// Item provider backed by a map, recording every perform and refresh.
#[derive(Default)]
pub struct FakeProvider {
    rows: Mutex<HashMap<RowId, FakeRow>>,
    pub performed: Mutex<Vec<(ActionId, Option<InputEvent>)>>,
    pub refreshes: Mutex<usize>,
    pub resolved: Mutex<Vec<RowId>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_row(self, id: &str, row: FakeRow) -> Self {
        self.set_row(id, row);
        self
    }

    pub fn set_row(&self, id: &str, row: FakeRow) {
        self.rows.lock().insert(RowId::from(id), row);
    }

    fn row(&self, row: &ActionRow) -> FakeRow {
        self.rows.lock().get(&row.id).cloned().unwrap_or_default()
    }
}

impl RowItemProvider for FakeProvider {
    fn inline_items(&self, row: &ActionRow) -> Vec<InlineItem> {
        self.row(row).items
    }

    fn has_submenu(&self, row: &ActionRow) -> bool {
        self.row(row).has_submenu
    }

    fn is_terminal(&self, row: &ActionRow) -> bool {
        self.row(row).terminal
    }

    fn resolve_submenu(&self, row: &ActionRow) -> PopupStep {
        self.resolved.lock().push(row.id.clone());
        self.row(row).submenu
    }

    fn perform(&self, item: &InlineItem, event: Option<&InputEvent>) {
        self.performed.lock().push((item.id.clone(), event.copied()));
    }

    fn refresh(&self, _list: &dyn ListHost) {
        *self.refreshes.lock() += 1;
    }
}

/// List host with a fixed highlight and hover behavior.
pub fn list_host(active: Option<usize>, hover: bool) -> MockListHost {
    let mut list = MockListHost::new();
    list.expect_active_button_index().return_const(active);
    list.expect_submenu_opens_on_hover().return_const(hover);
    list
}

pub fn action_row(id: &str) -> PopupRow {
    PopupRow::Action(ActionRow::new(id, id))
}

pub fn item(id: &str) -> InlineItem {
    InlineItem::new(id, format!("{id} text")).with_icon(id)
}

pub fn strip() -> TrailingButtonStrip {
    TrailingButtonStrip::default()
}
