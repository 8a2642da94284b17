//! Fixed-height list host for the demo popup.

use parking_lot::Mutex;

use inlay_core::{ActionRow, Point, PopupStep, Rect};
use inlay_overlay::ListHost;

/// Height of one popup row in pixels.
pub const ROW_HEIGHT: i32 = 24;

/// Width of the popup list in pixels.
pub const LIST_WIDTH: i32 = 260;

/// Stand-in for the list widget: tracks selection, the highlighted inline
/// button and the steps opened from it.
pub struct DemoList {
    row_count: usize,
    submenu_on_hover: bool,
    selected: Mutex<Option<usize>>,
    active_button: Mutex<Option<usize>>,
    opened_steps: Mutex<Vec<PopupStep>>,
}

impl DemoList {
    pub fn new(row_count: usize, submenu_on_hover: bool) -> Self {
        Self {
            row_count,
            submenu_on_hover,
            selected: Mutex::new(None),
            active_button: Mutex::new(None),
            opened_steps: Mutex::new(Vec::new()),
        }
    }

    pub fn select(&self, index: usize) {
        *self.selected.lock() = Some(index);
        *self.active_button.lock() = None;
    }

    pub fn selected(&self) -> Option<usize> {
        *self.selected.lock()
    }

    pub fn set_active_button(&self, index: Option<usize>) {
        *self.active_button.lock() = index;
    }

    /// Center-left point of a row, in list coordinates.
    pub fn row_origin(&self, index: usize) -> Point {
        let y = i32::try_from(index)
            .ok()
            .and_then(|i| i.checked_mul(ROW_HEIGHT))
            .unwrap_or(i32::MAX);
        Point::new(0, y.saturating_add(ROW_HEIGHT / 2))
    }

    pub fn opened_steps(&self) -> Vec<PopupStep> {
        self.opened_steps.lock().clone()
    }
}

impl ListHost for DemoList {
    fn active_button_index(&self) -> Option<usize> {
        *self.active_button.lock()
    }

    fn submenu_opens_on_hover(&self) -> bool {
        self.submenu_on_hover
    }

    fn show_next_step(&self, step: PopupStep, parent: &ActionRow) {
        tracing::info!(
            parent = parent.id.as_ref(),
            title = step.title.as_deref().unwrap_or(""),
            rows = step.len(),
            "Opened submenu step"
        );
        self.opened_steps.lock().push(step);
    }

    fn row_bounds_at(&self, point: Point) -> Option<Rect> {
        if point.y < 0 || point.x < 0 || point.x >= LIST_WIDTH {
            return None;
        }
        let index = usize::try_from(point.y / ROW_HEIGHT).ok()?;
        if index >= self.row_count {
            return None;
        }
        Some(Rect::new(0, point.y / ROW_HEIGHT * ROW_HEIGHT, LIST_WIDTH, ROW_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bounds_at() {
        let list = DemoList::new(3, false);

        assert_eq!(
            list.row_bounds_at(Point::new(10, 30)),
            Some(Rect::new(0, 24, LIST_WIDTH, ROW_HEIGHT))
        );
        assert_eq!(list.row_bounds_at(Point::new(10, 72)), None);
        assert_eq!(list.row_bounds_at(Point::new(LIST_WIDTH, 5)), None);
        assert_eq!(list.row_bounds_at(Point::new(5, -1)), None);
    }

    #[test]
    fn test_row_origin_saturates_for_huge_indices() {
        let list = DemoList::new(3, false);

        assert_eq!(list.row_origin(1), Point::new(0, 36));
        assert_eq!(list.row_origin(usize::MAX), Point::new(0, i32::MAX));
        assert_eq!(
            list.row_origin(i32::MAX as usize / 2),
            Point::new(0, i32::MAX)
        );
    }

    #[test]
    fn test_select_clears_highlight() {
        let list = DemoList::new(3, false);
        list.select(0);
        list.set_active_button(Some(1));
        assert_eq!(list.active_button_index(), Some(1));

        list.select(2);
        assert_eq!(list.selected(), Some(2));
        assert_eq!(list.active_button_index(), None);
    }
}
