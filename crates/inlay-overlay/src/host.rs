//! Collaborator contracts consumed by the overlay engine.
//!
//! The overlay owns no popup state. Everything it knows about a row comes
//! from a [`RowItemProvider`], everything it knows about the list widget from
//! a [`ListHost`], and pixel layout stays behind a [`ButtonHitTester`].
//!
//! All calls happen on the UI thread, so the traits take `&self` and
//! implementors that need to mutate use interior mutability.

use inlay_core::{ActionRow, InlineItem, InputEvent, Point, PopupStep, Rect};

/// Menu model that knows a row's inline items and submenu structure.
pub trait RowItemProvider {
    /// Inline items for the row, in display order.
    fn inline_items(&self, row: &ActionRow) -> Vec<InlineItem>;

    /// Whether choosing the row leads to another step.
    fn has_submenu(&self, row: &ActionRow) -> bool;

    /// Whether the row is a final step, i.e. its submenu holds only leaves.
    fn is_terminal(&self, row: &ActionRow) -> bool;

    /// Resolve the row as a submenu parent.
    fn resolve_submenu(&self, row: &ActionRow) -> PopupStep;

    /// Run an inline item.
    fn perform(&self, item: &InlineItem, event: Option<&InputEvent>);

    /// Re-query the displayed rows after an action may have changed them.
    fn refresh(&self, list: &dyn ListHost);
}

/// The list widget hosting the popup rows.
#[cfg_attr(test, mockall::automock)]
pub trait ListHost {
    /// Highlighted button slot on the selected row.
    ///
    /// None when nothing is highlighted or the list does not track inline
    /// buttons at all.
    fn active_button_index(&self) -> Option<usize>;

    /// Whether hovering a row opens its submenu.
    fn submenu_opens_on_hover(&self) -> bool;

    /// Open `step` as a child popup of `parent`.
    fn show_next_step(&self, step: PopupStep, parent: &ActionRow);

    /// Bounds of the row under `point`, if any.
    fn row_bounds_at(&self, point: Point) -> Option<Rect>;
}

/// Maps a point on a row to an inline button slot.
pub trait ButtonHitTester {
    /// Slot index under `point` for a row showing `button_count` buttons.
    fn button_index_at(
        &self,
        list: &dyn ListHost,
        button_count: usize,
        point: Point,
    ) -> Option<usize>;
}
