//! Tooltip text for the highlighted button.

use inlay_core::PopupRow;

use super::InlineButtonOverlay;
use crate::host::{ButtonHitTester, ListHost, RowItemProvider};

impl<'a, P, H, G> InlineButtonOverlay<'a, P, H, G>
where
    P: RowItemProvider,
    H: ListHost,
    G: ButtonHitTester,
{
    /// Tooltip for the button highlighted on the selected `row`.
    ///
    /// The slot right after the last inline item is the "more" button. An
    /// index past that is a stale highlight and yields nothing.
    pub fn active_tooltip_text(&self, row: &PopupRow) -> Option<String> {
        let row = self.eligible(row)?;
        let active = self.list.active_button_index()?;
        let items = self.provider.inline_items(row);

        if active == items.len() {
            return Some(self.config.more_actions_label.clone());
        }
        items.into_iter().nth(active).map(|item| item.text)
    }
}
