//! Render-facing button list.

use inlay_core::{OverlayError, PopupRow};

use super::InlineButtonOverlay;
use crate::button::{ButtonKind, ExtraButton};
use crate::host::{ButtonHitTester, ListHost, RowItemProvider};

impl<'a, P, H, G> InlineButtonOverlay<'a, P, H, G>
where
    P: RowItemProvider,
    H: ListHost,
    G: ButtonHitTester,
{
    /// Buttons to draw on `row`.
    ///
    /// Unselected rows show only their always-visible items and never a
    /// highlight. Selected rows show every item plus the "more" button.
    ///
    /// Fails if a visible item has no icon for the row's selection state;
    /// that is a provider bug, not something to paint around.
    pub fn get_extra_buttons(
        &self,
        row: &PopupRow,
        is_selected: bool,
    ) -> Result<Vec<ExtraButton>, OverlayError> {
        let Some(row) = self.eligible(row) else {
            return Ok(Vec::new());
        };

        let items = self.provider.inline_items(row);
        let active_index = if is_selected {
            self.list.active_button_index()
        } else {
            None
        };

        let mut buttons = Vec::with_capacity(items.len() + 1);
        for (i, item) in items.iter().enumerate() {
            if !is_selected && !item.always_visible {
                continue;
            }

            let Some(icon) = item.icon_for(is_selected) else {
                tracing::error!(
                    row = row.id.as_ref(),
                    action = item.id.as_ref(),
                    "Inline item has no icon for selection state {}",
                    is_selected
                );
                return Err(OverlayError::MissingIcon {
                    action: item.id.clone(),
                    selected: is_selected,
                });
            };

            buttons.push(ExtraButton {
                kind: ButtonKind::Inline(item.id.clone()),
                icon: icon.clone(),
                active: active_index == Some(i),
            });
        }

        if is_selected && self.has_more_button(row) {
            // Applicability already requires a terminal row, so the arrow is
            // only reachable if that rule is relaxed.
            let icon = if self.provider.is_terminal(row) {
                &self.config.more_icon
            } else {
                &self.config.submenu_arrow_icon
            };
            buttons.push(ExtraButton {
                kind: ButtonKind::More,
                icon: icon.clone(),
                active: active_index == Some(buttons.len()),
            });
        }

        Ok(buttons)
    }
}

#[cfg(test)]
mod tests {
    use crate::button::{ButtonKind, ExtraButton};
    use crate::engine::InlineButtonOverlay;
    use crate::test_support::{action_row, item, list_host, strip, FakeProvider, FakeRow};
    use inlay_core::{ActionId, IconId, InlineItem, OverlayConfig, OverlayError, PopupRow};

    fn actives(buttons: &[ExtraButton]) -> Vec<bool> {
        buttons.iter().map(|b| b.active).collect()
    }

    #[test]
    fn test_unselected_row_shows_only_always_visible_items() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_items(vec![item("pinned").always_visible(), item("hidden")]),
        );
        let list = list_host(Some(0), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), false).unwrap();
        assert_eq!(
            buttons,
            vec![ExtraButton {
                kind: ButtonKind::Inline(ActionId::from("pinned")),
                icon: IconId::from("pinned"),
                active: false,
            }]
        );
    }

    #[test]
    fn test_selected_row_highlights_active_index() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_items(vec![item("a"), item("b"), item("c")]),
        );
        let list = list_host(Some(1), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), true).unwrap();
        assert_eq!(buttons.len(), 3);
        assert_eq!(actives(&buttons), vec![false, true, false]);
        assert!(buttons.iter().all(|b| !b.is_more()));
    }

    #[test]
    fn test_selected_row_appends_more_button_last() {
        let provider = FakeProvider::new()
            .with_row("row", FakeRow::with_submenu(vec![item("a"), item("b")]));
        let list = list_host(Some(2), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), true).unwrap();
        assert_eq!(buttons.len(), 3);
        assert_eq!(actives(&buttons), vec![false, false, true]);

        let more = &buttons[2];
        assert!(more.is_more());
        assert_eq!(more.icon, OverlayConfig::default().more_icon);
    }

    #[test]
    fn test_unselected_row_never_shows_more_or_highlight() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_submenu(vec![item("a").always_visible(), item("b").always_visible()]),
        );
        let list = list_host(Some(0), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), false).unwrap();
        assert_eq!(buttons.len(), 2);
        assert_eq!(actives(&buttons), vec![false, false]);
    }

    #[test]
    fn test_selected_icon_variant_used_on_selected_row() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_items(vec![item("a").with_selected_icon("a_selected").always_visible()]),
        );
        let list = list_host(None, false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());
        let row = action_row("row");

        let selected = overlay.get_extra_buttons(&row, true).unwrap();
        assert_eq!(selected[0].icon, IconId::from("a_selected"));

        let unselected = overlay.get_extra_buttons(&row, false).unwrap();
        assert_eq!(unselected[0].icon, IconId::from("a"));
    }

    #[test]
    fn test_missing_icon_is_an_error() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_items(vec![item("a"), InlineItem::new("broken", "Broken")]),
        );
        let list = list_host(None, false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let result = overlay.get_extra_buttons(&action_row("row"), true);
        assert_eq!(
            result,
            Err(OverlayError::MissingIcon {
                action: ActionId::from("broken"),
                selected: true,
            })
        );
    }

    #[test]
    fn test_missing_icon_on_hidden_item_is_ignored() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_items(vec![
                item("a").always_visible(),
                InlineItem::new("broken", "Broken"),
            ]),
        );
        let list = list_host(None, false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), false).unwrap();
        assert_eq!(buttons.len(), 1);
    }

    #[test]
    fn test_ineligible_row_has_empty_button_list() {
        let provider = FakeProvider::new();
        let list = list_host(Some(0), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay
            .get_extra_buttons(&PopupRow::Separator { text: None }, true)
            .unwrap();
        assert!(buttons.is_empty());

        let buttons = overlay.get_extra_buttons(&action_row("unknown"), true).unwrap();
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_disabled_overlay_renders_nothing() {
        let provider = FakeProvider::new().with_row(
            "row",
            FakeRow::with_submenu(vec![
                item("a").always_visible(),
                InlineItem::new("broken", "Broken"),
            ]),
        );
        let list = list_host(Some(0), false);
        let strip = strip();
        let config = OverlayConfig {
            enabled: false,
            ..OverlayConfig::default()
        };
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, config);
        let row = action_row("row");

        assert_eq!(overlay.get_extra_buttons(&row, true), Ok(Vec::new()));
        assert_eq!(overlay.get_extra_buttons(&row, false), Ok(Vec::new()));
    }

    #[test]
    fn test_buttons_serialize_for_render_dumps() {
        let provider =
            FakeProvider::new().with_row("row", FakeRow::with_submenu(vec![item("a")]));
        let list = list_host(Some(1), false);
        let strip = strip();
        let overlay = InlineButtonOverlay::new(&provider, &list, &strip, OverlayConfig::default());

        let buttons = overlay.get_extra_buttons(&action_row("row"), true).unwrap();
        let json = serde_json::to_value(&buttons).unwrap();
        assert_eq!(json[0]["kind"]["type"], "inline");
        assert_eq!(json[0]["kind"]["action"], "a");
        assert_eq!(json[1]["kind"]["type"], "more");
        assert_eq!(json[1]["icon"], "actions/more");
        assert_eq!(json[1]["active"], true);
    }
}
