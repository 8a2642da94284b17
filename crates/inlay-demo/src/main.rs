//! Inlay demo - scripted popup session.
//!
//! Builds a small "Run" popup, then for every row: selects it, presses Enter
//! on the first inline button, sweeps the pointer across the button strip,
//! reports what the overlay would draw and show as tooltip, and clicks the
//! last highlighted button.

mod list;
mod model;

use inlay_core::{InputEvent, OverlayConfig, Point, PopupRow};
use inlay_overlay::{InlineButtonOverlay, TrailingButtonStrip};

use list::{DemoList, LIST_WIDTH};
use model::MenuModel;

// =============================================================================
// Configuration
// =============================================================================

/// Load overlay.toml, falling back to defaults on any error.
fn load_config() -> OverlayConfig {
    match OverlayConfig::load_or_default() {
        Ok(config) => {
            tracing::info!("Overlay config loaded (enabled: {})", config.enabled);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load overlay config: {} - using defaults", e);
            OverlayConfig::default()
        }
    }
}

// =============================================================================
// Session
// =============================================================================

type DemoOverlay<'a> = InlineButtonOverlay<'a, MenuModel, DemoList, TrailingButtonStrip>;

/// Move the pointer across a row from left to right, highlighting whatever
/// button sits under it. Returns the last slot that was hit.
fn sweep_row(
    overlay: &DemoOverlay<'_>,
    list: &DemoList,
    row: &PopupRow,
    index: usize,
) -> Option<usize> {
    let origin = list.row_origin(index);
    let mut last_hit = None;

    for x in (0..LIST_WIDTH).step_by(4) {
        let point = Point::new(x, origin.y);
        let hit = overlay.calc_button_index(Some(row), point);
        if hit.is_some() && hit != overlay.active_button_index() {
            list.set_active_button(hit);
            tracing::info!(
                x,
                slot = ?hit,
                more = hit.is_some_and(|slot| overlay.is_more_button(row, slot)),
                tooltip = ?overlay.active_tooltip_text(row),
                "Pointer entered inline button"
            );
        }
        last_hit = hit.or(last_hit);
    }

    last_hit
}

/// Run the action in `slot` as if triggered by `event`.
///
/// Returns whether the popup stays open afterwards.
fn activate(overlay: &DemoOverlay<'_>, row: &PopupRow, slot: usize, event: InputEvent) -> bool {
    let Some(action) = overlay.get_inline_action(row, slot, Some(event)) else {
        tracing::warn!(slot, "Highlighted button went away before activation");
        return true;
    };

    let keep_popup = action.keep_popup();
    tracing::info!(?action, kind = ?event.kind, "Activating highlighted button");
    action.perform();

    if keep_popup.keeps_open(true) {
        tracing::info!(state = ?overlay.overlay_state(row), "Popup stays open");
        true
    } else {
        tracing::info!("Popup closes");
        false
    }
}

/// Render a row, press Enter on its first button, then sweep and click.
fn exercise_row(overlay: &DemoOverlay<'_>, list: &DemoList, row: &PopupRow, index: usize) {
    list.select(index);

    let state = overlay.overlay_state(row);
    tracing::info!(row = ?list.selected(), ?state, "Selected row");
    if !overlay.has_extra_buttons(row) {
        return;
    }

    match overlay.get_extra_buttons(row, false) {
        Ok(buttons) => tracing::info!(row = index, count = buttons.len(), "Unselected rendering"),
        Err(e) => tracing::error!("Unselected rendering failed: {}", e),
    }

    // Keyboard: move the highlight onto the first button and press Enter.
    list.set_active_button(Some(0));
    tracing::info!(tooltip = ?overlay.active_tooltip_text(row), "Keyboard highlight");
    if !activate(overlay, row, 0, InputEvent::key_press()) {
        return;
    }

    let Some(slot) = sweep_row(overlay, list, row, index) else {
        return;
    };

    match overlay.get_extra_buttons(row, true) {
        Ok(buttons) => match serde_json::to_string(&buttons) {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("Failed to serialize buttons: {}", e),
        },
        Err(e) => {
            tracing::error!("Selected rendering failed: {}", e);
            return;
        }
    }

    activate(overlay, row, slot, InputEvent::click());
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Inlay demo starting...");

    let config = load_config();
    let strip = TrailingButtonStrip::from(config.strip);
    let model = MenuModel::sample();
    let list = DemoList::new(model.rows().len(), false);
    let overlay = InlineButtonOverlay::new(&model, &list, &strip, config);

    for (index, row) in model.rows().iter().enumerate() {
        exercise_row(&overlay, &list, row, index);
    }

    tracing::info!(
        refreshes = model.refresh_count(),
        steps = list.opened_steps().len(),
        "Session finished"
    );
}
