//! Inline Button Overlay
//!
//! The overlay answers the list host's questions about a row's inline
//! buttons: how many there are, which one sits under the pointer, what they
//! look like, and what activating one does.
//!
//! ## Per-row State
//!
//! ```text
//!  not an action row / overlay disabled
//!        │
//!        ▼
//!   NoButtons ──► Items { n } ──► ItemsAndMore { n }
//!                 (n > 0)         (has submenu, no hover-open,
//!                                  final step)
//! ```
//!
//! The state is derived from the provider on every call and never stored,
//! so an action that changes a row's items or submenu is picked up by the
//! very next query.
//!
//! ## Button Order
//!
//! `[inline items in provider order] ++ [more button, if present]`

use inlay_core::{ActionRow, OverlayConfig, Point, PopupRow};

use crate::host::{ButtonHitTester, ListHost, RowItemProvider};

mod activation;
mod buttons;
mod tooltip;

pub use activation::InlineActionDescriptor;

// =============================================================================
// Overlay State
// =============================================================================

/// Which inline buttons a row carries right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Ineligible row, disabled overlay, or nothing to show.
    NoButtons,
    /// Only inline item buttons.
    Items { items: usize },
    /// Inline item buttons followed by a trailing "more" button.
    ItemsAndMore { items: usize },
}

impl OverlayState {
    /// Total number of button slots.
    pub fn button_count(self) -> usize {
        match self {
            OverlayState::NoButtons => 0,
            OverlayState::Items { items } => items,
            OverlayState::ItemsAndMore { items } => items + 1,
        }
    }

    /// Whether the last slot is a "more" button.
    pub fn has_more_button(self) -> bool {
        matches!(self, OverlayState::ItemsAndMore { .. })
    }
}

// =============================================================================
// Overlay Engine
// =============================================================================

/// Inline button overlay for one popup.
///
/// Borrows the popup's item provider, list host and hit tester; owns only its
/// configuration. Every operation recomputes from the collaborators.
pub struct InlineButtonOverlay<'a, P, H, G> {
    /// Menu model for the popup's current step.
    provider: &'a P,

    /// List widget showing the rows.
    list: &'a H,

    /// Layout-aware point to slot resolver.
    hit_tester: &'a G,

    config: OverlayConfig,
}

impl<'a, P, H, G> InlineButtonOverlay<'a, P, H, G>
where
    P: RowItemProvider,
    H: ListHost,
    G: ButtonHitTester,
{
    /// Create an overlay over the given collaborators.
    pub fn new(provider: &'a P, list: &'a H, hit_tester: &'a G, config: OverlayConfig) -> Self {
        Self {
            provider,
            list,
            hit_tester,
            config,
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The action row behind `row`, if the overlay applies to it at all.
    fn eligible<'r>(&self, row: &'r PopupRow) -> Option<&'r ActionRow> {
        if !self.config.enabled {
            return None;
        }
        row.as_action()
    }

    /// A "more" button is only drawn when hovering cannot open the submenu.
    fn has_more_button(&self, row: &ActionRow) -> bool {
        self.provider.has_submenu(row)
            && !self.list.submenu_opens_on_hover()
            && self.provider.is_terminal(row)
    }

    // =========================================================================
    // Count
    // =========================================================================

    /// Current button state of a row.
    pub fn overlay_state(&self, row: &PopupRow) -> OverlayState {
        let Some(row) = self.eligible(row) else {
            return OverlayState::NoButtons;
        };

        let items = self.provider.inline_items(row).len();
        if self.has_more_button(row) {
            OverlayState::ItemsAndMore { items }
        } else if items > 0 {
            OverlayState::Items { items }
        } else {
            OverlayState::NoButtons
        }
    }

    pub fn has_extra_buttons(&self, row: &PopupRow) -> bool {
        self.calc_extra_buttons_count(row) > 0
    }

    /// Number of button slots on a row, including the "more" button.
    pub fn calc_extra_buttons_count(&self, row: &PopupRow) -> usize {
        self.overlay_state(row).button_count()
    }

    /// Whether `index` is the row's "more" button.
    ///
    /// The "more" button is always the last slot. Rows without one answer
    /// false for every index, including the last.
    pub fn is_more_button(&self, row: &PopupRow, index: usize) -> bool {
        match self.overlay_state(row) {
            OverlayState::ItemsAndMore { items } => index == items,
            OverlayState::NoButtons | OverlayState::Items { .. } => false,
        }
    }

    // =========================================================================
    // Hit Testing
    // =========================================================================

    /// Button slot under `point` on `row`.
    ///
    /// Only the slot count comes from here; pixel layout belongs to the hit
    /// tester.
    pub fn calc_button_index(&self, row: Option<&PopupRow>, point: Point) -> Option<usize> {
        let row = row?;
        let count = self.calc_extra_buttons_count(row);
        if count == 0 {
            return None;
        }

        let index = self.hit_tester.button_index_at(self.list, count, point);
        tracing::trace!(?point, count, ?index, "Resolved inline button hit");
        index
    }

    /// Highlighted slot on the selected row, as tracked by the list host.
    pub fn active_button_index(&self) -> Option<usize> {
        self.list.active_button_index()
    }
}
