//! Activation dispatch for inline buttons.
//!
//! Regular items run through the provider and then refresh the list, since
//! an action may change which items the row offers. The "more" button pushes
//! the row's submenu as a new step and never closes the popup.

use inlay_core::{InputEvent, KeepPopupOnPerform, PopupRow};

use super::InlineButtonOverlay;
use crate::button::ButtonKind;
use crate::host::{ButtonHitTester, ListHost, RowItemProvider};

/// A resolved button activation, ready to run once.
pub struct InlineActionDescriptor<'a> {
    kind: ButtonKind,
    keep_popup: KeepPopupOnPerform,
    action: Box<dyn FnOnce() + 'a>,
}

impl<'a> InlineActionDescriptor<'a> {
    pub fn new(
        kind: ButtonKind,
        keep_popup: KeepPopupOnPerform,
        action: impl FnOnce() + 'a,
    ) -> Self {
        Self {
            kind,
            keep_popup,
            action: Box::new(action),
        }
    }

    /// The slot this descriptor was resolved from.
    pub fn kind(&self) -> &ButtonKind {
        &self.kind
    }

    /// Close policy the host applies after `perform`.
    pub fn keep_popup(&self) -> KeepPopupOnPerform {
        self.keep_popup
    }

    pub fn perform(self) {
        (self.action)()
    }
}

impl std::fmt::Debug for InlineActionDescriptor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineActionDescriptor")
            .field("kind", &self.kind)
            .field("keep_popup", &self.keep_popup)
            .finish()
    }
}

impl<'a, P, H, G> InlineButtonOverlay<'a, P, H, G>
where
    P: RowItemProvider,
    H: ListHost,
    G: ButtonHitTester,
{
    /// Activation for button slot `index` on `row`.
    ///
    /// Returns None when the index no longer exists, which happens when the
    /// highlight is stale relative to a just-changed item list.
    pub fn get_inline_action(
        &self,
        row: &PopupRow,
        index: usize,
        event: Option<InputEvent>,
    ) -> Option<InlineActionDescriptor<'a>> {
        self.resolve_activations(row, event).into_iter().nth(index)
    }

    /// Activations for every button slot on `row`, in button order.
    pub fn resolve_activations(
        &self,
        row: &PopupRow,
        event: Option<InputEvent>,
    ) -> Vec<InlineActionDescriptor<'a>> {
        let Some(row) = self.eligible(row) else {
            return Vec::new();
        };

        let provider = self.provider;
        let list = self.list;

        let mut activations: Vec<InlineActionDescriptor<'a>> = provider
            .inline_items(row)
            .into_iter()
            .map(move |item| {
                let kind = ButtonKind::Inline(item.id.clone());
                InlineActionDescriptor::new(kind, item.keep_popup, move || {
                    tracing::debug!(action = item.id.as_ref(), "Performing inline action");
                    provider.perform(&item, event.as_ref());
                    provider.refresh(list);
                })
            })
            .collect();

        if self.has_more_button(row) {
            let parent = row.clone();
            activations.push(InlineActionDescriptor::new(
                ButtonKind::More,
                KeepPopupOnPerform::Always,
                move || {
                    let step = provider.resolve_submenu(&parent);
                    tracing::debug!(
                        row = parent.id.as_ref(),
                        rows = step.len(),
                        "Opening submenu from more button"
                    );
                    list.show_next_step(step, &parent);
                },
            ));
        }

        activations
    }
}
