//! Hit testing for right-aligned inline button strips.

use inlay_core::{Point, StripConfig};

use crate::host::{ButtonHitTester, ListHost};

/// Buttons laid out left to right, flush against the row's right edge.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ Row text                [0]  [1]  [2]  inset │
/// └──────────────────────────────────────────────┘
///                          └w┘gap
/// ```
///
/// Points that fall in a gap, in the inset or left of the strip hit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailingButtonStrip {
    pub button_width: i32,
    pub gap: i32,
    pub right_inset: i32,
}

impl TrailingButtonStrip {
    pub fn new(button_width: i32, gap: i32, right_inset: i32) -> Self {
        Self {
            button_width,
            gap,
            right_inset,
        }
    }
}

impl From<StripConfig> for TrailingButtonStrip {
    fn from(config: StripConfig) -> Self {
        Self::new(config.button_width, config.gap, config.right_inset)
    }
}

impl Default for TrailingButtonStrip {
    fn default() -> Self {
        StripConfig::default().into()
    }
}

impl ButtonHitTester for TrailingButtonStrip {
    fn button_index_at(
        &self,
        list: &dyn ListHost,
        button_count: usize,
        point: Point,
    ) -> Option<usize> {
        if button_count == 0 || self.button_width <= 0 || self.gap < 0 {
            return None;
        }

        let bounds = list.row_bounds_at(point)?;
        if !bounds.contains(point) {
            return None;
        }

        // Strip values come from user config; any overflow means no hit.
        let count = i32::try_from(button_count).ok()?;
        let pitch = self.button_width.checked_add(self.gap)?;
        let strip_width = count.checked_mul(pitch)?.checked_sub(self.gap)?;
        let strip_right = bounds
            .x
            .checked_add(bounds.width)?
            .checked_sub(self.right_inset)?;
        let strip_left = strip_right.checked_sub(strip_width)?;

        if point.x < strip_left || point.x >= strip_right {
            return None;
        }

        let offset = point.x.checked_sub(strip_left)?;
        if offset % pitch >= self.button_width {
            return None;
        }

        usize::try_from(offset / pitch).ok()
    }
}
