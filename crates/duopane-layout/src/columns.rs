#![forbid(unsafe_code)]

//! Projection of a size pair onto cell columns.
//!
//! Renderers that lay panes out on a cell grid call [`split_columns`] with
//! the published [`SizePair`]. The gutter is carved out first, the remaining
//! width is split by percentage, then both panes are raised to their
//! minimum widths where the area allows. When both minimums cannot fit, the
//! right pane's minimum wins.
//!
//! # Invariants
//!
//! 1. `left.width + gutter.width + right.width == area.width`.
//! 2. The three rects are adjacent, in order, and share the area's row span.

use duopane_core::{Rect, SizePair};
use serde::{Deserialize, Serialize};

/// Gutter and minimum widths, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSpec {
    /// Width of the drag handle between panes.
    pub gutter: u16,
    /// Minimum width of the primary pane.
    pub min_left: u16,
    /// Minimum width of the secondary pane.
    pub min_right: u16,
}

impl Default for ColumnSpec {
    fn default() -> Self {
        Self {
            gutter: 1,
            min_left: 4,
            min_right: 12,
        }
    }
}

/// Cell rects for both panes and the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitColumns {
    pub left: Rect,
    pub gutter: Rect,
    pub right: Rect,
}

/// Lay out `sizes` across `area`.
#[must_use]
pub fn split_columns(area: Rect, sizes: SizePair, spec: &ColumnSpec) -> SplitColumns {
    let gutter = spec.gutter.min(area.width);
    let available = area.width - gutter;

    let share = (f64::from(available) * sizes.left() / 100.0).round();
    let mut left = (share as u16).min(available);
    left = left.max(spec.min_left.min(available));
    if available - left < spec.min_right {
        left = available.saturating_sub(spec.min_right);
    }

    let (left_rect, rest) = area.split_left(left);
    let (gutter_rect, right_rect) = rest.split_left(gutter);
    SplitColumns {
        left: left_rect,
        gutter: gutter_rect,
        right: right_rect,
    }
}
