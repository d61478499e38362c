#![forbid(unsafe_code)]

//! Collapse/expand decision at a single threshold.
//!
//! The same threshold is used in both directions; the current collapsed
//! flag selects which side of it is meaningful. A pane that is expanded can
//! only collapse, and a collapsed pane can only expand, so a drag resting
//! exactly on the threshold never toggles.
//!
//! The decision reads the raw drag position. The animated size is only a
//! rendering target and is never consulted here.

use crate::config::COLLAPSE_THRESHOLD;

/// A transition the controller should begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Animate toward the collapsed target.
    ToCollapse,
    /// Animate toward the expanded target.
    ToExpand,
}

impl Transition {
    /// Collapsed flag after the transition is applied.
    #[inline]
    #[must_use]
    pub const fn collapsed_after(self) -> bool {
        matches!(self, Self::ToCollapse)
    }
}

/// Decide against the default threshold of 15%.
#[inline]
#[must_use]
pub fn decide(current_left: f64, collapsed: bool) -> Option<Transition> {
    decide_at(COLLAPSE_THRESHOLD, current_left, collapsed)
}

/// Decide against an explicit threshold.
///
/// Both comparisons are strict. Non-finite input never triggers.
#[must_use]
pub fn decide_at(threshold: f64, current_left: f64, collapsed: bool) -> Option<Transition> {
    if !collapsed && current_left < threshold {
        Some(Transition::ToCollapse)
    } else if collapsed && current_left > threshold {
        Some(Transition::ToExpand)
    } else {
        None
    }
}
