#![forbid(unsafe_code)]

//! Drag/toggle controller for a collapsible two-pane split.
//!
//! [`SplitController`] receives live drag updates, drag release, and
//! explicit collapse/expand requests, and publishes the [`SizePair`] the
//! renderer should draw. It owns the resize animator and the collapsed
//! state.
//!
//! # State machine
//!
//! ```text
//!               drag < 15 / collapse()
//!   Expanded ─────────────────────────────▶ Collapsed
//!      ▲                                        │
//!      └────────────────────────────────────────┘
//!               drag > 15 / expand()
//!
//!   × { Idle, Animating }   drags are dropped while Animating
//! ```
//!
//! # Collapsed flag
//!
//! The authoritative flag ([`SplitController::is_collapsed`]) is written
//! synchronously before any animation starts, so a second drag event in the
//! same turn already sees the decided value and cannot re-trigger or
//! reverse the transition. The rendered copy
//! ([`SplitController::visible_collapsed`]) is a projection committed later,
//! by [`SplitController::commit_visible`] or on the next delivered frame.
//! Decision logic never reads it.
//!
//! # Invariants
//!
//! 1. Every published pair satisfies the size invariants and is rounded to
//!    two decimals.
//! 2. At most one animation is in flight; starting one cancels the other.
//! 3. The restore target is only written at drag release (left above the
//!    remember threshold while expanded) or when an expand animation
//!    completes.

use std::fmt;

use duopane_core::{
    FrameOutcome, FrameQueue, FrameScheduler, FrameToken, Rect, SizeAnimator, SizePair,
};

use crate::columns::{SplitColumns, split_columns};
use crate::config::SplitConfig;
use crate::hysteresis::{Transition, decide_at};

/// Expanded or collapsed primary pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneState {
    Expanded,
    Collapsed,
}

/// Whether a transition is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Idle,
    Animating,
}

/// Snapshot of the controller state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitPhase {
    pub pane: PaneState,
    pub motion: Motion,
}

type Observer = Box<dyn FnMut(SizePair)>;

/// Collapsible two-pane split controller.
pub struct SplitController<S = FrameQueue> {
    config: SplitConfig,
    scheduler: S,
    animator: SizeAnimator,
    sizes: SizePair,
    collapsed: bool,
    visible_collapsed: bool,
    last_open: SizePair,
    content_key: Option<String>,
    observer: Option<Observer>,
}

impl<S> fmt::Debug for SplitController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SplitController")
            .field("sizes", &self.sizes)
            .field("collapsed", &self.collapsed)
            .field("visible_collapsed", &self.visible_collapsed)
            .field("last_open", &self.last_open)
            .field("animating", &self.animator.is_running())
            .field("content_key", &self.content_key)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Construction and accessors
// ---------------------------------------------------------------------------

impl<S: FrameScheduler> SplitController<S> {
    /// Create an expanded, idle controller.
    #[must_use]
    pub fn new(config: SplitConfig, scheduler: S) -> Self {
        let expanded = config.expanded_target();
        Self {
            animator: SizeAnimator::new(config.easing),
            config,
            scheduler,
            sizes: expanded,
            collapsed: false,
            visible_collapsed: false,
            last_open: expanded,
            content_key: None,
            observer: None,
        }
    }

    /// Create a controller with [`SplitConfig::default`].
    #[must_use]
    pub fn with_defaults(scheduler: S) -> Self {
        Self::new(SplitConfig::default(), scheduler)
    }

    /// Register the sink that receives every published size pair.
    pub fn set_observer(&mut self, observer: impl FnMut(SizePair) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Last published size pair.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> SizePair {
        self.sizes
    }

    /// Restore target for [`expand`](Self::expand).
    #[inline]
    #[must_use]
    pub fn last_open(&self) -> SizePair {
        self.last_open
    }

    /// Authoritative collapsed flag.
    #[inline]
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Collapsed flag as last committed for rendering.
    #[inline]
    #[must_use]
    pub fn visible_collapsed(&self) -> bool {
        self.visible_collapsed
    }

    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    #[must_use]
    pub fn phase(&self) -> SplitPhase {
        SplitPhase {
            pane: if self.collapsed {
                PaneState::Collapsed
            } else {
                PaneState::Expanded
            },
            motion: if self.is_animating() {
                Motion::Animating
            } else {
                Motion::Idle
            },
        }
    }

    #[inline]
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    #[inline]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Project the current sizes onto a cell-grid area.
    #[must_use]
    pub fn columns(&self, area: Rect) -> SplitColumns {
        split_columns(area, self.sizes, &self.config.columns)
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

impl<S: FrameScheduler> SplitController<S> {
    /// Live drag update from the split primitive.
    ///
    /// Dropped while animating. Otherwise publishes the candidate and begins
    /// a transition the moment the threshold is crossed.
    pub fn on_drag(&mut self, candidate: SizePair) -> Option<Transition> {
        if self.is_animating() {
            tracing::trace!(%candidate, "drag dropped while animating");
            return None;
        }
        self.publish(candidate.rounded());
        self.apply_decision(candidate)
    }

    /// Drag release from the split primitive.
    ///
    /// Re-runs the threshold decision, then remembers the candidate as the
    /// restore target if the pane was expanded when released and is open
    /// enough. A release that expands a collapsed pane records nothing; the
    /// expand animation remembers its own target when it completes.
    pub fn on_drag_end(&mut self, candidate: SizePair) -> Option<Transition> {
        if self.is_animating() {
            tracing::trace!(%candidate, "drag end dropped while animating");
            return None;
        }
        let was_collapsed = self.collapsed;
        let transition = self.apply_decision(candidate);
        if !was_collapsed && candidate.left() > self.config.remember_threshold {
            self.last_open = candidate.rounded();
            tracing::debug!(last_open = %self.last_open, "restore target recorded");
        }
        transition
    }

    /// Collapse the primary pane, cancelling any running transition.
    pub fn collapse(&mut self) {
        self.animator.cancel(&mut self.scheduler);
        self.collapsed = true;
        self.visible_collapsed = true;
        let target = self.config.collapsed_target();
        tracing::debug!(from = %self.sizes, %target, "collapse requested");
        self.animate(self.sizes, target, false);
    }

    /// Expand the primary pane to the restore target, cancelling any running
    /// transition.
    pub fn expand(&mut self) {
        self.animator.cancel(&mut self.scheduler);
        self.collapsed = false;
        self.visible_collapsed = false;
        let target = self.last_open;
        tracing::debug!(from = %self.sizes, %target, "expand requested");
        self.animate(self.sizes, target, true);
    }

    /// [`expand`](Self::expand) if collapsed, else [`collapse`](Self::collapse).
    pub fn toggle(&mut self) {
        if self.collapsed {
            self.expand();
        } else {
            self.collapse();
        }
    }

    /// Return to the expanded defaults immediately, dropping any transition.
    pub fn reset(&mut self) {
        self.animator.cancel(&mut self.scheduler);
        let expanded = self.config.expanded_target();
        self.collapsed = false;
        self.visible_collapsed = false;
        self.last_open = expanded;
        tracing::debug!(sizes = %expanded, "split reset");
        self.publish(expanded);
    }

    /// Note that `key` is now the active primary content.
    ///
    /// Resets the split when `key` differs from the active one. Returns
    /// whether a reset happened.
    pub fn activate_content(&mut self, key: &str) -> bool {
        if self.content_key.as_deref() == Some(key) {
            return false;
        }
        tracing::debug!(key, "primary content changed");
        self.content_key = Some(key.to_owned());
        self.reset();
        true
    }

    /// Commit the collapsed flag for rendering.
    pub fn commit_visible(&mut self) {
        self.visible_collapsed = self.collapsed;
    }

    /// Deliver a refresh callback.
    ///
    /// Returns the published size, or `None` if the token belongs to a
    /// cancelled or replaced transition.
    pub fn on_frame(&mut self, token: FrameToken) -> Option<SizePair> {
        self.commit_visible();
        let outcome = self.animator.on_frame(&mut self.scheduler, token)?;
        let sizes = outcome.sizes();
        self.publish(sizes);
        if let FrameOutcome::Finished { remember: true, .. } = outcome {
            self.last_open = sizes;
        }
        Some(sizes)
    }

    fn apply_decision(&mut self, candidate: SizePair) -> Option<Transition> {
        let transition = decide_at(
            self.config.collapse_threshold,
            candidate.left(),
            self.collapsed,
        )?;
        // Flip before animating; the visible copy follows on a later turn.
        self.collapsed = transition.collapsed_after();
        let (target, remember) = match transition {
            Transition::ToCollapse => (self.config.collapsed_target(), false),
            Transition::ToExpand => (self.config.expanded_target(), true),
        };
        tracing::debug!(?transition, left = candidate.left(), "threshold crossed");
        self.animate(candidate.rounded(), target, remember);
        Some(transition)
    }

    fn animate(&mut self, from: SizePair, to: SizePair, remember: bool) -> bool {
        let duration = self.config.duration();
        self.animator
            .start(&mut self.scheduler, from, to, duration, remember)
    }

    fn publish(&mut self, sizes: SizePair) {
        self.sizes = sizes;
        if let Some(observer) = self.observer.as_mut() {
            observer(sizes);
        }
    }
}
