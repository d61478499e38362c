#![forbid(unsafe_code)]

//! Single-slot resize animator.
//!
//! [`SizeAnimator`] owns at most one [`AnimationJob`] and drives it one
//! refresh at a time through a [`FrameScheduler`]. Starting a job always
//! replaces the previous one; jobs are never queued or blended.
//!
//! # Lifecycle
//!
//! ```text
//! Idle --start(from != to)--> Running --last frame--> Idle
//!   ^                            |
//!   +--------cancel()------------+
//! ```
//!
//! # Invariants
//!
//! 1. At most one job and one pending [`FrameToken`] exist at any time.
//! 2. Only the current pending token advances the job; stale tokens from a
//!    cancelled or replaced job are ignored.
//! 3. The final frame yields the exact target, not an interpolated value.
//! 4. `cancel()` yields nothing: the last published size stays in place.
//!
//! # Failure Modes
//!
//! - Zero duration: the first delivered frame completes the job.
//! - Clock behind `started_at`: progress saturates at 0.

use std::time::Duration;

use web_time::Instant;

use super::{Easing, interpolate_with};
use crate::frame::{FrameScheduler, FrameToken};
use crate::size::SizePair;

/// Default transition length in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 260;

/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(DEFAULT_DURATION_MS);

/// One in-flight transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationJob {
    /// Size at the start of the transition.
    pub from: SizePair,
    /// Size at the end of the transition.
    pub to: SizePair,
    /// Scheduler time when the job started.
    pub started_at: Instant,
    /// Total transition length.
    pub duration: Duration,
    /// Whether `to` should become the restore target once reached.
    pub remember: bool,
}

impl AnimationJob {
    /// Time fraction in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }
}

/// Result of delivering a frame to the animator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// Intermediate size, rounded for publication. Another frame is pending.
    Progress(SizePair),
    /// The job reached its target and the animator is idle again.
    Finished {
        /// Exact target size.
        sizes: SizePair,
        /// Copied from [`AnimationJob::remember`].
        remember: bool,
    },
}

impl FrameOutcome {
    /// The size to publish for this frame.
    #[inline]
    #[must_use]
    pub fn sizes(&self) -> SizePair {
        match *self {
            Self::Progress(sizes) | Self::Finished { sizes, .. } => sizes,
        }
    }
}

/// Drives one [`AnimationJob`] at a time.
#[derive(Debug, Clone, Default)]
pub struct SizeAnimator {
    easing: Easing,
    job: Option<AnimationJob>,
    pending: Option<FrameToken>,
}

impl SizeAnimator {
    /// Create an idle animator using `easing`.
    #[must_use]
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            job: None,
            pending: None,
        }
    }

    /// Whether a job is in flight.
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.job.is_some()
    }

    /// The in-flight job, if any.
    #[inline]
    #[must_use]
    pub fn job(&self) -> Option<&AnimationJob> {
        self.job.as_ref()
    }

    /// Curve used for new jobs.
    #[inline]
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Start a transition from `from` to `to`.
    ///
    /// Cancels any running job first. Returns `false` without touching any
    /// state when `from` and `to` are equal within tolerance.
    pub fn start<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        from: SizePair,
        to: SizePair,
        duration: Duration,
        remember: bool,
    ) -> bool {
        if from.approx_eq(to) {
            tracing::trace!(%from, %to, "start skipped: already at target");
            return false;
        }
        self.cancel(scheduler);
        self.job = Some(AnimationJob {
            from,
            to,
            started_at: scheduler.now(),
            duration,
            remember,
        });
        self.pending = Some(scheduler.request_frame());
        tracing::debug!(%from, %to, ?duration, remember, "resize animation started");
        true
    }

    /// Drop the running job and its pending frame. No-op when idle.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(token) = self.pending.take() {
            scheduler.cancel_frame(token);
        }
        if let Some(job) = self.job.take() {
            tracing::debug!(to = %job.to, "resize animation cancelled");
        }
    }

    /// Advance the job for a delivered frame.
    ///
    /// Returns `None` for tokens this animator is not waiting on.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        scheduler: &mut S,
        token: FrameToken,
    ) -> Option<FrameOutcome> {
        if self.pending != Some(token) {
            tracing::trace!(token = token.id(), "stale frame ignored");
            return None;
        }
        self.pending = None;
        let job = self.job?;
        let t = job.progress_at(scheduler.now());

        if t < 1.0 {
            let sizes = interpolate_with(self.easing, job.from, job.to, t).rounded();
            self.pending = Some(scheduler.request_frame());
            tracing::trace!(t, %sizes, "resize frame");
            Some(FrameOutcome::Progress(sizes))
        } else {
            self.job = None;
            tracing::debug!(to = %job.to, "resize animation finished");
            Some(FrameOutcome::Finished {
                sizes: job.to,
                remember: job.remember,
            })
        }
    }
}
