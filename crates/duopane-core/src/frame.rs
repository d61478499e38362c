#![forbid(unsafe_code)]

//! Frame scheduling port.
//!
//! The resize animator never talks to a display loop directly. It asks a
//! [`FrameScheduler`] for the next refresh and receives an opaque
//! [`FrameToken`]; the host hands that token back when the refresh fires.
//!
//! [`FrameQueue`] is the concrete scheduler. Pair it with [`SystemClock`]
//! in production and with [`ManualClock`] in tests, where time only moves
//! when the test calls [`ManualClock::advance`].
//!
//! # Usage
//!
//! ```ignore
//! let mut queue = FrameQueue::new(SystemClock);
//! // once per display refresh:
//! for token in queue.take_due() {
//!     controller.on_frame(token);
//! }
//! ```
//!
//! # Invariants
//!
//! 1. Tokens are unique for the lifetime of a queue.
//! 2. A cancelled token is never returned by [`FrameQueue::take_due`].
//! 3. Cancelling an unknown or already delivered token is a no-op.

use std::time::Duration;

use web_time::Instant;

/// Handle for one requested refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(u64);

impl FrameToken {
    /// Raw token id.
    #[inline]
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Monotonic time source.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Real monotonic clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Virtual clock that only moves when told to.
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Duration,
}

impl ManualClock {
    /// Create a clock frozen at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    /// Move virtual time forward.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Total virtual time elapsed since creation.
    #[inline]
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.elapsed
    }
}

/// "Run once before the next refresh" and "cancel a pending one".
pub trait FrameScheduler {
    /// Current time as seen by the scheduler.
    fn now(&self) -> Instant;

    /// Request a callback at the next refresh.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancel a pending request. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);
}

/// Queue of pending refresh requests, drained by the host once per refresh.
#[derive(Debug, Clone)]
pub struct FrameQueue<C = SystemClock> {
    clock: C,
    next_id: u64,
    pending: Vec<FrameToken>,
}

impl<C: Clock> FrameQueue<C> {
    /// Create an empty queue over `clock`.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Drain every token due at this refresh, in request order.
    ///
    /// Tokens requested while the returned batch is being delivered land in
    /// the next batch.
    pub fn take_due(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending)
    }

    /// Number of outstanding requests.
    #[inline]
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Whether nothing is waiting for a refresh.
    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// The underlying clock.
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock (advance a [`ManualClock`]).
    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

impl<C: Clock + Default> Default for FrameQueue<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: Clock> FrameScheduler for FrameQueue<C> {
    fn now(&self) -> Instant {
        self.clock.now()
    }

    fn request_frame(&mut self) -> FrameToken {
        let token = FrameToken(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending.push(token);
        token
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        self.pending.retain(|t| *t != token);
    }
}
