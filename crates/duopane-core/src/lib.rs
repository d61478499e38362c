#![forbid(unsafe_code)]

//! Core: size pairs, easing, frame scheduling, and the resize animator.
//!
//! # Role in Duopane
//! `duopane-core` holds the leaf primitives of the two-pane split. Nothing
//! here knows about collapse thresholds or drag gestures; that policy lives
//! in `duopane-layout`.
//!
//! # Primary responsibilities
//! - **SizePair**: left/right percentages that always sum to 100.
//! - **Easing / interpolate**: pure mapping from a time fraction to an
//!   intermediate size pair.
//! - **FrameScheduler**: the "next refresh" port, with a real and a manual
//!   clock.
//! - **SizeAnimator**: one cancellable transition at a time, driven frame by
//!   frame.

pub mod animation;
pub mod frame;
pub mod geometry;
pub mod size;

pub use animation::engine::{
    AnimationJob, DEFAULT_DURATION, DEFAULT_DURATION_MS, FrameOutcome, SizeAnimator,
};
pub use animation::{Easing, interpolate, interpolate_with};
pub use frame::{Clock, FrameQueue, FrameScheduler, FrameToken, ManualClock, SystemClock};
pub use geometry::Rect;
pub use size::{SIZE_TOLERANCE, SizePair};
