#![forbid(unsafe_code)]

//! Easing curves and size-pair interpolation.
//!
//! [`interpolate`] is the pure core of every resize transition: it maps a
//! time fraction onto an eased progress value and produces the intermediate
//! [`SizePair`]. The stateful driver lives in [`engine`].
//!
//! # Invariants
//!
//! 1. `t` is clamped to `[0.0, 1.0]` before easing.
//! 2. Only `left` is interpolated; `right` is derived, so every output sums
//!    to exactly 100.
//! 3. `interpolate(a, b, 0.0) == a` and `interpolate(a, b, 1.0) == b`.

pub mod engine;

use crate::size::SizePair;

/// Easing curve applied to the time fraction of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Cubic ease-in (accelerating).
    EaseIn,
    /// Cubic ease-out (decelerating).
    EaseOut,
    /// Cubic S-curve. Used for every pane transition by default.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a time fraction.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => ease_in_out_cubic(t),
        }
    }
}

/// `4t³` below the midpoint, `1 - (2 - 2t)³ / 2` above it.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

/// Intermediate size pair at time fraction `t` using the ease-in-out curve.
#[must_use]
pub fn interpolate(from: SizePair, to: SizePair, t: f64) -> SizePair {
    interpolate_with(Easing::EaseInOut, from, to, t)
}

/// Intermediate size pair at time fraction `t` using an explicit curve.
#[must_use]
pub fn interpolate_with(easing: Easing, from: SizePair, to: SizePair, t: f64) -> SizePair {
    let eased = easing.apply(t);
    let left = from.left() + (to.left() - from.left()) * eased;
    SizePair::exact(left.clamp(0.0, crate::size::TOTAL))
}
