#![forbid(unsafe_code)]

//! Percentage size pairs for a two-pane split.
//!
//! A [`SizePair`] holds the width of the left (primary) and right
//! (secondary) panes as percentages of the container.
//!
//! # Invariants
//!
//! 1. `left + right == 100` within [`SIZE_TOLERANCE`].
//! 2. `0 <= left, right <= 100`.
//! 3. Only `left` is stored; `right` is always derived as `100 - left`, so
//!    the sum invariant holds exactly for every constructed value.
//!
//! # Failure Modes
//!
//! - Non-finite input: the finite half wins; if neither half is finite the
//!   pair falls back to [`SizePair::default`].
//! - Sum off by more than the tolerance: projected onto the nearest pair on
//!   the `left + right = 100` line, then clamped to `[0, 100]`.
//! - [`SizePair::exact`] out of range: clamped silently; NaN becomes the
//!   default.

use std::fmt;

/// Sum of both panes.
pub const TOTAL: f64 = 100.0;

/// Tolerance used for sum checks and pair equality.
pub const SIZE_TOLERANCE: f64 = 0.01;

const DEFAULT_LEFT: f64 = 60.0;

/// Left/right pane widths in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizePair {
    left: f64,
}

impl SizePair {
    /// Build a pair from a left percentage without logging.
    ///
    /// Intended for constants. Out-of-range values are clamped to `[0, 100]`
    /// and NaN maps to [`SizePair::default`], so no `SizePair` can break the
    /// size invariants. Runtime input goes through [`SizePair::new`] or
    /// [`SizePair::from_left`], which also warn.
    #[inline]
    #[must_use]
    pub const fn exact(left: f64) -> Self {
        let left = if left < 0.0 {
            0.0
        } else if left > TOTAL {
            TOTAL
        } else if left >= 0.0 {
            left
        } else {
            DEFAULT_LEFT
        };
        Self { left }
    }

    /// Build a pair from raw left/right values reported by a drag primitive.
    ///
    /// Malformed input is clamped to the nearest valid pair and logged.
    #[must_use]
    pub fn new(left: f64, right: f64) -> Self {
        if Self::is_well_formed(left, right) {
            return Self { left };
        }
        let pair = Self {
            left: project_left(left, right),
        };
        tracing::warn!(
            left,
            right,
            sanitized_left = pair.left,
            "malformed size pair clamped"
        );
        pair
    }

    /// Build a pair from the left percentage alone.
    #[must_use]
    pub fn from_left(left: f64) -> Self {
        Self::new(left, TOTAL - left)
    }

    /// Check whether a raw pair satisfies every size invariant.
    #[must_use]
    pub fn is_well_formed(left: f64, right: f64) -> bool {
        left.is_finite()
            && right.is_finite()
            && (0.0..=TOTAL).contains(&left)
            && (0.0..=TOTAL).contains(&right)
            && (left + right - TOTAL).abs() <= SIZE_TOLERANCE
    }

    /// Left (primary) pane width in percent.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Right (secondary) pane width in percent.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        TOTAL - self.left
    }

    /// Both halves as a tuple.
    #[inline]
    #[must_use]
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.left(), self.right())
    }

    /// Equality within [`SIZE_TOLERANCE`].
    #[inline]
    #[must_use]
    pub fn approx_eq(&self, other: SizePair) -> bool {
        (self.left - other.left).abs() <= SIZE_TOLERANCE
    }

    /// The pair rounded to two decimal places, as published to renderers.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            left: round2(self.left),
        }
    }
}

impl Default for SizePair {
    /// The expanded layout, `(60, 40)`.
    fn default() -> Self {
        Self::exact(DEFAULT_LEFT)
    }
}

impl From<(f64, f64)> for SizePair {
    fn from((left, right): (f64, f64)) -> Self {
        Self::new(left, right)
    }
}

impl fmt::Display for SizePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.left(), self.right())
    }
}

fn project_left(left: f64, right: f64) -> f64 {
    let projected = match (left.is_finite(), right.is_finite()) {
        (true, true) => (left + (TOTAL - right)) / 2.0,
        (true, false) => left,
        (false, true) => TOTAL - right,
        (false, false) => DEFAULT_LEFT,
    };
    projected.clamp(0.0, TOTAL)
}

/// Round to two decimal places.
#[inline]
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_pair_is_kept() {
        let pair = SizePair::new(72.0, 28.0);
        assert_eq!(pair.as_tuple(), (72.0, 28.0));
    }

    #[test]
    fn pair_within_tolerance_is_kept() {
        let pair = SizePair::new(33.33, 66.675);
        assert_eq!(pair.left(), 33.33);
    }

    #[test]
    fn sum_mismatch_projects_to_nearest() {
        let pair = SizePair::new(50.0, 60.0);
        assert!((pair.left() - 45.0).abs() < 1e-9);
        assert!((pair.right() - 55.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(SizePair::from_left(-12.0).left(), 0.0);
        assert_eq!(SizePair::from_left(140.0).left(), 100.0);
        assert_eq!(SizePair::new(120.0, 10.0).left(), 100.0);
    }

    #[test]
    fn non_finite_halves() {
        assert_eq!(SizePair::new(f64::NAN, 30.0).left(), 70.0);
        assert_eq!(SizePair::new(25.0, f64::INFINITY).left(), 25.0);
        assert_eq!(SizePair::new(f64::NAN, f64::NAN), SizePair::default());
    }

    #[test]
    fn exact_clamps_out_of_range() {
        assert_eq!(SizePair::exact(250.0).as_tuple(), (100.0, 0.0));
        assert_eq!(SizePair::exact(-3.0).as_tuple(), (0.0, 100.0));
        assert_eq!(SizePair::exact(f64::INFINITY).left(), 100.0);
        assert_eq!(SizePair::exact(f64::NEG_INFINITY).left(), 0.0);
        assert_eq!(SizePair::exact(f64::NAN), SizePair::default());
    }

    #[test]
    fn exact_keeps_valid_input() {
        const EDGE: SizePair = SizePair::exact(100.0);
        assert_eq!(EDGE.right(), 0.0);
        assert_eq!(SizePair::exact(0.0).left(), 0.0);
        assert_eq!(SizePair::exact(33.3).left(), 33.3);
    }

    #[test]
    fn rounding_keeps_sum() {
        let pair = SizePair::from_left(12.345_678).rounded();
        assert_eq!(pair.left(), 12.35);
        assert_eq!(round2(pair.left() + pair.right()), 100.0);
    }

    #[test]
    fn approx_eq_uses_tolerance() {
        let a = SizePair::exact(60.0);
        assert!(a.approx_eq(SizePair::exact(60.005)));
        assert!(!a.approx_eq(SizePair::exact(60.05)));
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(SizePair::exact(5.0).to_string(), "(5.00, 95.00)");
    }
}
