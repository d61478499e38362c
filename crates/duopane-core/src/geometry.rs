#![forbid(unsafe_code)]

//! Geometric primitives.

/// A rectangle in cell coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Take `width` columns off the left edge, returning `(taken, rest)`.
    ///
    /// `width` is clamped to the available width.
    #[must_use]
    pub const fn split_left(&self, width: u16) -> (Rect, Rect) {
        let w = if width > self.width { self.width } else { width };
        (
            Rect::new(self.x, self.y, w, self.height),
            Rect::new(self.x.saturating_add(w), self.y, self.width - w, self.height),
        )
    }
}
