// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-negative dimension pair.

use crate::{Axis, Point, Rect};

/// A width/height pair; both dimensions are non-negative.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    /// The width. Never negative.
    pub width: i32,
    /// The height. Never negative.
    pub height: i32,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    /// Creates a size.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is negative.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        assert!(width >= 0, "negative width");
        assert!(height >= 0, "negative height");
        Self { width, height }
    }

    /// Creates a square size.
    ///
    /// # Panics
    ///
    /// Panics if `side` is negative.
    #[must_use]
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    /// Returns `true` if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns `true` if either dimension is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// The area, widened to avoid overflow.
    #[must_use]
    pub const fn area(self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// The extent on the given axis.
    #[must_use]
    pub const fn dimension(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Returns `true` if this size covers `other` on both axes.
    #[must_use]
    pub const fn covers(self, other: Self) -> bool {
        self.width >= other.width && self.height >= other.height
    }

    /// The componentwise maximum: the smallest size covering both.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// This size as a rectangle anchored at the origin.
    #[must_use]
    pub const fn to_rect(self) -> Rect {
        self.to_rect_at(Point::ZERO)
    }

    /// This size as a rectangle whose min corner is `origin`.
    #[must_use]
    pub const fn to_rect_at(self, origin: Point) -> Rect {
        Rect {
            x0: origin.x,
            y0: origin.y,
            x1: origin.x + self.width,
            y1: origin.y + self.height,
        }
    }
}
