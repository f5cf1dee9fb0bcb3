// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer point type.

use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Vec2;

/// A location in integer 2D space.
///
/// Points and vectors are kept distinct: a [`Point`] is a position, a
/// [`Vec2`] a displacement. They are related through the operator algebra
/// (`Point + Vec2 -> Point`, `Point - Point -> Vec2`) rather than through
/// ad-hoc translation methods.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// The x coordinate.
    pub x: i32,
    /// The y coordinate.
    pub y: i32,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a point at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point with both coordinates set to `v`.
    #[must_use]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    /// Returns `true` if this is the origin.
    #[must_use]
    pub const fn is_origin(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// The displacement carrying `self` onto `other`.
    #[must_use]
    pub const fn vector_to(self, other: Self) -> Vec2 {
        Vec2::new(other.x - self.x, other.y - self.y)
    }

    /// The point midway between `self` and `other`, rounded toward zero on
    /// each coordinate.
    #[must_use]
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Reinterprets this point as the displacement from the origin.
    #[must_use]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add<Vec2> for Point {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign<Vec2> for Point {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub<Vec2> for Point {
    type Output = Self;

    fn sub(self, rhs: Vec2) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign<Vec2> for Point {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Vec2};

    #[test]
    fn operator_algebra() {
        let p = Point::new(3, 4);
        let v = Vec2::new(10, -2);
        assert_eq!(p + v, Point::new(13, 2));
        assert_eq!((p + v) - v, p);
        assert_eq!(Point::new(13, 2) - p, v);

        let mut q = p;
        q += v;
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn vector_to_is_sub_reversed() {
        let a = Point::new(1, 1);
        let b = Point::new(4, -3);
        assert_eq!(a.vector_to(b), b - a);
    }

    #[test]
    fn midpoint_rounds_toward_zero() {
        assert_eq!(Point::ZERO.midpoint(Point::new(5, 5)), Point::new(2, 2));
        assert_eq!(Point::ZERO.midpoint(Point::new(-5, -5)), Point::new(-2, -2));
        assert_eq!(Point::new(2, 2).midpoint(Point::new(4, 6)), Point::new(3, 4));
    }

    #[test]
    fn origin_checks() {
        assert!(Point::ZERO.is_origin());
        assert!(!Point::splat(1).is_origin());
        assert_eq!(Point::from((7, 8)), Point::new(7, 8));
    }
}
