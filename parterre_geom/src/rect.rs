// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned integer rectangle.

use core::ops::{Add, Sub};

use crate::{Axis, Dir, Margins, Point, Size, Span, Vec2};

/// An axis-aligned rectangle given by two ordered corners.
///
/// The bounds satisfy `x0 <= x1` and `y0 <= y1`; constructors normalize
/// their inputs to maintain this. Rectangles with zero width or height
/// (including single points) are ordinary values, not errors.
///
/// As with [`Span`], containment of points is closed while overlap between
/// rectangles is open: a rectangle contains its boundary points, but two
/// rectangles sharing only an edge do not intersect.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// The min x bound.
    pub x0: i32,
    /// The min y bound.
    pub y0: i32,
    /// The max x bound. Never less than `x0`.
    pub x1: i32,
    /// The max y bound. Never less than `y0`.
    pub y1: i32,
}

impl Rect {
    /// The degenerate rectangle at the origin.
    pub const ZERO: Self = Self {
        x0: 0,
        y0: 0,
        x1: 0,
        y1: 0,
    };

    /// The unit square at the origin.
    pub const UNIT: Self = Self {
        x0: 0,
        y0: 0,
        x1: 1,
        y1: 1,
    };

    /// Creates a rectangle from two corners in any order.
    #[must_use]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, x1) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle with the given min corner and size.
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        size.to_rect_at(origin)
    }

    /// Creates a rectangle as the product of an x span and a y span.
    #[must_use]
    pub const fn from_spans(x: Span, y: Span) -> Self {
        Self {
            x0: x.min,
            y0: y.min,
            x1: x.max,
            y1: y.max,
        }
    }

    /// The degenerate rectangle covering a single point.
    #[must_use]
    pub const fn from_point(p: Point) -> Self {
        Self {
            x0: p.x,
            y0: p.y,
            x1: p.x,
            y1: p.y,
        }
    }

    /// The width, `x1 - x0`.
    #[must_use]
    pub const fn width(self) -> i32 {
        self.x1 - self.x0
    }

    /// The height, `y1 - y0`.
    #[must_use]
    pub const fn height(self) -> i32 {
        self.y1 - self.y0
    }

    /// The size of this rectangle.
    #[must_use]
    pub const fn size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// The min corner.
    #[must_use]
    pub const fn min_corner(self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The max corner.
    #[must_use]
    pub const fn max_corner(self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The x coordinate of the center, rounded toward zero.
    #[must_use]
    pub const fn center_x(self) -> i32 {
        (self.x0 + self.x1) / 2
    }

    /// The y coordinate of the center, rounded toward zero.
    #[must_use]
    pub const fn center_y(self) -> i32 {
        (self.y0 + self.y1) / 2
    }

    /// The center point.
    #[must_use]
    pub const fn center(self) -> Point {
        Point::new(self.center_x(), self.center_y())
    }

    /// The center point of the edge facing `dir`.
    ///
    /// For a zero-extent edge this is simply that corner point.
    #[must_use]
    pub const fn edge_center(self, dir: Dir) -> Point {
        match dir {
            Dir::NegX => Point::new(self.x0, self.center_y()),
            Dir::PosX => Point::new(self.x1, self.center_y()),
            Dir::NegY => Point::new(self.center_x(), self.y0),
            Dir::PosY => Point::new(self.center_x(), self.y1),
        }
    }

    /// Returns `true` if both extents are zero.
    #[must_use]
    pub const fn is_point(self) -> bool {
        self.x0 == self.x1 && self.y0 == self.y1
    }

    /// Returns `true` if this is a unit square.
    #[must_use]
    pub const fn is_unit(self) -> bool {
        self.x1 == self.x0 + 1 && self.y1 == self.y0 + 1
    }

    /// Returns `true` if either extent is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.x0 == self.x1 || self.y0 == self.y1
    }

    /// Returns `true` if `p` lies within the closed bounds.
    #[must_use]
    pub const fn contains(self, p: Point) -> bool {
        self.x0 <= p.x && p.x <= self.x1 && self.y0 <= p.y && p.y <= self.y1
    }

    /// Returns `true` if `other` lies entirely within this rectangle.
    #[must_use]
    pub const fn contains_rect(self, other: Self) -> bool {
        self.x0 <= other.x0 && self.x1 >= other.x1 && self.y0 <= other.y0 && self.y1 >= other.y1
    }

    /// Returns `true` if the rectangles' interiors meet.
    ///
    /// The test is open on both axes: sharing only an edge or a corner is
    /// not intersecting. A degenerate rectangle intersects exactly when it
    /// lies strictly inside the other on both axes.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }

    /// The common sub-rectangle, or `None` if the rectangles are disjoint.
    ///
    /// Touching rectangles intersect in a degenerate edge or corner.
    #[must_use]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let x = self.span_x().intersection(other.span_x())?;
        let y = self.span_y().intersection(other.span_y())?;
        Some(Self::from_spans(x, y))
    }

    /// The smallest rectangle containing both.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// The smallest rectangle containing this one and `p`.
    #[must_use]
    pub fn union_point(self, p: Point) -> Self {
        self.union(Self::from_point(p))
    }

    /// The projection onto the x axis.
    #[must_use]
    pub const fn span_x(self) -> Span {
        Span {
            min: self.x0,
            max: self.x1,
        }
    }

    /// The projection onto the y axis.
    #[must_use]
    pub const fn span_y(self) -> Span {
        Span {
            min: self.y0,
            max: self.y1,
        }
    }

    /// The projection onto the given axis.
    #[must_use]
    pub const fn span_on(self, axis: Axis) -> Span {
        match axis {
            Axis::X => self.span_x(),
            Axis::Y => self.span_y(),
        }
    }

    /// This rectangle translated so its min corner is the origin.
    #[must_use]
    pub const fn translated_to_origin(self) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: self.width(),
            y1: self.height(),
        }
    }

    /// This rectangle translated so its center coincides with `other`'s.
    ///
    /// Centers are integer midpoints, so the alignment is exact up to the
    /// usual rounding toward zero.
    #[must_use]
    pub fn centered_in(self, other: Self) -> Self {
        let d = Vec2::new(
            other.center_x() - self.center_x(),
            other.center_y() - self.center_y(),
        );
        self + d
    }

    /// This rectangle with both corners scaled by `s`.
    ///
    /// A negative factor mirrors through the origin; the result is
    /// normalized.
    #[must_use]
    pub const fn scaled(self, s: i32) -> Self {
        Self::new(self.x0 * s, self.y0 * s, self.x1 * s, self.y1 * s)
    }

    /// This rectangle resized to length `len` along `dir`'s axis, keeping
    /// the edge facing away from `dir` fixed and extending toward `dir`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is negative.
    #[must_use]
    pub const fn resized(self, dir: Dir, len: i32) -> Self {
        assert!(len >= 0, "negative len");
        let Self { x0, y0, x1, y1 } = self;
        match dir {
            Dir::NegX => Self {
                x0: x1 - len,
                y0,
                x1,
                y1,
            },
            Dir::PosX => Self {
                x0,
                y0,
                x1: x0 + len,
                y1,
            },
            Dir::NegY => Self {
                x0,
                y0: y1 - len,
                x1,
                y1,
            },
            Dir::PosY => Self {
                x0,
                y0,
                x1,
                y1: y0 + len,
            },
        }
    }
}

impl Add<Vec2> for Rect {
    type Output = Self;

    fn add(self, rhs: Vec2) -> Self {
        Self {
            x0: self.x0 + rhs.x,
            y0: self.y0 + rhs.y,
            x1: self.x1 + rhs.x,
            y1: self.y1 + rhs.y,
        }
    }
}

impl Sub<Vec2> for Rect {
    type Output = Self;

    fn sub(self, rhs: Vec2) -> Self {
        self + (-rhs)
    }
}

impl Add<Margins> for Rect {
    type Output = Self;

    /// Applies the margins' edge offsets; the result is normalized, so an
    /// inset deeper than the rectangle's extent yields a small normalized
    /// rectangle rather than an inverted one.
    fn add(self, rhs: Margins) -> Self {
        Self::new(
            self.x0 + rhs.x0,
            self.y0 + rhs.y0,
            self.x1 + rhs.x1,
            self.y1 + rhs.y1,
        )
    }
}

impl Sub<Margins> for Rect {
    type Output = Self;

    fn sub(self, rhs: Margins) -> Self {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Dir, Margins, Point, Rect, Size, Span, Vec2};

    #[test]
    fn constructors_normalize() {
        assert_eq!(Rect::new(10, 10, 0, 0), Rect::new(0, 0, 10, 10));
        assert_eq!(Rect::new(0, 10, 10, 0), Rect::new(0, 0, 10, 10));
        let r = Rect::from_origin_size(Point::new(2, 3), Size::new(4, 5));
        assert_eq!(r, Rect::new(2, 3, 6, 8));
        assert_eq!(Rect::from_spans(Span::new(0, 4), Span::new(1, 2)), Rect::new(0, 1, 4, 2));
    }

    #[test]
    fn degenerate_rects_are_values() {
        let p = Rect::from_point(Point::new(5, 5));
        assert!(p.is_point());
        assert!(p.is_degenerate());
        assert!(!p.is_unit());
        assert!(Rect::UNIT.is_unit());
        let line = Rect::new(0, 0, 0, 10);
        assert!(line.is_degenerate());
        assert!(!line.is_point());
        assert_eq!(line.size(), Size::new(0, 10));
    }

    #[test]
    fn closed_containment_open_overlap() {
        let r = Rect::new(0, 0, 10, 10);
        assert!(r.contains(Point::new(0, 10)));
        assert!(r.contains(Point::new(10, 10)));
        assert!(!r.contains(Point::new(11, 5)));
        assert!(r.contains_rect(Rect::new(0, 0, 10, 10)));
        assert!(!r.contains_rect(Rect::new(0, 0, 11, 10)));

        // Edge-sharing rectangles do not intersect...
        assert!(!r.intersects(Rect::new(10, 0, 20, 10)));
        // ...but their intersection is the shared degenerate edge.
        assert_eq!(
            r.intersection(Rect::new(10, 0, 20, 10)),
            Some(Rect::new(10, 0, 10, 10))
        );
        assert!(r.intersects(Rect::new(9, 9, 20, 20)));
        assert_eq!(r.intersection(Rect::new(20, 20, 30, 30)), None);
        // A degenerate rectangle intersects only strictly inside; never
        // itself, and never along a boundary.
        let line = Rect::new(2, 1, 2, 9);
        assert!(line.intersects(r));
        assert!(!line.intersects(line));
        assert!(!Rect::new(0, 0, 0, 10).intersects(r));
    }

    #[test]
    fn union_grows_minimally() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(5, -1, 6, 1);
        let u = a.union(b);
        assert_eq!(u, Rect::new(0, -1, 6, 2));
        assert!(u.contains_rect(a) && u.contains_rect(b));
        assert_eq!(a.union_point(Point::new(-3, 1)), Rect::new(-3, 0, 2, 2));
    }

    #[test]
    fn centers_and_edge_centers() {
        let r = Rect::new(0, 0, 10, 20);
        assert_eq!(r.center(), Point::new(5, 10));
        assert_eq!(r.edge_center(Dir::NegX), Point::new(0, 10));
        assert_eq!(r.edge_center(Dir::PosX), Point::new(10, 10));
        assert_eq!(r.edge_center(Dir::NegY), Point::new(5, 0));
        assert_eq!(r.edge_center(Dir::PosY), Point::new(5, 20));

        // Zero-width rect: the x edge centers coincide.
        let line = Rect::new(3, 0, 3, 10);
        assert_eq!(line.edge_center(Dir::NegX), Point::new(3, 5));
        assert_eq!(line.edge_center(Dir::PosX), Point::new(3, 5));
    }

    #[test]
    fn translation_operators() {
        let r = Rect::new(0, 0, 4, 4);
        let v = Vec2::new(2, -3);
        assert_eq!((r + v) - v, r);
        assert_eq!(r + v, Rect::new(2, -3, 6, 1));
        assert_eq!(Rect::new(7, 8, 9, 12).translated_to_origin(), Rect::new(0, 0, 2, 4));
    }

    #[test]
    fn margins_outset_inset() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r + Margins::uniform(2), Rect::new(-2, -2, 12, 12));
        assert_eq!(r - Margins::uniform(2), Rect::new(2, 2, 8, 8));
        // Over-inset collapses instead of inverting.
        let collapsed = r - Margins::uniform(8);
        assert!(collapsed.width() >= 0 && collapsed.height() >= 0);
    }

    #[test]
    fn centered_in_aligns_centers() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(0, 0, 10, 10).centered_in(outer);
        assert_eq!(inner.center(), outer.center());
        assert_eq!(inner.size(), Size::new(10, 10));
    }

    #[test]
    fn scaled_mirrors_through_origin() {
        let r = Rect::new(1, 2, 3, 4);
        assert_eq!(r.scaled(2), Rect::new(2, 4, 6, 8));
        assert_eq!(r.scaled(-1), Rect::new(-3, -4, -1, -2));
        assert_eq!(r.scaled(0), Rect::ZERO);
    }

    #[test]
    fn resized_anchors_trailing_edge() {
        let r = Rect::new(0, 0, 10, 10);
        assert_eq!(r.resized(Dir::PosX, 4), Rect::new(0, 0, 4, 10));
        assert_eq!(r.resized(Dir::NegX, 4), Rect::new(6, 0, 10, 10));
        assert_eq!(r.resized(Dir::PosY, 0), Rect::new(0, 0, 10, 0));
        assert_eq!(r.resized(Dir::NegY, 25), Rect::new(0, -15, 10, 10));
    }

    #[test]
    fn span_projections() {
        let r = Rect::new(1, 2, 3, 8);
        assert_eq!(r.span_x(), Span::new(1, 3));
        assert_eq!(r.span_y(), Span::new(2, 8));
        assert_eq!(r.span_on(Axis::Y), r.span_y());
    }
}
