// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The four cardinal directions and their orderings.

use core::cmp::Ordering;

use crate::{Axis, Point, Rect, Vec2};

/// A cardinal direction: decreasing or increasing along one axis.
///
/// A direction bundles the pieces that directional queries need: its unit
/// displacement, its axis, an ordering over points along that axis
/// ([`Dir::cmp_points`]), and an ordering over rectangles by their leading
/// edge ([`Dir::cmp_leading_edges`]). The *leading* edge of a rectangle is
/// the boundary facing toward the direction, the *trailing* edge the one
/// facing away; [`Dir::gap`] measures the signed separation between a
/// leading and an opposing trailing edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    /// Decreasing X.
    NegX,
    /// Increasing X.
    PosX,
    /// Decreasing Y.
    NegY,
    /// Increasing Y.
    PosY,
}

impl Dir {
    /// All four directions, in declaration order.
    pub const ALL: [Self; 4] = [Self::NegX, Self::PosX, Self::NegY, Self::PosY];

    /// The unit displacement vector of this direction.
    #[must_use]
    pub const fn unit_vec(self) -> Vec2 {
        match self {
            Self::NegX => Vec2::new(-1, 0),
            Self::PosX => Vec2::new(1, 0),
            Self::NegY => Vec2::new(0, -1),
            Self::PosY => Vec2::new(0, 1),
        }
    }

    /// The axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::NegX | Self::PosX => Axis::X,
            Self::NegY | Self::PosY => Axis::Y,
        }
    }

    /// The opposite direction on the same axis.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::NegX => Self::PosX,
            Self::PosX => Self::NegX,
            Self::NegY => Self::PosY,
            Self::PosY => Self::NegY,
        }
    }

    /// Returns `true` for the two increasing directions.
    #[must_use]
    pub const fn is_increasing(self) -> bool {
        matches!(self, Self::PosX | Self::PosY)
    }

    /// Orders points along this direction's axis, closer in this direction
    /// first.
    ///
    /// For [`Dir::PosX`] that is ascending `x`; for [`Dir::NegX`] descending
    /// `x`; analogously for Y. Points are equal when their coordinates on
    /// this axis agree, regardless of the other axis.
    #[must_use]
    pub fn cmp_points(self, a: Point, b: Point) -> Ordering {
        match self {
            Self::NegX => b.x.cmp(&a.x),
            Self::PosX => a.x.cmp(&b.x),
            Self::NegY => b.y.cmp(&a.y),
            Self::PosY => a.y.cmp(&b.y),
        }
    }

    /// Orders rectangles by their leading edge toward this direction.
    ///
    /// Increasing directions order ascending by the max bound on the axis,
    /// decreasing directions descending by the min bound, so in both cases a
    /// rectangle whose leading edge lies further along the direction sorts
    /// later.
    #[must_use]
    pub fn cmp_leading_edges(self, a: &Rect, b: &Rect) -> Ordering {
        match self {
            Self::NegX => b.x0.cmp(&a.x0),
            Self::PosX => a.x1.cmp(&b.x1),
            Self::NegY => b.y0.cmp(&a.y0),
            Self::PosY => a.y1.cmp(&b.y1),
        }
    }

    /// Signed separation along this direction's axis between two points.
    ///
    /// Positive when `b` lies beyond `a` in this direction.
    #[must_use]
    pub const fn difference(self, a: Point, b: Point) -> i32 {
        match self {
            Self::NegX => a.x - b.x,
            Self::PosX => b.x - a.x,
            Self::NegY => a.y - b.y,
            Self::PosY => b.y - a.y,
        }
    }

    /// Signed gap from `a`'s leading edge to `b`'s opposing trailing edge.
    ///
    /// Zero when the edges touch, negative when `b` does not lie ahead of
    /// `a` in this direction.
    #[must_use]
    pub const fn gap(self, a: &Rect, b: &Rect) -> i32 {
        match self {
            Self::NegX => a.x0 - b.x1,
            Self::PosX => b.x0 - a.x1,
            Self::NegY => a.y0 - b.y1,
            Self::PosY => b.y0 - a.y1,
        }
    }

    /// The point one unit further along this direction.
    #[must_use]
    pub const fn advance(self, p: Point) -> Point {
        self.advance_by(p, 1)
    }

    /// The point `distance` units further along this direction.
    #[must_use]
    pub const fn advance_by(self, p: Point, distance: i32) -> Point {
        match self {
            Self::NegX => Point::new(p.x - distance, p.y),
            Self::PosX => Point::new(p.x + distance, p.y),
            Self::NegY => Point::new(p.x, p.y - distance),
            Self::PosY => Point::new(p.x, p.y + distance),
        }
    }
}
