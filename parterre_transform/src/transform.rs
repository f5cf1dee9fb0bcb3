// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transform type and its constructors.

use parterre_geom::{Point, Rect, Vec2};

use crate::Invariants;

/// Error from the validating [`Transform::from_components`] constructor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// The coefficients have determinant zero.
    #[error("non-invertible transform")]
    NonInvertible,
    /// The determinant cannot be represented in coefficient range.
    #[error("overflowing transform")]
    Overflow,
}

/// An invertible 2D affine map with integer coefficients.
///
/// Maps `(x, y)` to `(m00*x + m01*y + m02, m10*x + m11*y + m12)`. The
/// determinant `m00*m11 - m10*m01` is nonzero for every constructible value,
/// so every transform is invertible over the rationals (though the inverse
/// need not have integer coefficients).
///
/// A transform is an immutable `Copy` value carrying a cached [`Invariants`]
/// set; see the [crate docs](crate) for how the set is computed and
/// propagated. Coefficient arithmetic is not range-checked outside
/// [`Transform::from_components`]: applying or composing transforms whose
/// intermediate products exceed `i32` range is a caller error, as it is for
/// any integer arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transform {
    m00: i32,
    m10: i32,
    m01: i32,
    m11: i32,
    m02: i32,
    m12: i32,
    flags: Invariants,
}

impl Transform {
    /// The identity map.
    pub const IDENTITY: Self = Self::with_flags(1, 0, 0, 1, 0, 0, Invariants::ALL);

    /// A quarter turn about the origin: `(x, y) -> (y, -x)`.
    pub const ROT_90: Self = Self::with_flags(0, -1, 1, 0, 0, 0, Invariants::RIGHT_ANGLE);

    /// A half turn about the origin: `(x, y) -> (-x, -y)`.
    pub const ROT_180: Self = Self::with_flags(-1, 0, 0, -1, 0, 0, Invariants::ALL);

    /// Three quarter turns about the origin: `(x, y) -> (-y, x)`.
    pub const ROT_270: Self = Self::with_flags(0, 1, -1, 0, 0, 0, Invariants::RIGHT_ANGLE);

    /// Trusted constructor: the caller vouches for `flags`.
    const fn with_flags(
        m00: i32,
        m10: i32,
        m01: i32,
        m11: i32,
        m02: i32,
        m12: i32,
        flags: Invariants,
    ) -> Self {
        Self {
            m00,
            m10,
            m01,
            m11,
            m02,
            m12,
            flags,
        }
    }

    /// The rotation about the origin by `quarter_turns` right angles.
    ///
    /// Turns are taken modulo 4; negative counts rotate the other way.
    #[must_use]
    pub const fn rotate_right_angles(quarter_turns: i32) -> Self {
        match quarter_turns.rem_euclid(4) {
            0 => Self::IDENTITY,
            1 => Self::ROT_90,
            2 => Self::ROT_180,
            _ => Self::ROT_270,
        }
    }

    /// The translation by `v`.
    #[must_use]
    pub const fn translation(v: Vec2) -> Self {
        if v.is_zero() {
            return Self::IDENTITY;
        }
        Self::with_flags(
            1,
            0,
            0,
            1,
            v.x,
            v.y,
            Invariants::SKEW
                .union(Invariants::SCALE)
                .union(Invariants::CHIRAL)
                .union(Invariants::CIRCLE)
                .union(Invariants::RECTILINEAR),
        )
    }

    /// The rotation by `quarter_turns` right angles about `pt`.
    #[must_use]
    pub fn rotation_about(pt: Point, quarter_turns: i32) -> Self {
        if pt.is_origin() {
            return Self::rotate_right_angles(quarter_turns);
        }
        if quarter_turns.rem_euclid(4) == 0 {
            return Self::IDENTITY;
        }
        let to_origin = pt.vector_to(Point::ZERO);
        Self::translation(to_origin)
            .then(Self::rotate_right_angles(quarter_turns))
            .then(Self::translation(-to_origin))
    }

    /// The uniform scale by `s` about the origin.
    ///
    /// # Panics
    ///
    /// Panics if `s` is zero (the map would not be invertible).
    #[must_use]
    pub const fn scale(s: i32) -> Self {
        assert!(s != 0, "zero scale factor");
        if s == 1 {
            return Self::IDENTITY;
        }
        let mut flags = Invariants::ORIGIN
            .union(Invariants::SKEW)
            .union(Invariants::CHIRAL)
            .union(Invariants::CIRCLE)
            .union(Invariants::RECTILINEAR);
        if s == -1 {
            flags = flags.union(Invariants::SCALE);
        }
        Self::with_flags(s, 0, 0, s, 0, 0, flags)
    }

    /// The per-axis scale by `(sx, sy)` about the origin.
    ///
    /// # Panics
    ///
    /// Panics if either factor is zero.
    #[must_use]
    pub const fn scale_xy(sx: i32, sy: i32) -> Self {
        if sx == sy {
            return Self::scale(sx);
        }
        Self::scale_about(Point::ZERO, sx, sy)
    }

    /// The per-axis scale by `(sx, sy)` holding `pt` fixed.
    ///
    /// # Panics
    ///
    /// Panics if either factor is zero.
    #[must_use]
    pub const fn scale_about(pt: Point, sx: i32, sy: i32) -> Self {
        assert!(sx != 0 && sy != 0, "zero scale factor");
        if sx == 1 && sy == 1 {
            return Self::IDENTITY;
        }
        let mut flags = Invariants::SKEW.union(Invariants::RECTILINEAR);
        if pt.is_origin() {
            flags = flags.union(Invariants::ORIGIN);
        }
        if (sx > 0) == (sy > 0) {
            flags = flags.union(Invariants::CHIRAL);
        }
        if sx.abs() == 1 && sy.abs() == 1 {
            flags = flags.union(Invariants::SCALE);
        }
        if sx == sy {
            flags = flags.union(Invariants::CIRCLE);
        }
        Self::with_flags(sx, 0, 0, sy, (1 - sx) * pt.x, (1 - sy) * pt.y, flags)
    }

    /// The validating general constructor.
    ///
    /// Derives the invariant set from the coefficients. Fails with
    /// [`TransformError::NonInvertible`] when the determinant is zero and
    /// with [`TransformError::Overflow`] when it falls outside coefficient
    /// range.
    pub fn from_components(
        m00: i32,
        m10: i32,
        m01: i32,
        m11: i32,
        m02: i32,
        m12: i32,
    ) -> Result<Self, TransformError> {
        let det = i64::from(m00) * i64::from(m11) - i64::from(m10) * i64::from(m01);
        if det == 0 {
            return Err(TransformError::NonInvertible);
        }
        if i32::try_from(det).is_err() {
            return Err(TransformError::Overflow);
        }
        let flags = Invariants::classify(m00, m10, m01, m11, m02, m12, det);
        Ok(Self::with_flags(m00, m10, m01, m11, m02, m12, flags))
    }

    /// Returns `true` if this is the identity map.
    ///
    /// Like every invariant query this is answered from the cached flags, so
    /// a composition that happens to multiply out to the identity matrix may
    /// still answer `false`.
    #[must_use]
    pub const fn is_identity(self) -> bool {
        self.flags.contains(Invariants::ALL) && self.m00 == 1
    }

    /// Returns `true` if the origin is known to be a fixed point.
    #[must_use]
    pub const fn is_origin_preserving(self) -> bool {
        self.flags.contains(Invariants::ORIGIN)
    }

    /// Returns `true` if the map is known to be shear-free.
    #[must_use]
    pub const fn is_skew_preserving(self) -> bool {
        self.flags.contains(Invariants::SKEW)
    }

    /// Returns `true` if the map is known to preserve areas.
    #[must_use]
    pub const fn is_scale_preserving(self) -> bool {
        self.flags.contains(Invariants::SCALE)
    }

    /// Returns `true` if the map is known to keep axis-aligned figures
    /// axis-aligned.
    #[must_use]
    pub const fn is_rectilinear_preserving(self) -> bool {
        self.flags.contains(Invariants::RECTILINEAR)
    }

    /// Returns `true` if the map is known to preserve orientation.
    #[must_use]
    pub const fn is_chiral_preserving(self) -> bool {
        self.flags.contains(Invariants::CHIRAL)
    }

    /// Returns `true` if the map is known to carry circles to circles.
    #[must_use]
    pub const fn is_circle_preserving(self) -> bool {
        self.flags.contains(Invariants::CIRCLE)
    }

    /// The cached invariant set.
    #[must_use]
    pub const fn invariants(self) -> Invariants {
        self.flags
    }

    /// The six coefficients as `[m00, m10, m01, m11, m02, m12]`.
    #[must_use]
    pub const fn components(self) -> [i32; 6] {
        [self.m00, self.m10, self.m01, self.m11, self.m02, self.m12]
    }

    /// The determinant, widened so it cannot overflow.
    #[must_use]
    pub const fn determinant(self) -> i64 {
        self.m00 as i64 * self.m11 as i64 - self.m10 as i64 * self.m01 as i64
    }

    /// The trace `m00 + m11`.
    #[must_use]
    pub const fn trace(self) -> i32 {
        self.m00 + self.m11
    }

    /// The columns of the augmented matrix: the images of the two basis
    /// vectors (0 and 1) and the translation (2).
    ///
    /// # Panics
    ///
    /// Panics if `index > 2`.
    #[must_use]
    pub const fn column(self, index: usize) -> Vec2 {
        match index {
            0 => Vec2::new(self.m00, self.m10),
            1 => Vec2::new(self.m01, self.m11),
            2 => Vec2::new(self.m02, self.m12),
            _ => panic!("invalid column index"),
        }
    }

    /// Applies this transform to a point.
    ///
    /// The identity returns its input outright; otherwise the cached flags
    /// select the cheapest arithmetic that is exactly equivalent to the full
    /// affine formula.
    #[must_use]
    pub const fn apply(self, p: Point) -> Point {
        if self.is_identity() {
            return p;
        }
        let origin = self.flags.contains(Invariants::ORIGIN);
        let skew = self.flags.contains(Invariants::SKEW);
        match (origin, skew) {
            // Pure per-axis scale.
            (true, true) => Point::new(p.x * self.m00, p.y * self.m11),
            // Linear map, no translation.
            (true, false) => Point::new(
                self.m00 * p.x + self.m01 * p.y,
                self.m10 * p.x + self.m11 * p.y,
            ),
            // Per-axis scale and translate.
            (false, true) => Point::new(self.m00 * p.x + self.m02, self.m11 * p.y + self.m12),
            (false, false) => Point::new(
                self.m00 * p.x + self.m01 * p.y + self.m02,
                self.m10 * p.x + self.m11 * p.y + self.m12,
            ),
        }
    }

    /// Applies the linear part to a displacement (translation does not act
    /// on vectors).
    #[must_use]
    pub const fn apply_vec(self, v: Vec2) -> Vec2 {
        if self.is_identity() {
            return v;
        }
        Vec2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    /// The bounding box of a rectangle's image.
    ///
    /// Exact for rectilinear-preserving transforms, whose images are again
    /// axis-aligned rectangles; a conservative axis-aligned cover under
    /// shear.
    #[must_use]
    pub fn apply_rect(self, r: Rect) -> Rect {
        if self.is_identity() {
            return r;
        }
        let a = self.apply(Point::new(r.x0, r.y0));
        let b = self.apply(Point::new(r.x1, r.y0));
        let c = self.apply(Point::new(r.x0, r.y1));
        let d = self.apply(Point::new(r.x1, r.y1));
        Rect::from_point(a)
            .union_point(b)
            .union_point(c)
            .union_point(d)
    }

    /// The composition applying `other` first, then `self`.
    ///
    /// The result's invariant set is the AND of both operands' sets — sound
    /// but not tight (see the [crate docs](crate)).
    #[must_use]
    pub fn pre_apply(self, other: Self) -> Self {
        if self.is_identity() {
            return other;
        }
        if other.is_identity() {
            return self;
        }
        Self::with_flags(
            self.m00 * other.m00 + self.m01 * other.m10,
            self.m10 * other.m00 + self.m11 * other.m10,
            self.m00 * other.m01 + self.m01 * other.m11,
            self.m10 * other.m01 + self.m11 * other.m11,
            self.m00 * other.m02 + self.m01 * other.m12 + self.m02,
            self.m10 * other.m02 + self.m11 * other.m12 + self.m12,
            self.flags.intersection(other.flags),
        )
    }

    /// The composition applying `self` first, then `other`.
    #[must_use]
    pub fn then(self, other: Self) -> Self {
        other.pre_apply(self)
    }
}
