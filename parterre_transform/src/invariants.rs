// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Preserved-invariant classification.

bitflags::bitflags! {
    /// Geometric properties a [`Transform`](crate::Transform) is known to
    /// preserve.
    ///
    /// Each flag is a one-way guarantee: a set flag means the property
    /// provably holds, a clear flag means it is not asserted (not that it
    /// fails). Composition ANDs the sets of both factors, so flags can only
    /// be lost, never invented, along a composition chain.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Invariants: u8 {
        /// The origin is a fixed point (`m02 == 0 && m12 == 0`).
        const ORIGIN      = 1 << 0;
        /// No shear: the axes map to themselves (`m10 == 0 && m01 == 0`).
        const SKEW        = 1 << 1;
        /// Areas are preserved (`|det| == 1`).
        const SCALE       = 1 << 2;
        /// Orientation is preserved (`det >= 0`).
        const CHIRAL      = 1 << 3;
        /// Circles map to circles (`m10 == -m01 && m00 == m11`).
        const CIRCLE      = 1 << 4;
        /// Axis-aligned figures stay axis-aligned. Coefficient inspection
        /// only proves this for shear-free maps; the quarter-turn constants
        /// carry it by construction.
        const RECTILINEAR = 1 << 5;
    }
}

impl Invariants {
    /// Everything a quarter turn about the origin preserves.
    pub const RIGHT_ANGLE: Self = Self::ORIGIN
        .union(Self::SCALE)
        .union(Self::CHIRAL)
        .union(Self::CIRCLE)
        .union(Self::RECTILINEAR);

    /// Everything: the invariants of the identity and the half turn.
    pub const ALL: Self = Self::RIGHT_ANGLE.union(Self::SKEW);

    /// Classifies a coefficient matrix by direct inspection.
    ///
    /// `det` must be the exact (widened) determinant of the six
    /// coefficients. The result is what inspection alone can prove; trusted
    /// constructors may attach strictly stronger sets.
    pub(crate) fn classify(m00: i32, m10: i32, m01: i32, m11: i32, m02: i32, m12: i32, det: i64) -> Self {
        let mut flags = Self::empty();
        if m02 == 0 && m12 == 0 {
            flags |= Self::ORIGIN;
        }
        if m10 == 0 && m01 == 0 {
            flags |= Self::SKEW | Self::RECTILINEAR;
        }
        if det.abs() == 1 {
            flags |= Self::SCALE;
        }
        if det >= 0 {
            flags |= Self::CHIRAL;
        }
        if m10 == -m01 && m00 == m11 {
            flags |= Self::CIRCLE;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::Invariants;

    #[test]
    fn classify_identity_matrix() {
        assert_eq!(Invariants::classify(1, 0, 0, 1, 0, 0, 1), Invariants::ALL);
    }

    #[test]
    fn classify_translation() {
        let flags = Invariants::classify(1, 0, 0, 1, 3, -4, 1);
        assert!(!flags.contains(Invariants::ORIGIN));
        assert!(flags.contains(Invariants::SKEW | Invariants::SCALE | Invariants::CHIRAL));
    }

    #[test]
    fn classify_quarter_turn_is_conservative() {
        // Inspection cannot see that a quarter turn is rectilinear.
        let flags = Invariants::classify(0, -1, 1, 0, 0, 0, 1);
        assert!(flags.contains(Invariants::CIRCLE | Invariants::SCALE));
        assert!(!flags.contains(Invariants::RECTILINEAR));
        assert!(!flags.contains(Invariants::SKEW));
    }

    #[test]
    fn classify_reflection_loses_chirality() {
        let flags = Invariants::classify(1, 0, 0, -1, 0, 0, -1);
        assert!(!flags.contains(Invariants::CHIRAL));
        assert!(flags.contains(Invariants::SCALE | Invariants::RECTILINEAR));
    }
}
