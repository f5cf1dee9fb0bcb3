// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Transform: integer affine transforms that track what they preserve.
//!
//! A [`Transform`] is a 2D affine map restricted to integer coefficients, so
//! it is guaranteed to carry integer coordinates to integer coordinates.
//! Alongside its six coefficients every transform caches an [`Invariants`]
//! set: the geometric properties (origin, axis alignment, area, circles,
//! chirality, rectilinearity) that this particular map is known to preserve.
//!
//! The invariant set is computed once at construction — or supplied directly
//! by the canonical constructors, whose hand-verified sets can be stronger
//! than what coefficient inspection alone proves (a quarter turn preserves
//! rectilinearity even though its shear coefficients are nonzero). Queries
//! are single bit tests, and [`Transform::apply`] uses the set to pick an
//! arithmetic fast path.
//!
//! Composition propagates invariants with a bitwise AND: the product is only
//! credited with a property when both factors individually guarantee it.
//! This is sound but deliberately not tight — two reflections compose into a
//! rotation that preserves chirality, and the AND rule will not notice.
//!
//! ```
//! use parterre_geom::{Point, Vec2};
//! use parterre_transform::Transform;
//!
//! let t = Transform::translation(Vec2::new(10, 0)).then(Transform::ROT_90);
//! assert!(t.is_scale_preserving());
//! assert!(!t.is_origin_preserving());
//! assert_eq!(t.apply(Point::new(0, 0)), Transform::ROT_90.apply(Point::new(10, 0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod invariants;
mod transform;

pub use invariants::Invariants;
pub use transform::{Transform, TransformError};
