// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Geom: integer-coordinate 2D geometry primitives.
//!
//! This crate is the value-type foundation of the Parterre kernel. Every type
//! here is a small, immutable, `Copy` value over `i32` coordinates, and every
//! operation maps integer inputs to exactly integer outputs. There is no
//! floating point anywhere in the kernel; the optional `kurbo` feature
//! provides lossless conversions *out* into kurbo's `f64` types for layers
//! (renderers, hit testers) that live in float space.
//!
//! ## API overview
//!
//! - [`Point`] and [`Vec2`]: locations and displacements, related by the
//!   usual operator algebra (`Point + Vec2`, `Point - Point -> Vec2`, ...).
//! - [`Size`]: a non-negative width/height pair.
//! - [`Span`]: a 1D integer range with both closed-point and half-open-unit
//!   readings.
//! - [`Rect`]: an axis-aligned rectangle as two ordered corners; degenerate
//!   (zero-extent) rectangles are valid values.
//! - [`Margins`]: signed per-edge offsets for outsetting and insetting rects.
//! - [`Axis`] and [`Dir`]: the two coordinate axes and the four cardinal
//!   directions, with the per-direction orderings and gap arithmetic that
//!   directional navigation is built on.
//!
//! ## Conventions
//!
//! - Rectangles and spans store ordered bounds (`min <= max` on each axis);
//!   normalizing constructors maintain this, so degenerate values are
//!   representable but inverted ones are not.
//! - "Point" predicates treat bounds as closed, "unit" predicates treat them
//!   as half-open; overlap tests between spans and between rects are open
//!   (touching is not overlapping).
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

mod axis;
mod dir;
mod margins;
mod point;
mod rect;
mod size;
mod span;
mod vec2;

#[cfg(feature = "kurbo")]
mod kurbo_interop;

pub use axis::Axis;
pub use dir::Dir;
pub use margins::Margins;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use span::Span;
pub use vec2::Vec2;
