// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions into kurbo's `f64` geometry.
//!
//! Layout lives in integer space; rendering and hit testing live in kurbo's
//! float space. Every `i32` is exactly representable as an `f64`, so these
//! conversions are lossless and one-way by design — rounding float geometry
//! back onto the integer grid is a policy decision left to callers.

use crate::{Point, Rect, Size, Vec2};

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<Vec2> for kurbo::Vec2 {
    fn from(v: Vec2) -> Self {
        Self::new(f64::from(v.x), f64::from(v.y))
    }
}

impl From<Size> for kurbo::Size {
    fn from(s: Size) -> Self {
        Self::new(f64::from(s.width), f64::from(s.height))
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(
            f64::from(r.x0),
            f64::from(r.y0),
            f64::from(r.x1),
            f64::from(r.y1),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Point, Rect, Size, Vec2};

    #[test]
    fn conversions_are_lossless() {
        let p: kurbo::Point = Point::new(i32::MAX, i32::MIN).into();
        assert_eq!(p, kurbo::Point::new(2147483647.0, -2147483648.0));

        let v: kurbo::Vec2 = Vec2::new(-7, 9).into();
        assert_eq!((v.x, v.y), (-7.0, 9.0));

        let s: kurbo::Size = Size::new(800, 600).into();
        assert_eq!((s.width, s.height), (800.0, 600.0));

        let r: kurbo::Rect = Rect::new(0, 1, 2, 3).into();
        assert_eq!(r, kurbo::Rect::new(0.0, 1.0, 2.0, 3.0));
    }
}
