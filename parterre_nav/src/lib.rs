// Copyright 2026 the Parterre Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parterre Nav: directional navigation over a static set of tagged rects.
//!
//! A [`Navigator`] takes a snapshot of tagged rectangles — typically the
//! world-space bounds of focusable UI regions — and answers "which rectangle
//! is the best neighbor of this one toward that direction?" This is the
//! geometric half of keyboard focus movement; pairing the winning tag with
//! actual focus state is the caller's business.
//!
//! Two matching disciplines are available, selected per query via
//! [`Algorithm`]:
//!
//! - *Natural* ranks every candidate ahead of the start rect by the L1
//!   distance between facing edge centers (zero for overlapping rects).
//! - *Strict* additionally requires the candidate to overlap the start rect
//!   on the axis perpendicular to the direction of travel, the way an
//!   arrow-key user expects "right" to stay in the current row.
//! - *Prefer strict* tries strict first and falls back to natural, which is
//!   usually the right default for focus movement.
//!
//! ```
//! use parterre_geom::{Dir, Rect};
//! use parterre_nav::{Algorithm, NavRect, Navigator};
//!
//! let nav = Navigator::new(vec![
//!     NavRect::new(Rect::new(0, 0, 10, 10), "a"),
//!     NavRect::new(Rect::new(20, 0, 30, 10), "b"),
//!     NavRect::new(Rect::new(20, 20, 30, 30), "c"),
//! ]);
//!
//! let from = Rect::new(0, 0, 10, 10);
//! let hit = nav.find_from(&from, Dir::PosX, Algorithm::Strict).unwrap();
//! assert_eq!(hit.tag, "b");
//! assert!(nav.find_from(&from, Dir::NegX, Algorithm::PreferStrict).is_none());
//! ```
//!
//! The navigator is immutable after construction. Each direction's sorted
//! view is built lazily on first use and cached with a publish-once atomic
//! swap, so a shared navigator can serve concurrent first queries without
//! locks and never sorts the same direction twice.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use once_cell::race::OnceBox;
use parterre_geom::{Dir, Rect};

/// A rectangle paired with an opaque caller-supplied tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavRect<T> {
    /// The rectangle, in the shared coordinate space of the navigator.
    pub rect: Rect,
    /// The caller's identifier for this region.
    pub tag: T,
}

impl<T> NavRect<T> {
    /// Creates a tagged rectangle.
    #[must_use]
    pub const fn new(rect: Rect, tag: T) -> Self {
        Self { rect, tag }
    }
}

/// The matching discipline used by [`Navigator::find_from`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Rank by natural distance alone.
    Natural,
    /// Rank by natural distance among candidates overlapping the start rect
    /// on the axis perpendicular to the direction of travel.
    Strict,
    /// [`Algorithm::Strict`], falling back to [`Algorithm::Natural`] when
    /// strict matching finds nothing.
    PreferStrict,
}

/// Directional nearest-neighbor queries over a fixed set of [`NavRect`]s.
///
/// Construction takes ownership of the snapshot; there is no way to add or
/// remove entries afterwards. Rebuild the navigator when the layout changes.
pub struct Navigator<T> {
    rects: Box<[NavRect<T>]>,
    // Lazily sorted index permutations, one slot per direction. The key
    // domain is four values, so a fixed array beats any map.
    sorted: [OnceBox<Vec<usize>>; 4],
}

impl<T> Navigator<T> {
    /// Creates a navigator over a snapshot of tagged rectangles.
    #[must_use]
    pub fn new(rects: Vec<NavRect<T>>) -> Self {
        Self {
            rects: rects.into_boxed_slice(),
            sorted: core::array::from_fn(|_| OnceBox::new()),
        }
    }

    /// All entries, in insertion order.
    #[must_use]
    pub fn rects(&self) -> &[NavRect<T>] {
        &self.rects
    }

    /// Finds the best neighbor of `start` toward `dir`, or `None` if no
    /// candidate lies ahead (under `algo`'s matching discipline).
    ///
    /// `start` does not have to be one of the navigator's own rectangles;
    /// any query rectangle works. Repeated calls with equal arguments return
    /// the same entry.
    #[must_use]
    pub fn find_from(&self, start: &Rect, dir: Dir, algo: Algorithm) -> Option<&NavRect<T>> {
        match algo {
            Algorithm::Natural => self.scan(start, dir, false),
            Algorithm::Strict => self.scan(start, dir, true),
            Algorithm::PreferStrict => self
                .scan(start, dir, true)
                .or_else(|| self.scan(start, dir, false)),
        }
    }

    /// The index permutation sorting `rects` by `dir`'s leading-edge order,
    /// built on first use.
    fn sorted_for(&self, dir: Dir) -> &[usize] {
        self.sorted[slot(dir)].get_or_init(|| {
            let mut order: Vec<usize> = (0..self.rects.len()).collect();
            order.sort_by(|&a, &b| {
                dir.cmp_leading_edges(&self.rects[a].rect, &self.rects[b].rect)
            });
            Box::new(order)
        })
    }

    fn scan(&self, start: &Rect, dir: Dir, strict: bool) -> Option<&NavRect<T>> {
        let across = dir.axis().other();
        let mut best = None;
        let mut least = i32::MAX;
        // Walk from the far end of the sorted order back toward the near
        // end. A negative gap only proves *this* candidate is not ahead of
        // `start`: the order is sorted by leading edges while the gap reads
        // trailing edges, so the scan must not stop early.
        for &i in self.sorted_for(dir).iter().rev() {
            let candidate = &self.rects[i];
            if dir.gap(start, &candidate.rect) < 0 {
                continue;
            }
            if strict && !start.span_on(across).intersects(candidate.rect.span_on(across)) {
                continue;
            }
            let dist = natural_distance(start, &candidate.rect, dir);
            if dist < least {
                best = Some(candidate);
                least = dist;
            }
        }
        best
    }
}

impl<T> FromIterator<NavRect<T>> for Navigator<T> {
    fn from_iter<I: IntoIterator<Item = NavRect<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: fmt::Debug> fmt::Debug for Navigator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("rects", &self.rects)
            .finish_non_exhaustive()
    }
}

/// The L1 distance between the facing edge centers of `from` and `to`, or
/// zero when the rectangles overlap.
fn natural_distance(from: &Rect, to: &Rect, dir: Dir) -> i32 {
    if from.intersects(*to) {
        return 0;
    }
    let a = from.edge_center(dir);
    let b = to.edge_center(dir.reverse());
    a.vector_to(b).l1_norm()
}

const fn slot(dir: Dir) -> usize {
    match dir {
        Dir::NegX => 0,
        Dir::PosX => 1,
        Dir::NegY => 2,
        Dir::PosY => 3,
    }
}
