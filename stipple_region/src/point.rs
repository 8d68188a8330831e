// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer pixel coordinates and an explicit interning cache.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Add, Sub};

/// A pixel coordinate.
///
/// Points compare by value. They are ordered row-major (by `y`, then by `x`), so
/// sets of points iterate in scanline order.
///
/// ## Overflow
///
/// Arithmetic saturates at the `i32` bounds instead of wrapping. A sprite pushed
/// past the edge of the coordinate space piles up on the boundary rather than
/// reappearing on the opposite side.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Horizontal coordinate, growing to the right.
    pub x: i32,
    /// Vertical coordinate, growing downward.
    pub y: i32,
}

impl Point {
    /// The coordinate origin `(0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point by `(dx, dy)`, saturating.
    pub const fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.translate(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x.saturating_sub(rhs.x),
            y: self.y.saturating_sub(rhs.y),
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Handle to a point interned in a [`PointCache`].
///
/// Two handles from the same cache are equal exactly when they were interned
/// from equal coordinates during the same cache epoch.
///
/// ## Epochs
///
/// [`PointCache::clear`] starts a new epoch. Handles from an earlier epoch no
/// longer resolve, even when their slot has been refilled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointHandle(u32, u32);

impl PointHandle {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Cache slots are 32-bit; PointCache::intern asserts the slot count fits."
    )]
    const fn new(idx: usize, epoch: u32) -> Self {
        Self(idx as u32, epoch)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Interning table for points.
///
/// Equal coordinates map to the same [`PointHandle`], so handles can be compared
/// and hashed as identities. The cache is an ordinary owned value: scope it to a
/// scene, a session, or a single frame and [`clear`](Self::clear) it to bound
/// its memory.
#[derive(Clone, Debug, Default)]
pub struct PointCache {
    points: Vec<Point>,
    lookup: BTreeMap<Point, PointHandle>,
    epoch: u32,
}

impl PointCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical handle for `(x, y)`, interning it on first use.
    pub fn intern(&mut self, x: i32, y: i32) -> PointHandle {
        self.intern_point(Point::new(x, y))
    }

    /// Return the canonical handle for `point`, interning it on first use.
    pub fn intern_point(&mut self, point: Point) -> PointHandle {
        if let Some(handle) = self.lookup.get(&point) {
            return *handle;
        }
        assert!(
            u32::try_from(self.points.len()).is_ok(),
            "point cache exceeded 2^32 entries"
        );
        let handle = PointHandle::new(self.points.len(), self.epoch);
        self.points.push(point);
        self.lookup.insert(point, handle);
        handle
    }

    /// Intern the componentwise (saturating) sum of `a` and `b`.
    pub fn add(&mut self, a: Point, b: Point) -> PointHandle {
        self.intern_point(a + b)
    }

    /// Resolve a handle back to its coordinates.
    ///
    /// Returns `None` for handles from an earlier epoch.
    pub fn point(&self, handle: PointHandle) -> Option<Point> {
        if handle.1 != self.epoch {
            return None;
        }
        self.points.get(handle.idx()).copied()
    }

    /// Number of distinct points interned in the current epoch.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been interned in the current epoch.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop every interned point and start a new epoch.
    pub fn clear(&mut self) {
        self.points.clear();
        self.lookup.clear();
        self.epoch = self.epoch.wrapping_add(1);
    }
}
