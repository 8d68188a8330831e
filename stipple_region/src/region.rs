// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The region algebra: rectangles, unions of regions, and the empty region.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::point::Point;
use crate::rect::Rect;

/// De-duplicated set of pixels, iterating in row-major order.
pub type PixelSet = BTreeSet<Point>;

/// A set of pixels expressed algebraically instead of as a bitmap.
///
/// Regions are plain values: computing their pixels never has side effects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Region {
    /// No pixels.
    #[default]
    Empty,
    /// Every pixel of a half-open rectangle.
    Rect(Rect),
    /// The union of the child regions, in order.
    Group(Vec<Self>),
}

impl Region {
    /// Build a group from child regions.
    pub fn group(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Group(children.into_iter().collect())
    }

    /// The de-duplicated set of covered pixels.
    pub fn pixels(&self) -> PixelSet {
        let mut out = PixelSet::new();
        self.extend_pixels(&mut out);
        out
    }

    /// Add the covered pixels to `out`.
    ///
    /// Lets callers accumulate the union of many regions without building an
    /// intermediate set per region.
    pub fn extend_pixels(&self, out: &mut PixelSet) {
        match self {
            Self::Empty => {}
            Self::Rect(r) => out.extend(r.pixels()),
            Self::Group(children) => {
                for child in children {
                    child.extend_pixels(out);
                }
            }
        }
    }

    /// Whether the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Rect(r) => r.is_empty(),
            Self::Group(children) => children.iter().all(Self::is_empty),
        }
    }

    /// Whether `p` is covered.
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Empty => false,
            Self::Rect(r) => r.contains(p),
            Self::Group(children) => children.iter().any(|c| c.contains(p)),
        }
    }

    /// Smallest rectangle covering the region, or `None` if it is empty.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Empty => None,
            Self::Rect(r) => (!r.is_empty()).then_some(*r),
            Self::Group(children) => children
                .iter()
                .filter_map(Self::bounds)
                .reduce(|acc, r| acc.union_bounds(&r)),
        }
    }
}

impl From<Rect> for Region {
    fn from(r: Rect) -> Self {
        Self::Rect(r)
    }
}

impl FromIterator<Self> for Region {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::group(iter)
    }
}
