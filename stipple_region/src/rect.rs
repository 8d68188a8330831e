// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Half-open integer rectangles and their pixel iterators.

use core::iter::FusedIterator;

use crate::point::Point;

/// Half-open axis-aligned rectangle of pixels.
///
/// Covers every `(x, y)` with `origin.x <= x < opposite.x` and
/// `origin.y <= y < opposite.y`. A rectangle whose opposite corner does not lie
/// strictly below and to the right of its origin covers no pixels; this is not
/// an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub origin: Point,
    /// Exclusive bottom-right corner.
    pub opposite: Point,
}

impl Rect {
    /// Create a rectangle from its inclusive origin and exclusive opposite corner.
    pub const fn new(origin: Point, opposite: Point) -> Self {
        Self { origin, opposite }
    }

    /// Create a rectangle from its origin and size, saturating at the `i32` bounds.
    pub const fn from_xywh(x: i32, y: i32, width: i32, height: i32) -> Self {
        let origin = Point::new(x, y);
        Self {
            origin,
            opposite: origin.translate(width, height),
        }
    }

    /// Width in pixels; zero for inverted rectangles.
    pub fn width(&self) -> u32 {
        span(self.origin.x, self.opposite.x)
    }

    /// Height in pixels; zero for inverted rectangles.
    pub fn height(&self) -> u32 {
        span(self.origin.y, self.opposite.y)
    }

    /// Number of pixels covered.
    pub fn area(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    /// Whether the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.origin.x >= self.opposite.x || self.origin.y >= self.opposite.y
    }

    /// Whether `p` is one of the covered pixels.
    pub fn contains(&self, p: Point) -> bool {
        self.origin.x <= p.x
            && p.x < self.opposite.x
            && self.origin.y <= p.y
            && p.y < self.opposite.y
    }

    /// The pixels covered by both rectangles. May be empty.
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            origin: Point::new(
                self.origin.x.max(other.origin.x),
                self.origin.y.max(other.origin.y),
            ),
            opposite: Point::new(
                self.opposite.x.min(other.opposite.x),
                self.opposite.y.min(other.opposite.y),
            ),
        }
    }

    /// Smallest rectangle covering both. Empty inputs are ignored.
    pub fn union_bounds(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            origin: Point::new(
                self.origin.x.min(other.origin.x),
                self.origin.y.min(other.origin.y),
            ),
            opposite: Point::new(
                self.opposite.x.max(other.opposite.x),
                self.opposite.y.max(other.opposite.y),
            ),
        }
    }

    /// Iterate the covered pixels in row-major order.
    pub fn pixels(&self) -> RectPixels {
        RectPixels {
            rect: *self,
            next: (!self.is_empty()).then_some(self.origin),
        }
    }

    /// Convert to a Kurbo rectangle covering the same pixel area.
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.origin.x),
            f64::from(self.origin.y),
            f64::from(self.opposite.x),
            f64::from(self.opposite.y),
        )
    }

    /// The smallest pixel rectangle covering a Kurbo rectangle.
    ///
    /// Fractional edges round outward. Coordinates outside the `i32` range clamp
    /// to it. Assumes no NaNs.
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        let r = rect.abs().expand();
        Self {
            origin: Point::new(clamp_i32(r.x0), clamp_i32(r.y0)),
            opposite: Point::new(clamp_i32(r.x1), clamp_i32(r.y1)),
        }
    }
}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = RectPixels;

    fn into_iter(self) -> RectPixels {
        self.pixels()
    }
}

/// Row-major iterator over the pixels of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectPixels {
    rect: Rect,
    next: Option<Point>,
}

impl Iterator for RectPixels {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let current = self.next?;
        self.next = if current.x + 1 < self.rect.opposite.x {
            Some(Point::new(current.x + 1, current.y))
        } else if current.y + 1 < self.rect.opposite.y {
            Some(Point::new(self.rect.origin.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(p) = self.next else {
            return (0, Some(0));
        };
        let width = u64::from(self.rect.width());
        let rows_below = u64::from(span(p.y, self.rect.opposite.y)) - 1;
        let remaining = u64::from(span(p.x, self.rect.opposite.x)) + rows_below * width;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RectPixels {}

fn span(lo: i32, hi: i32) -> u32 {
    if hi > lo { hi.abs_diff(lo) } else { 0 }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 range before the cast."
)]
fn clamp_i32(v: f64) -> i32 {
    v.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn degenerate_rects_are_empty() {
        let p = Point::new(5, 5);
        assert_eq!(Rect::new(p, p).pixels().count(), 0);
        assert!(Rect::new(Point::new(3, 0), Point::new(1, 4)).is_empty());
        assert_eq!(Rect::new(Point::new(3, 0), Point::new(1, 4)).area(), 0);
        assert_eq!(Rect::from_xywh(0, 0, 4, 0).pixels().size_hint(), (0, Some(0)));
    }

    #[test]
    fn two_by_two_yields_four_pixels_row_major() {
        let r = Rect::new(Point::ORIGIN, Point::new(2, 2));
        let px: Vec<_> = r.pixels().collect();
        assert_eq!(
            px,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut it = Rect::from_xywh(-2, 3, 3, 2).pixels();
        assert_eq!(it.size_hint(), (6, Some(6)));
        it.next();
        it.next();
        it.next();
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.next(), Some(Point::new(-1, 4)));
        assert_eq!(it.next(), Some(Point::new(0, 4)));
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn intersect_and_union() {
        let a = Rect::from_xywh(0, 0, 4, 4);
        let b = Rect::from_xywh(2, 2, 4, 4);
        assert_eq!(a.intersect(&b), Rect::from_xywh(2, 2, 2, 2));
        assert_eq!(a.union_bounds(&b), Rect::from_xywh(0, 0, 6, 6));
        let far = Rect::from_xywh(10, 10, 1, 1);
        assert!(a.intersect(&far).is_empty());
        assert_eq!(Rect::from_xywh(9, 9, 0, 0).union_bounds(&a), a);
    }

    #[test]
    fn kurbo_round_trip_rounds_outward() {
        let r = Rect::from_kurbo(kurbo::Rect::new(0.5, 1.2, 3.1, 4.0));
        assert_eq!(r, Rect::new(Point::new(0, 1), Point::new(4, 4)));
        assert_eq!(Rect::from_kurbo(r.to_kurbo()), r);
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::from_xywh(-2, 3, 4, 2);
        assert!(r.contains(Point::new(-2, 3)));
        assert!(r.contains(Point::new(1, 4)));
        assert!(!r.contains(Point::new(2, 4)));
        assert!(!r.contains(Point::new(1, 5)));
        assert!(!r.contains(Point::new(-3, 3)));
        assert!(!Rect::from_xywh(0, 0, 0, 5).contains(Point::ORIGIN));
    }
}
