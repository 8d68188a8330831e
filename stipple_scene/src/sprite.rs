// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movable raster sprites.

use stipple_region::{PixelSet, Point, Rect, Region};

use crate::bitmap::Bitmap;
use crate::color::{Palette, Rgba8};
use crate::drawable::DrawableFlags;

/// A bitmap placed at an origin, tracking where it was before its last move.
///
/// ## Staleness
///
/// A sprite starts out stale and becomes stale again on every [`move_to`](Self::move_to)
/// or visibility change. It stops being stale only when a [`Layer`](crate::Layer)
/// resolves a pixel to this sprite's color.
///
/// ## Changed pixels
///
/// Until the first move, [`changed_pixels`](Self::changed_pixels) is the whole
/// current bounding box (the bootstrap draw). After a move it is the union of
/// the box before the most recent move and the current box, so the vacated
/// pixels get re-resolved against whatever is now underneath.
#[derive(Clone, Debug)]
pub struct Sprite {
    origin: Point,
    bitmap: Bitmap,
    palette: Palette,
    flags: DrawableFlags,
    previous_bounds: Option<Rect>,
}

impl Sprite {
    /// Create a stale, visible sprite at `origin`.
    pub fn new(origin: Point, bitmap: Bitmap, palette: Palette) -> Self {
        Self {
            origin,
            bitmap,
            palette,
            flags: DrawableFlags::STALE | DrawableFlags::VISIBLE,
            previous_bounds: None,
        }
    }

    /// Top-left corner in surface coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The sprite's bitmap.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// The sprite's palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Current flags.
    pub fn flags(&self) -> DrawableFlags {
        self.flags
    }

    /// Whether the sprite has movement that no pixel read has consumed yet.
    pub fn is_stale(&self) -> bool {
        self.flags.contains(DrawableFlags::STALE)
    }

    /// Whether the sprite contributes colors.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(DrawableFlags::VISIBLE)
    }

    /// The pixels under the bitmap at the current origin.
    ///
    /// Zero-area at the origin for an empty bitmap.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            self.origin,
            self.origin.translate(extent(self.bitmap.width()), extent(self.bitmap.height())),
        )
    }

    /// The bounding box before the most recent move, if the sprite has moved.
    pub fn previous_bounding_box(&self) -> Option<Rect> {
        self.previous_bounds
    }

    /// Move the sprite.
    ///
    /// Snapshots the current bounding box as the previous one, marks the sprite
    /// stale, and only then replaces the origin. Call before the frame's
    /// [`Scene::draw`](crate::Scene::draw).
    ///
    /// Only the box before the most recent move is remembered. Move at most once
    /// per drawn frame: after two moves between draws the box that was last drawn
    /// is not repainted and its pixels linger on the surface.
    pub fn move_to(&mut self, origin: Point) {
        self.previous_bounds = Some(self.bounding_box());
        self.flags.insert(DrawableFlags::STALE);
        self.origin = origin;
    }

    /// Move the sprite by `(dx, dy)`. See [`move_to`](Self::move_to).
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.move_to(self.origin.translate(dx, dy));
    }

    /// Show or hide the sprite. Changing visibility marks it stale.
    ///
    /// A hidden sprite is never hit by pixel resolution; the
    /// [`Layer::draw`](crate::Layer::draw) that repaints its area marks it resolved.
    pub fn set_visible(&mut self, visible: bool) {
        if self.is_visible() != visible {
            self.flags.set(DrawableFlags::VISIBLE, visible);
            self.flags.insert(DrawableFlags::STALE);
        }
    }

    /// Region that needs re-resolving: previous and current box, or just the
    /// current box before the first move.
    pub fn changed_region(&self) -> Region {
        match self.previous_bounds {
            Some(previous) => Region::group([
                Region::from(previous),
                Region::from(self.bounding_box()),
            ]),
            None => self.bounding_box().into(),
        }
    }

    /// The de-duplicated pixels of [`changed_region`](Self::changed_region).
    pub fn changed_pixels(&self) -> PixelSet {
        self.changed_region().pixels()
    }

    /// Color at surface coordinate `p`, or `None` when transparent, outside the
    /// bitmap, or hidden.
    pub fn pixel(&self, p: Point) -> Option<Rgba8> {
        if !self.is_visible() {
            return None;
        }
        let local = p - self.origin;
        let x = u32::try_from(local.x).ok()?;
        let y = u32::try_from(local.y).ok()?;
        self.palette.get(self.bitmap.get(x, y)?)
    }

    pub(crate) fn mark_resolved(&mut self) {
        self.flags.remove(DrawableFlags::STALE);
    }
}

fn extent(len: u32) -> i32 {
    i32::try_from(len).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn solid(w: u32, h: u32) -> Sprite {
        let cells = vec![1; (w * h) as usize];
        Sprite::new(
            Point::ORIGIN,
            Bitmap::new(w, h, cells),
            Palette::with_transparent_zero([Rgba8::WHITE]),
        )
    }

    #[test]
    fn fresh_sprite_reports_its_box() {
        let s = solid(3, 4);
        let placed = Sprite::new(Point::new(10, 10), s.bitmap().clone(), s.palette().clone());
        assert!(placed.is_stale());
        assert_eq!(placed.previous_bounding_box(), None);
        let px = placed.changed_pixels();
        assert_eq!(px, Rect::from_xywh(10, 10, 3, 4).pixels().collect::<PixelSet>());
    }

    #[test]
    fn move_reports_old_and_new_boxes() {
        let mut s = solid(2, 2);
        s.mark_resolved();
        s.move_to(Point::new(5, 5));
        assert!(s.is_stale());
        assert_eq!(s.previous_bounding_box(), Some(Rect::from_xywh(0, 0, 2, 2)));
        let px = s.changed_pixels();
        assert_eq!(px.len(), 8);
        let expected: PixelSet = Rect::from_xywh(0, 0, 2, 2)
            .pixels()
            .chain(Rect::from_xywh(5, 5, 2, 2).pixels())
            .collect();
        assert_eq!(px, expected);
    }

    #[test]
    fn overlapping_move_is_deduplicated() {
        let mut s = solid(2, 2);
        s.move_by(1, 1);
        assert_eq!(s.changed_pixels().len(), 7);
    }

    #[test]
    fn only_the_latest_move_is_remembered() {
        let mut s = solid(1, 1);
        s.move_to(Point::new(3, 0));
        s.move_to(Point::new(6, 0));
        assert_eq!(s.previous_bounding_box(), Some(Rect::from_xywh(3, 0, 1, 1)));
    }

    #[test]
    fn pixel_lookup_is_local_and_bounded() {
        let bm = Bitmap::from_rows(&[[0_u8, 1], [2, 0]]).unwrap();
        let pal = Palette::with_transparent_zero([Rgba8::WHITE, Rgba8::BLACK]);
        let s = Sprite::new(Point::new(4, 4), bm, pal);
        assert_eq!(s.pixel(Point::new(4, 4)), None);
        assert_eq!(s.pixel(Point::new(5, 4)), Some(Rgba8::WHITE));
        assert_eq!(s.pixel(Point::new(4, 5)), Some(Rgba8::BLACK));
        assert_eq!(s.pixel(Point::new(3, 4)), None);
        assert_eq!(s.pixel(Point::new(6, 4)), None);
        assert_eq!(s.pixel(Point::new(5, 6)), None);
    }

    #[test]
    fn empty_bitmap_does_not_fault() {
        let s = Sprite::new(Point::new(2, 2), Bitmap::default(), Palette::default());
        assert!(s.bounding_box().is_empty());
        assert_eq!(s.bounding_box().origin, Point::new(2, 2));
        assert!(s.changed_pixels().is_empty());
        assert_eq!(s.pixel(Point::new(2, 2)), None);
    }

    #[test]
    fn hiding_marks_stale_and_hides_pixels() {
        let mut s = solid(1, 1);
        s.mark_resolved();
        s.set_visible(false);
        assert!(s.is_stale());
        assert_eq!(s.pixel(Point::ORIGIN), None);
        s.mark_resolved();
        s.set_visible(false);
        assert!(!s.is_stale());
    }
}
