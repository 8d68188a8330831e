// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory RGBA framebuffer.

use alloc::vec;
use alloc::vec::Vec;

use stipple_region::{Point, Rect};

use crate::color::Rgba8;
use crate::surface::{BlendMode, Surface};

/// A `width` x `height` grid of colors anchored at the coordinate origin.
///
/// Fills outside the buffer are ignored.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
    mode: BlendMode,
}

impl PixelBuffer {
    /// Create a buffer filled with `clear`.
    pub fn new(width: u32, height: u32, clear: Rgba8) -> Self {
        Self {
            width,
            height,
            pixels: vec![clear; width as usize * height as usize],
            mode: BlendMode::Normal,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The area the buffer covers.
    pub fn bounds(&self) -> Rect {
        Rect::from_xywh(
            0,
            0,
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        )
    }

    /// The blend mode applied to fills.
    pub fn blend_mode(&self) -> BlendMode {
        self.mode
    }

    /// Color at `p`, or `None` outside the buffer.
    pub fn get(&self, p: Point) -> Option<Rgba8> {
        self.offset(p).map(|i| self.pixels[i])
    }

    /// Overwrite every pixel with `color`.
    pub fn clear(&mut self, color: Rgba8) {
        self.pixels.fill(color);
    }

    /// Row-major pixel storage.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    fn offset(&self, p: Point) -> Option<usize> {
        let x = u32::try_from(p.x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(p.y).ok().filter(|y| *y < self.height)?;
        Some(y as usize * self.width as usize + x as usize)
    }
}

impl Surface for PixelBuffer {
    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.mode = mode;
    }

    fn fill_pixel(&mut self, p: Point, color: Rgba8) {
        if let Some(i) = self.offset(p) {
            self.pixels[i] = self.mode.blend(color, self.pixels[i]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_blend_and_clip() {
        let mut buf = PixelBuffer::new(4, 3, Rgba8::BLACK);
        assert_eq!(buf.bounds(), Rect::from_xywh(0, 0, 4, 3));
        buf.fill_pixel(Point::new(1, 1), Rgba8::rgb(100, 0, 0));
        buf.set_blend_mode(BlendMode::Lighter);
        buf.fill_pixel(Point::new(1, 1), Rgba8::rgb(200, 7, 0));
        assert_eq!(buf.get(Point::new(1, 1)), Some(Rgba8::rgb(255, 7, 0)));

        // Out of range: ignored, not a panic.
        buf.fill_pixel(Point::new(-1, 0), Rgba8::WHITE);
        buf.fill_pixel(Point::new(4, 0), Rgba8::WHITE);
        buf.fill_pixel(Point::new(0, 3), Rgba8::WHITE);
        assert_eq!(buf.get(Point::new(4, 0)), None);
        assert_eq!(
            buf.pixels().iter().filter(|c| **c == Rgba8::BLACK).count(),
            11
        );
    }

    #[test]
    fn clear_resets_every_pixel() {
        let mut buf = PixelBuffer::new(2, 2, Rgba8::BLACK);
        buf.fill_pixel(Point::ORIGIN, Rgba8::WHITE);
        buf.clear(Rgba8::TRANSPARENT);
        assert!(buf.pixels().iter().all(|c| *c == Rgba8::TRANSPARENT));
    }
}
