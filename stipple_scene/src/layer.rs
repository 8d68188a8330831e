// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layers: ordered drawables sharing one blend mode.

use alloc::vec::Vec;

use stipple_region::{PixelSet, Point, Region};

use crate::color::Rgba8;
use crate::drawable::{Background, Drawable, DrawableId};
use crate::sprite::Sprite;
use crate::surface::{BlendMode, Surface};

/// An ordered list of drawables and the blend mode they are composited with.
///
/// Pixel resolution is first-match: [`pixel`](Self::pixel) scans drawables from
/// index `0` upward and the first non-transparent color wins.
#[derive(Clone, Debug, Default)]
pub struct Layer {
    drawables: Vec<Drawable>,
    blend_mode: BlendMode,
}

impl Layer {
    /// Create an empty layer with [`BlendMode::Normal`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty layer with `blend_mode`.
    pub fn with_blend_mode(blend_mode: BlendMode) -> Self {
        Self {
            drawables: Vec::new(),
            blend_mode,
        }
    }

    /// The layer's blend mode.
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Change the layer's blend mode.
    ///
    /// Takes effect on the next draw; it does not by itself mark anything changed.
    pub fn set_blend_mode(&mut self, blend_mode: BlendMode) {
        self.blend_mode = blend_mode;
    }

    /// Append a drawable at the end of the scan order.
    pub fn push(&mut self, drawable: impl Into<Drawable>) -> DrawableId {
        self.drawables.push(drawable.into());
        DrawableId(self.drawables.len() - 1)
    }

    /// Append a sprite. See [`push`](Self::push).
    pub fn push_sprite(&mut self, sprite: Sprite) -> DrawableId {
        self.push(sprite)
    }

    /// Append a solid background. See [`push`](Self::push).
    pub fn push_background(&mut self, color: Rgba8) -> DrawableId {
        self.push(Background::new(color))
    }

    /// The drawable at `id`.
    pub fn get(&self, id: DrawableId) -> Option<&Drawable> {
        self.drawables.get(id.0)
    }

    /// The sprite at `id`, if that drawable is a sprite.
    pub fn sprite(&self, id: DrawableId) -> Option<&Sprite> {
        match self.drawables.get(id.0)? {
            Drawable::Sprite(s) => Some(s),
            Drawable::Background(_) => None,
        }
    }

    /// Mutable access to the sprite at `id`, for moving it.
    pub fn sprite_mut(&mut self, id: DrawableId) -> Option<&mut Sprite> {
        match self.drawables.get_mut(id.0)? {
            Drawable::Sprite(s) => Some(s),
            Drawable::Background(_) => None,
        }
    }

    /// Drawables in scan order.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Number of drawables.
    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    /// Whether the layer holds no drawables.
    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Whether any drawable is stale.
    pub fn is_stale(&self) -> bool {
        self.drawables.iter().any(Drawable::is_stale)
    }

    /// Union of the drawables' bounding boxes.
    pub fn bounding_box(&self) -> Region {
        self.drawables.iter().map(Drawable::bounding_box).collect()
    }

    /// Pixels needing re-resolution: the union over stale drawables only.
    ///
    /// A layer in which nothing moved reports nothing, however large it is.
    pub fn changed_pixels(&self) -> PixelSet {
        let mut out = PixelSet::new();
        self.extend_changed_pixels(&mut out);
        out
    }

    /// Add [`changed_pixels`](Self::changed_pixels) to `out`.
    pub fn extend_changed_pixels(&self, out: &mut PixelSet) {
        for drawable in self.drawables.iter().filter(|d| d.is_stale()) {
            drawable.extend_changed_pixels(out);
        }
    }

    /// Resolve the color at `p`.
    ///
    /// The first drawable with a color at `p` is marked resolved (no longer
    /// stale) and its color returned. Stale drawables behind it are not
    /// reached and stay stale.
    pub fn pixel(&mut self, p: Point) -> Option<Rgba8> {
        for drawable in &mut self.drawables {
            if let Some(color) = drawable.pixel(p) {
                drawable.mark_resolved();
                return Some(color);
            }
        }
        None
    }

    /// Resolve `p` and fill it on `surface`; returns whether anything was filled.
    ///
    /// Transparent pixels issue no fill, so a layer sends at most one fill per
    /// changed pixel rather than exactly one. The surface's current blend mode
    /// applies; [`draw`](Self::draw) selects this layer's mode first.
    pub fn draw_pixel<S: Surface + ?Sized>(&mut self, p: Point, surface: &mut S) -> bool {
        match self.pixel(p) {
            Some(color) => {
                surface.fill_pixel(p, color);
                true
            }
            None => false,
        }
    }

    /// Select this layer's blend mode on `surface`, then draw every pixel in
    /// `pixels`. Returns the number of fills issued, which counts only pixels
    /// this layer resolved to a color.
    ///
    /// Hidden sprites are never hit by [`pixel`](Self::pixel), so once their
    /// changed pixels have been drawn they are marked resolved here.
    pub fn draw<'a, S: Surface + ?Sized>(
        &mut self,
        pixels: impl IntoIterator<Item = &'a Point>,
        surface: &mut S,
    ) -> usize {
        surface.set_blend_mode(self.blend_mode);
        let mut fills = 0;
        for p in pixels {
            if self.draw_pixel(*p, &mut *surface) {
                fills += 1;
            }
        }
        for drawable in self.drawables.iter_mut().filter(|d| !d.is_visible()) {
            drawable.mark_resolved();
        }
        fills
    }
}
