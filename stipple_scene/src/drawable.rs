// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The things a layer can hold: sprites and solid backgrounds.

use stipple_region::{PixelSet, Point, Region};

use crate::color::Rgba8;
use crate::sprite::Sprite;

bitflags::bitflags! {
    /// Per-drawable state bits.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DrawableFlags: u8 {
        /// Moved (or shown/hidden) since a layer last resolved a pixel to it.
        const STALE   = 0b0000_0001;
        /// Contributes colors when queried.
        const VISIBLE = 0b0000_0010;
    }
}

impl Default for DrawableFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// A constant color covering every coordinate.
///
/// Backgrounds never move, so they are never stale and never report changed
/// pixels. Their bounding box is unbounded and reported as [`Region::Empty`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Background {
    /// Fill color.
    pub color: Rgba8,
}

impl Background {
    /// Create a background of `color`.
    pub const fn new(color: Rgba8) -> Self {
        Self { color }
    }
}

/// Identifier for a drawable within its [`Layer`](crate::Layer).
///
/// Drawables are never removed, so identifiers stay valid for the layer's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DrawableId(pub(crate) usize);

impl DrawableId {
    /// Paint-order position within the layer.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Something a layer paints.
#[derive(Clone, Debug)]
pub enum Drawable {
    /// A movable raster sprite.
    Sprite(Sprite),
    /// A solid fill.
    Background(Background),
}

impl Drawable {
    /// Whether the drawable has unresolved movement.
    pub fn is_stale(&self) -> bool {
        match self {
            Self::Sprite(s) => s.is_stale(),
            Self::Background(_) => false,
        }
    }

    /// Where the drawable currently paints.
    pub fn bounding_box(&self) -> Region {
        match self {
            Self::Sprite(s) => s.bounding_box().into(),
            Self::Background(_) => Region::Empty,
        }
    }

    /// Add the pixels this drawable needs re-resolved to `out`.
    pub fn extend_changed_pixels(&self, out: &mut PixelSet) {
        match self {
            Self::Sprite(s) => s.changed_region().extend_pixels(out),
            Self::Background(_) => {}
        }
    }

    /// Color at `p`, or `None` when transparent there.
    pub fn pixel(&self, p: Point) -> Option<Rgba8> {
        match self {
            Self::Sprite(s) => s.pixel(p),
            Self::Background(b) => Some(b.color),
        }
    }

    /// Whether the drawable currently paints anything. Backgrounds always do.
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Sprite(s) => s.is_visible(),
            Self::Background(_) => true,
        }
    }

    pub(crate) fn mark_resolved(&mut self) {
        if let Self::Sprite(s) = self {
            s.mark_resolved();
        }
    }
}

impl From<Sprite> for Drawable {
    fn from(s: Sprite) -> Self {
        Self::Sprite(s)
    }
}

impl From<Background> for Drawable {
    fn from(b: Background) -> Self {
        Self::Background(b)
    }
}
