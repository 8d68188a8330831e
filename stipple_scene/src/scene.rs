// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: layers composited bottom to top, redrawn by changed pixels only.

use alloc::vec::Vec;

use stipple_region::{PixelSet, Region};

use crate::drawable::DrawableId;
use crate::driver::Animation;
use crate::layer::Layer;
use crate::sprite::Sprite;
use crate::surface::Surface;

/// Identifier for a layer within its [`Scene`].
///
/// Layers are never removed, so identifiers stay valid for the scene's lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(usize);

impl LayerId {
    /// Position in the bottom-to-top paint order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Counters for one [`Scene::draw`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Distinct pixels re-resolved.
    pub changed_pixels: usize,
    /// Fill commands issued across all layers.
    ///
    /// Pixels a layer resolves to transparent issue no fill, so this can be less
    /// than `changed_pixels` times the number of layers.
    pub fills: usize,
}

/// Ordered layers, painted bottom (index `0`) to top.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    layers: Vec<Layer>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer on top of the existing ones.
    pub fn push_layer(&mut self, layer: Layer) -> LayerId {
        self.layers.push(layer);
        LayerId(self.layers.len() - 1)
    }

    /// The layer at `id`.
    pub fn layer(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get(id.0)
    }

    /// Mutable access to the layer at `id`.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut Layer> {
        self.layers.get_mut(id.0)
    }

    /// Layers bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The sprite `sprite` of layer `layer`.
    pub fn sprite(&self, layer: LayerId, sprite: DrawableId) -> Option<&Sprite> {
        self.layer(layer)?.sprite(sprite)
    }

    /// Mutable access to a sprite, for moving it between frames.
    pub fn sprite_mut(&mut self, layer: LayerId, sprite: DrawableId) -> Option<&mut Sprite> {
        self.layer_mut(layer)?.sprite_mut(sprite)
    }

    /// Union of every layer's bounding box.
    pub fn bounding_box(&self) -> Region {
        self.layers.iter().map(Layer::bounding_box).collect()
    }

    /// The de-duplicated union of every layer's changed pixels.
    pub fn changed_pixels(&self) -> PixelSet {
        let mut out = PixelSet::new();
        for layer in &self.layers {
            layer.extend_changed_pixels(&mut out);
        }
        out
    }

    /// Repaint every changed pixel through every layer.
    ///
    /// Each changed pixel is resolved by each layer in bottom-to-top order, so upper
    /// layers composite over lower ones under their blend mode. Layers are visited
    /// one at a time: the surface receives one blend-mode selection per layer,
    /// followed by that layer's fills. Pixels are independent, so the composite
    /// equals visiting pixel by pixel.
    ///
    /// Does nothing, not even a blend-mode selection, when no pixel changed.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let changed = self.changed_pixels();
        let mut stats = FrameStats {
            changed_pixels: changed.len(),
            fills: 0,
        };
        if changed.is_empty() {
            log::trace!("draw: nothing changed");
            return stats;
        }
        for (i, layer) in self.layers.iter_mut().enumerate() {
            let fills = layer.draw(&changed, &mut *surface);
            log::trace!(
                "draw: layer {i} ({:?}) issued {fills} fills",
                layer.blend_mode()
            );
            stats.fills += fills;
        }
        log::debug!(
            "draw: {} changed pixels, {} fills over {} layers",
            stats.changed_pixels,
            stats.fills,
            self.layers.len()
        );
        stats
    }

    /// Run one frame: let `animation` move things for `time_ms`, then draw.
    ///
    /// All moves of a frame complete before its changed pixels are computed.
    pub fn tick<A, S>(&mut self, time_ms: u64, animation: &mut A, surface: &mut S) -> FrameStats
    where
        A: Animation + ?Sized,
        S: Surface + ?Sized,
    {
        animation.update(self, time_ms);
        self.draw(surface)
    }
}
