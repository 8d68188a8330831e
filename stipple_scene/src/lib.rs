// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Scene: a sprite compositor that repaints only what moved.
//!
//! A [`Scene`] is a stack of [`Layer`]s, each an ordered list of [`Drawable`]s (movable
//! [`Sprite`]s and solid [`Background`]s) with a [`BlendMode`]. Every frame:
//!
//! 1. The driver moves sprites ([`Sprite::move_to`]). Each move remembers the box the
//!    sprite is leaving and marks it stale.
//! 2. [`Scene::changed_pixels`] unions, without duplicates, the old and new boxes of
//!    every stale sprite across all layers. Layers with nothing stale add nothing.
//! 3. [`Scene::draw`] resolves each changed pixel through every layer, bottom to top,
//!    and sends the results to a [`Surface`] under each layer's blend mode.
//!
//! Work per frame is proportional to the area sprites moved through, not to the size
//! of the surface.
//!
//! ## Staleness
//!
//! A layer resolves a pixel to the first drawable with a color there and clears that
//! drawable's stale flag. Drawables occluded at every pixel they cover are never reached
//! and stay stale; this costs redundant re-resolution, never a wrong color.
//!
//! # Example
//!
//! ```rust
//! use stipple_region::Point;
//! use stipple_scene::{
//!     Bitmap, BlendMode, Layer, Palette, PixelBuffer, Rgba8, Scene, Sprite,
//! };
//!
//! let mut scene = Scene::new();
//!
//! let mut ground = Layer::new();
//! ground.push_background(Rgba8::BLACK);
//! scene.push_layer(ground);
//!
//! let mut glow = Layer::with_blend_mode(BlendMode::Lighter);
//! let bitmap = Bitmap::from_rows(&[[1_u8, 1], [1, 1]]).unwrap();
//! let palette = Palette::with_transparent_zero([Rgba8::rgb(200, 0, 0)]);
//! let dot = glow.push_sprite(Sprite::new(Point::new(1, 1), bitmap, palette));
//! let glow = scene.push_layer(glow);
//!
//! let mut surface = PixelBuffer::new(8, 8, Rgba8::BLACK);
//! let first = scene.draw(&mut surface);
//! assert_eq!(first.changed_pixels, 4);
//!
//! // Nothing moved: nothing to do.
//! assert_eq!(scene.draw(&mut surface).changed_pixels, 0);
//!
//! scene.sprite_mut(glow, dot).unwrap().move_by(1, 0);
//! let second = scene.draw(&mut surface);
//! assert_eq!(second.changed_pixels, 6);
//! assert_eq!(surface.get(Point::new(1, 1)), Some(Rgba8::BLACK));
//! assert_eq!(surface.get(Point::new(3, 2)), Some(Rgba8::rgb(200, 0, 0)));
//! ```
//!
//! ## Surfaces
//!
//! [`Surface`] is the boundary to whatever displays pixels. [`PixelBuffer`] is an
//! in-memory RGBA framebuffer; [`RecordingSurface`] records the command stream for
//! tests and debugging.
//!
//! ## Logging
//!
//! Draw statistics are emitted through the [`log`] facade at `debug` (per frame) and
//! `trace` (per layer) levels.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod bitmap;
pub mod buffer;
pub mod color;
pub mod drawable;
pub mod driver;
pub mod layer;
pub mod scene;
pub mod sprite;
pub mod surface;

pub use bitmap::{Bitmap, BitmapError};
pub use buffer::PixelBuffer;
pub use color::{Palette, Rgba8};
pub use drawable::{Background, Drawable, DrawableFlags, DrawableId};
pub use driver::{Animation, FixedClock};
pub use layer::Layer;
pub use scene::{FrameStats, LayerId, Scene};
pub use sprite::Sprite;
pub use surface::{BlendMode, RecordingSurface, Surface, SurfaceCommand};
