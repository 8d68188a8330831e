// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stipple Region: integer pixel regions for dirty-rectangle redraw.
//!
//! Stipple Region is the geometry layer underneath a sprite compositor that repaints
//! only what changed between frames.
//!
//! - [`Point`]: an integer pixel coordinate with saturating arithmetic and row-major ordering.
//! - [`PointCache`]: an explicit interning table handing out identity-comparable [`PointHandle`]s.
//! - [`Rect`]: a half-open pixel rectangle with a lazy row-major pixel iterator.
//! - [`Region`]: a closed algebra over `Empty`, `Rect`, and `Group` whose
//!   [`pixels`](Region::pixels) are a de-duplicated [`PixelSet`].
//!
//! Describing changed areas as regions rather than full-surface bitmap diffs keeps
//! redraw work proportional to the area that moved, not to the size of the surface.
//!
//! # Example
//!
//! ```rust
//! use stipple_region::{Point, Rect, Region};
//!
//! // Where a 2x2 sprite was, and where it is now.
//! let before = Rect::from_xywh(0, 0, 2, 2);
//! let after = Rect::from_xywh(1, 1, 2, 2);
//!
//! let changed = Region::group([Region::from(before), Region::from(after)]);
//! let pixels = changed.pixels();
//!
//! // The shared pixel (1, 1) is reported once.
//! assert_eq!(pixels.len(), 7);
//! assert!(pixels.contains(&Point::new(1, 1)));
//! assert_eq!(changed.bounds(), Some(Rect::from_xywh(0, 0, 3, 3)));
//! ```
//!
//! Interning is opt-in and scoped to whoever owns the cache:
//!
//! ```rust
//! use stipple_region::{Point, PointCache};
//!
//! let mut cache = PointCache::new();
//! let a = cache.intern(3, 4);
//! assert_eq!(a, cache.intern(3, 4));
//! assert_eq!(cache.add(Point::new(1, 1), Point::new(2, 3)), a);
//!
//! // Scope the cache to a frame by clearing it.
//! cache.clear();
//! assert_eq!(cache.point(a), None);
//! ```
//!
//! ## Kurbo interop
//!
//! [`Rect::to_kurbo`] and [`Rect::from_kurbo`] convert to and from float-space
//! [`kurbo::Rect`]s, rounding outward so the pixel rectangle always covers the
//! float one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod point;
pub mod rect;
pub mod region;

pub use point::{Point, PointCache, PointHandle};
pub use rect::{Rect, RectPixels};
pub use region::{PixelSet, Region};
