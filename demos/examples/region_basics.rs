// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region basics: rectangles, de-duplicated unions, and the point cache.
//!
//! Run:
//! - `cargo run -p stipple_demos --example region_basics`

use stipple_region::{Point, PointCache, Rect, Region};

fn main() {
    // A 2x2 sprite moving from (0, 0) to (5, 5).
    let before = Rect::from_xywh(0, 0, 2, 2);
    let after = Rect::from_xywh(5, 5, 2, 2);
    let changed = Region::group([Region::from(before), Region::from(after)]);
    let pixels = changed.pixels();
    println!("changed pixels ({}): {:?}", pixels.len(), pixels);
    println!("bounds: {:?}", changed.bounds());
    assert_eq!(pixels.len(), 8, "disjoint boxes share no pixels");

    // Overlapping children are reported once.
    let twice = Region::group([Region::from(before), Region::from(before)]);
    assert_eq!(twice.pixels().len(), before.pixels().count());

    // Degenerate rectangles are empty, not errors.
    let flat = Rect::new(Point::new(5, 5), Point::new(5, 5));
    println!("degenerate rect is empty: {}", flat.is_empty());

    // Interning hands out identity-comparable handles, scoped to the cache.
    let mut cache = PointCache::new();
    let a = cache.intern(3, 4);
    let b = cache.add(Point::new(1, 1), Point::new(2, 3));
    println!("intern(3, 4) == (1, 1) + (2, 3): {}", a == b);
    println!("kurbo view of the first box: {:?}", before.to_kurbo());
}
