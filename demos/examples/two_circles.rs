// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two glowing circles over a black background.
//!
//! One circle drifts along a diagonal, one pixel per frame, on an additive layer.
//! Each frame prints how many pixels were re-resolved; the last frame is dumped
//! as ASCII art.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p stipple_demos --example two_circles`

use kurbo::Circle;
use stipple_region::Point;
use stipple_scene::{
    Bitmap, BlendMode, FixedClock, Layer, Palette, PixelBuffer, Rgba8, Scene, Sprite,
};

const WIDTH: u32 = 48;
const HEIGHT: u32 = 24;
const FRAME_MS: u64 = 16;

fn circle(origin: Point, color: Rgba8) -> Sprite {
    let bitmap = Bitmap::from_shape(&Circle::new((5.0, 5.0), 5.0), 10, 10, 1);
    Sprite::new(origin, bitmap, Palette::with_transparent_zero([color]))
}

fn main() {
    env_logger::init();

    let mut scene = Scene::new();
    let mut ground = Layer::new();
    ground.push_background(Rgba8::BLACK);
    scene.push_layer(ground);

    let mut glow = Layer::with_blend_mode(BlendMode::Lighter);
    let drifter = glow.push_sprite(circle(Point::new(2, 2), Rgba8::rgb(200, 40, 0)));
    glow.push_sprite(circle(Point::new(20, 8), Rgba8::rgb(0, 60, 220)));
    let glow = scene.push_layer(glow);

    let mut surface = PixelBuffer::new(WIDTH, HEIGHT, Rgba8::BLACK);
    let mut drift = |scene: &mut Scene, time_ms: u64| {
        let step = i32::try_from(time_ms / FRAME_MS).unwrap_or(i32::MAX);
        if let Some(sprite) = scene.sprite_mut(glow, drifter) {
            sprite.move_to(Point::new(2 + step, 2 + step / 2));
        }
    };

    for time_ms in FixedClock::new(FRAME_MS).take(24) {
        let stats = scene.tick(time_ms, &mut drift, &mut surface);
        println!(
            "t={time_ms:>4}ms changed={:>4} fills={:>4}",
            stats.changed_pixels, stats.fills
        );
    }

    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| {
                let p = Point::new(i32::try_from(x).unwrap(), i32::try_from(y).unwrap());
                match surface.get(p) {
                    Some(c) if c.r > 0 && c.b > 0 => '#',
                    Some(c) if c.r > 0 => 'r',
                    Some(c) if c.b > 0 => 'b',
                    _ => '.',
                }
            })
            .collect();
        println!("{row}");
    }
}
