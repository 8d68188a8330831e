// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use stipple_region::Point;
use stipple_scene::{
    Bitmap, BlendMode, DrawableId, Layer, LayerId, Palette, PixelBuffer, Rgba8, Scene, Sprite,
};

const SIZE: u32 = 1024;

fn circle_sprite(origin: Point, diameter: u32, color: Rgba8) -> Sprite {
    let r = f64::from(diameter) / 2.0;
    let bitmap = Bitmap::from_shape(&kurbo::Circle::new((r, r), r), diameter, diameter, 1);
    Sprite::new(origin, bitmap, Palette::with_transparent_zero([color]))
}

/// A large background layer plus `count` sprites on an additive layer, already drawn once.
fn settled_scene(count: usize, diameter: u32) -> (Scene, LayerId, Vec<DrawableId>, PixelBuffer) {
    let mut scene = Scene::new();
    let mut ground = Layer::new();
    ground.push_background(Rgba8::BLACK);
    scene.push_layer(ground);

    let mut glow = Layer::with_blend_mode(BlendMode::Lighter);
    let ids = (0..count)
        .map(|i| {
            let offset = i32::try_from(i).unwrap() * 24;
            glow.push_sprite(circle_sprite(
                Point::new(offset % 960, (offset / 960) * 24),
                diameter,
                Rgba8::rgb(40, 90, 200),
            ))
        })
        .collect();
    let top = scene.push_layer(glow);

    let mut buf = PixelBuffer::new(SIZE, SIZE, Rgba8::BLACK);
    let _ = scene.draw(&mut buf);
    (scene, top, ids, buf)
}

fn bench_idle_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_frame");
    let (mut scene, _, _, mut buf) = settled_scene(64, 16);
    // Nothing moves: cost should not depend on the surface size.
    group.bench_function("sprites_64", |b| {
        b.iter(|| black_box(scene.draw(&mut buf)));
    });
    group.finish();
}

fn bench_moving_sprites(c: &mut Criterion) {
    let mut group = c.benchmark_group("moving_sprites");
    for &count in &[1_usize, 16, 128] {
        group.bench_function(format!("diagonal_step_{count}"), |b| {
            b.iter_batched(
                || settled_scene(count, 16),
                |(mut scene, top, ids, mut buf)| {
                    for id in &ids {
                        scene.sprite_mut(top, *id).unwrap().move_by(1, 1);
                    }
                    black_box(scene.draw(&mut buf));
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_idle_frame, bench_moving_sprites);
criterion_main!(benches);
