// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use stipple_region::{Rect, Region};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_i32(&mut self, below: i32) -> i32 {
        (self.next_u64() % below as u64) as i32
    }
}

/// Pairs of before/after boxes, as produced by sprites stepping a few pixels.
fn gen_moves(count: usize, size: i32, step: i32, extent: i32) -> Vec<Region> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let x = rng.next_i32(extent);
        let y = rng.next_i32(extent);
        let dx = rng.next_i32(2 * step + 1) - step;
        let dy = rng.next_i32(2 * step + 1) - step;
        out.push(Region::group([
            Region::from(Rect::from_xywh(x, y, size, size)),
            Region::from(Rect::from_xywh(x + dx, y + dy, size, size)),
        ]));
    }
    out
}

fn bench_rect_pixels(c: &mut Criterion) {
    let mut group = c.benchmark_group("rect_pixels");
    for &n in &[16_i32, 64, 256] {
        let rect = Rect::from_xywh(0, 0, n, n);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("iterate_n{n}"), |b| {
            b.iter(|| black_box(rect.pixels().count()));
        });
        let region = Region::from(rect);
        group.bench_function(format!("collect_n{n}"), |b| {
            b.iter(|| black_box(region.pixels().len()));
        });
    }
    group.finish();
}

fn bench_group_union(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_union");
    for &count in &[8_usize, 64, 512] {
        let moves = gen_moves(count, 16, 3, 1024);
        let region: Region = moves.into_iter().collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("sprites_{count}"), |b| {
            b.iter(|| black_box(region.pixels().len()));
        });
    }
    // Everything piled onto the same spot: maximal de-duplication.
    let stacked: Region = gen_moves(256, 16, 1, 1).into_iter().collect();
    group.bench_function("stacked_256", |b| {
        b.iter(|| black_box(stacked.pixels().len()));
    });
    group.finish();
}

criterion_group!(benches, bench_rect_pixels, bench_group_union);
criterion_main!(benches);
