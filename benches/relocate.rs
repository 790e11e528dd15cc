// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for sampling through relocated views.
//!
//! Measures the cost of:
//! - Reading every pixel of a raster directly
//! - Reading it through one relocation
//! - Reading it through many nested relocations, with and without flattening

use criterion::{criterion_group, criterion_main, Criterion};
use image_relocate::{relocate, Image, RasterImage};
use std::hint::black_box;

fn sample_raster() -> RasterImage {
    RasterImage::new(image_rs::RgbaImage::from_fn(256, 256, |x, y| {
        image_rs::Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    }))
}

fn sum_pixels<I: Image + ?Sized>(image: &I) -> u64 {
    image
        .bounds()
        .points()
        .map(|p| u64::from(image.color_at_point(p).g))
        .sum()
}

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("relocate");
    let raster = sample_raster();

    group.bench_function("direct", |b| {
        b.iter(|| black_box(sum_pixels(&raster)));
    });

    let moved = relocate::wrap(-17, 31, &raster);
    group.bench_function("single_wrap", |b| {
        b.iter(|| black_box(sum_pixels(&moved)));
    });

    let mut nested: Box<dyn Image + '_> = Box::new(&raster);
    for _ in 0..16 {
        nested = Box::new(relocate::wrap(1, -1, nested));
    }
    group.bench_function("nested_16_dyn", |b| {
        b.iter(|| black_box(sum_pixels(&*nested)));
    });

    let flattened = relocate::wrap(5, 5, relocate::wrap(-3, 8, &raster)).flatten();
    group.bench_function("flattened", |b| {
        b.iter(|| black_box(sum_pixels(&flattened)));
    });

    group.finish();
}

criterion_group!(benches, bench_sampling);
criterion_main!(benches);
