use compression::size::calculate_quadtree_size_varint;
use compression::{quadtree_to_image_data, Config, ExtractSettings, PixelBuffer, RegionQuadTree, Rgb};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::*;

fn noisy_image(side: u32) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(0);
    let mut buffer = PixelBuffer::new(side, side);
    for y in 0..side {
        for x in 0..side {
            // Mostly smooth with a little noise so some quartets merge.
            let base = ((x / 16 + y / 16) * 20) as u8;
            let jitter: u8 = rng.gen_range(0..4);
            buffer.put_pixel(x, y, Rgb::new(base, base.wrapping_add(jitter), 128).to_rgba());
        }
    }
    buffer
}

fn load_benchmark(c: &mut Criterion) {
    let image = noisy_image(256);
    c.bench_function("region_tree_from_pixels", |b| {
        b.iter(|| RegionQuadTree::from_pixels(black_box(&image)))
    });
}

fn compress_benchmark(c: &mut Criterion) {
    let image = noisy_image(256);
    let tree = RegionQuadTree::from_pixels(&image).unwrap();

    c.bench_function("region_tree_compress_parallel", |b| {
        b.iter(|| {
            let mut tree = tree.clone();
            tree.compress(black_box(6.0))
        })
    });

    let sequential = RegionQuadTree::from_pixels_with_config(
        &image,
        Config {
            parallel_min_width: u32::MAX,
        },
    )
    .unwrap();
    c.bench_function("region_tree_compress_sequential", |b| {
        b.iter(|| {
            let mut tree = sequential.clone();
            tree.compress(black_box(6.0))
        })
    });
}

fn extract_benchmark(c: &mut Criterion) {
    let mut tree = RegionQuadTree::from_pixels(&noisy_image(256)).unwrap();
    tree.compress(6.0);
    let settings = ExtractSettings {
        should_draw_borders: true,
        ..ExtractSettings::default()
    };

    c.bench_function("region_tree_extract", |b| {
        b.iter(|| quadtree_to_image_data(&tree, 256, 256, black_box(&settings)))
    });

    c.bench_function("region_tree_varint_size", |b| {
        b.iter(|| calculate_quadtree_size_varint(black_box(&tree)))
    });
}

criterion_group!(
    compression_benchmarks,
    load_benchmark,
    compress_benchmark,
    extract_benchmark
);
criterion_main!(compression_benchmarks);
