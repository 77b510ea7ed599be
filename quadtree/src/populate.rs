//! Procedural point generators layered on [`QuadTree::insert`].

use crate::quadtree::QuadTree;
use common::shapes::Point;
use log::debug;
use noise::NoiseFn;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct PerlinConfig {
    /// Grid cells whose sample exceeds this get a point.
    pub cutoff: f64,
    /// Grid spacing in pixels. Values below 1 are treated as 1.
    pub stride: u32,
    /// Largest jitter applied to a point on each axis.
    pub max_deviation: u32,
}

impl Default for PerlinConfig {
    fn default() -> Self {
        PerlinConfig {
            cutoff: 0.2,
            stride: 8,
            max_deviation: 4,
        }
    }
}

/// Inserts `count` uniformly random points. Returns how many were accepted.
pub fn populate_with_noise<R: Rng>(tree: &mut QuadTree, count: usize, rng: &mut R) -> usize {
    let boundary = tree.boundary();
    let mut inserted = 0usize;
    for _ in 0..count {
        if tree.insert(boundary.random_point_inside(rng)) {
            inserted += 1;
        }
    }
    debug!("inserted {} of {} random points", inserted, count);
    inserted
}

/// Samples `noise` on a `stride` grid over the tree and inserts a jittered
/// point wherever the sample exceeds the cutoff.
///
/// Coordinates are normalized to the boundary width before sampling, so the
/// whole tree maps onto the unit square of the noise domain. Jittered points
/// are clamped back inside the boundary.
pub fn populate_with_perlin_noise<N, R>(
    tree: &mut QuadTree,
    noise: &N,
    config: &PerlinConfig,
    rng: &mut R,
) -> usize
where
    N: NoiseFn<f64, 2>,
    R: Rng,
{
    let boundary = tree.boundary();
    let dimension = boundary.width;
    let stride = config.stride.max(1) as usize;
    let max_offset = i64::from(dimension) - 1;
    let deviation = i64::from(config.max_deviation);

    let mut sampled = 0usize;
    let mut inserted = 0usize;
    for local_x in (0..dimension).step_by(stride) {
        for local_y in (0..dimension).step_by(stride) {
            sampled += 1;
            let sample = noise.get([
                f64::from(local_x) / f64::from(dimension),
                f64::from(local_y) / f64::from(dimension),
            ]);
            if sample <= config.cutoff {
                continue;
            }
            let x = jitter(local_x, deviation, max_offset, rng);
            let y = jitter(local_y, deviation, max_offset, rng);
            let point = Point::new(
                (i64::from(boundary.x) + x) as f32,
                (i64::from(boundary.y) + y) as f32,
            );
            if tree.insert(point) {
                inserted += 1;
            }
        }
    }
    debug!(
        "noise population sampled {} cells, inserted {} points (cutoff {})",
        sampled, inserted, config.cutoff
    );
    inserted
}

fn jitter<R: Rng>(value: u32, deviation: i64, max_offset: i64, rng: &mut R) -> i64 {
    let offset = if deviation > 0 {
        rng.gen_range(-deviation..=deviation)
    } else {
        0
    };
    (i64::from(value) + offset).clamp(0, max_offset)
}
