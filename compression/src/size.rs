//! Theoretical encoded sizes of a region quadtree.
//!
//! None of these produce bytes; they count what a serializer would need so
//! that different schemes can be compared against the raw raster.

use crate::region_tree::RegionQuadTree;
use serialization::compute_compressed_size_in_bytes;

/// 2-byte width, 2-byte x, 2-byte y and one byte per channel.
pub const NAIVE_LEAF_BYTES: usize = 2 + 2 + 2 + 1 + 1 + 1;
/// Geometry recovered from traversal order; one byte per channel plus one
/// structural byte.
pub const OPTIMIZED_LEAF_BYTES: usize = 1 + 1 + 1 + 1;
/// 8 bits of luminance or palette index plus 1 structural bit.
pub const MONOCHROME_LEAF_BITS: usize = 8 + 1;

pub fn calculate_quadtree_size_after_save(tree: &RegionQuadTree) -> usize {
    tree.filled_leaf_count() * NAIVE_LEAF_BYTES
}

pub fn calculate_quadtree_size_after_save_optimized(tree: &RegionQuadTree) -> usize {
    tree.filled_leaf_count() * OPTIMIZED_LEAF_BYTES
}

/// Result is in bits.
pub fn calculate_quadtree_size_after_save_optimized_monochrome(tree: &RegionQuadTree) -> usize {
    tree.filled_leaf_count() * MONOCHROME_LEAF_BITS
}

/// Leaf fields flattened in traversal order: width, x, y, red, green, blue.
pub fn leaf_records(tree: &RegionQuadTree) -> Vec<u32> {
    let mut records = Vec::with_capacity(tree.filled_leaf_count() * 6);
    tree.for_each_filled_leaf(|data| {
        records.extend_from_slice(&[
            data.width,
            data.x,
            data.y,
            u32::from(data.color.red),
            u32::from(data.color.green),
            u32::from(data.color.blue),
        ]);
    });
    records
}

/// Size of [`leaf_records`] after varint compression.
pub fn calculate_quadtree_size_varint(tree: &RegionQuadTree) -> usize {
    compute_compressed_size_in_bytes(&leaf_records(tree))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub filled_leaves: usize,
    pub raw_rgba_bytes: usize,
    pub naive_bytes: usize,
    pub optimized_bytes: usize,
    pub monochrome_bits: usize,
    pub varint_bytes: usize,
}

impl SizeReport {
    pub fn new(tree: &RegionQuadTree, image_width: u32, image_height: u32) -> Self {
        let filled_leaves = tree.filled_leaf_count();
        Self {
            filled_leaves,
            raw_rgba_bytes: image_width as usize * image_height as usize * 4,
            naive_bytes: filled_leaves * NAIVE_LEAF_BYTES,
            optimized_bytes: filled_leaves * OPTIMIZED_LEAF_BYTES,
            monochrome_bits: filled_leaves * MONOCHROME_LEAF_BITS,
            varint_bytes: calculate_quadtree_size_varint(tree),
        }
    }

    pub fn monochrome_bytes(&self) -> usize {
        self.monochrome_bits.div_ceil(8)
    }

    pub fn kilobytes(bytes: usize) -> f64 {
        bytes as f64 / 1024.0
    }

    /// `bytes` relative to the raw RGBA size. 0 for an empty image.
    pub fn ratio(&self, bytes: usize) -> f64 {
        if self.raw_rgba_bytes == 0 {
            return 0.0;
        }
        bytes as f64 / self.raw_rgba_bytes as f64
    }
}
