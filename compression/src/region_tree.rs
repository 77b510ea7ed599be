use crate::colour::{blend_colours, colour_difference, Rgb};
use crate::config::Config;
use crate::error::{CompressionError, CompressionResult};
use crate::pixels::PixelBuffer;
use common::shapes::Rectangle;
use log::{debug, trace};
use smallvec::SmallVec;

/// One homogeneous square block of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageData {
    /// Side length of the block, which grows as quartets merge.
    pub width: u32,
    pub x: u32,
    pub y: u32,
    pub color: Rgb,
}

impl ImageData {
    pub fn pixel(x: u32, y: u32, color: Rgb) -> Self {
        Self {
            width: 1,
            x,
            y,
            color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeState {
    /// Nothing has been written inside this node yet.
    Empty,
    Filled(ImageData),
    /// NW, NE, SW, SE.
    Subdivided(Box<[RegionNode; 4]>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionNode {
    boundary: Rectangle,
    state: NodeState,
}

impl RegionNode {
    fn new(boundary: Rectangle) -> Self {
        Self {
            boundary,
            state: NodeState::Empty,
        }
    }

    pub fn boundary(&self) -> Rectangle {
        self.boundary
    }

    pub fn state(&self) -> &NodeState {
        &self.state
    }

    pub fn data(&self) -> Option<&ImageData> {
        match &self.state {
            NodeState::Filled(data) => Some(data),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[RegionNode; 4]> {
        match &self.state {
            NodeState::Subdivided(children) => Some(children),
            _ => None,
        }
    }

    pub fn has_children(&self) -> bool {
        matches!(self.state, NodeState::Subdivided(_))
    }

    /// Drops the children and leaves the node empty.
    pub fn clear_children(&mut self) {
        if self.has_children() {
            self.state = NodeState::Empty;
        }
    }

    fn insert(&mut self, data: ImageData) -> bool {
        if !self.boundary.contains_pixel(data.x, data.y) {
            return false;
        }
        if let NodeState::Empty = self.state {
            self.state = NodeState::Filled(data);
            return true;
        }
        if let NodeState::Filled(existing) = &mut self.state {
            if self.boundary.width < 2 {
                // A single pixel cannot split any further; the newer write wins.
                *existing = data;
                return true;
            }
            let existing = *existing;
            self.split(existing);
        }
        match &mut self.state {
            NodeState::Subdivided(children) => children.iter_mut().any(|child| child.insert(data)),
            _ => false,
        }
    }

    // Turns a filled leaf into four quadrants and pushes its block down. A
    // block covering the whole node becomes four half-width blocks.
    fn split(&mut self, existing: ImageData) {
        let covers_node = existing.width == self.boundary.width;
        let quadrants = self.boundary.quadrants().map(|quadrant| {
            let mut child = RegionNode::new(quadrant);
            if covers_node {
                child.state = NodeState::Filled(ImageData {
                    width: quadrant.width,
                    x: quadrant.x,
                    y: quadrant.y,
                    color: existing.color,
                });
            }
            child
        });
        self.state = NodeState::Subdivided(Box::new(quadrants));
        trace!(
            "split region node at ({}, {}) width {}",
            self.boundary.x,
            self.boundary.y,
            self.boundary.width
        );
        if covers_node {
            return;
        }
        if let NodeState::Subdivided(children) = &mut self.state {
            for child in children.iter_mut() {
                if child.insert(existing) {
                    break;
                }
            }
        }
    }

    // A quartet merges only when all four children are leaves whose block
    // covers the child entirely.
    fn merge_candidate(children: &[RegionNode; 4], max_color_delta: f64) -> Option<ImageData> {
        let mut quartet = [ImageData::pixel(0, 0, Rgb::BLACK); 4];
        for (slot, child) in quartet.iter_mut().zip(children.iter()) {
            let data = child.data()?;
            if data.width != child.boundary.width {
                return None;
            }
            *slot = *data;
        }
        let colours = quartet.map(|data| data.color);
        if colour_difference(&colours).ok()? > max_color_delta {
            return None;
        }
        let nw = quartet[0];
        Some(ImageData {
            width: nw.width * 2,
            x: nw.x,
            y: nw.y,
            color: blend_colours(&colours).ok()?,
        })
    }

    // Post-order: all four quadrants are fully resolved before this node's
    // own merge test runs. Returns the number of merges performed.
    fn compress(&mut self, max_color_delta: f64, parallel_min_width: u32) -> usize {
        let width = self.boundary.width;
        let NodeState::Subdivided(children) = &mut self.state else {
            return 0;
        };
        let [nw, ne, sw, se] = &mut **children;
        let merges = if width >= parallel_min_width {
            let ((a, b), (c, d)) = rayon::join(
                || {
                    rayon::join(
                        || nw.compress(max_color_delta, parallel_min_width),
                        || ne.compress(max_color_delta, parallel_min_width),
                    )
                },
                || {
                    rayon::join(
                        || sw.compress(max_color_delta, parallel_min_width),
                        || se.compress(max_color_delta, parallel_min_width),
                    )
                },
            );
            a + b + c + d
        } else {
            nw.compress(max_color_delta, parallel_min_width)
                + ne.compress(max_color_delta, parallel_min_width)
                + sw.compress(max_color_delta, parallel_min_width)
                + se.compress(max_color_delta, parallel_min_width)
        };
        let merged = Self::merge_candidate(&**children, max_color_delta);
        match merged {
            Some(merged) => {
                self.state = NodeState::Filled(merged);
                merges + 1
            }
            None => merges,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompressStats {
    pub merges: usize,
    pub leaves_before: usize,
    pub leaves_after: usize,
}

/// Quadtree over a square, power-of-two sized image area holding one colour
/// sample per resolved block.
#[derive(Debug, Clone)]
pub struct RegionQuadTree {
    root: RegionNode,
    parallel_min_width: u32,
}

impl RegionQuadTree {
    pub fn new_with_config(boundary: Rectangle, config: Config) -> CompressionResult<Self> {
        if !boundary.width.is_power_of_two() {
            return Err(CompressionError::InvalidRootWidth {
                width: boundary.width,
            });
        }
        if boundary.overflows() {
            return Err(CompressionError::BoundaryOverflow {
                x: boundary.x,
                y: boundary.y,
                width: boundary.width,
            });
        }
        Ok(Self {
            root: RegionNode::new(boundary),
            parallel_min_width: config.parallel_min_width.max(2),
        })
    }

    pub fn new(boundary: Rectangle) -> CompressionResult<Self> {
        Self::new_with_config(boundary, Config::default())
    }

    /// Empty tree whose root is the smallest power-of-two square covering the image.
    pub fn for_dimensions(width: u32, height: u32, config: Config) -> CompressionResult<Self> {
        if width == 0 || height == 0 {
            return Err(CompressionError::EmptyImage { width, height });
        }
        let side = width.max(height).next_power_of_two();
        Self::new_with_config(Rectangle::new(0, 0, side), config)
    }

    pub fn from_pixels(pixels: &PixelBuffer) -> CompressionResult<Self> {
        Self::from_pixels_with_config(pixels, Config::default())
    }

    /// Inserts every pixel row by row as a one-pixel block. Alpha is ignored.
    pub fn from_pixels_with_config(pixels: &PixelBuffer, config: Config) -> CompressionResult<Self> {
        let mut tree = Self::for_dimensions(pixels.width(), pixels.height(), config)?;
        let row_length = pixels.width() as usize * 4;
        for (y, row) in pixels.data().chunks_exact(row_length).enumerate() {
            for (x, rgba) in row.chunks_exact(4).enumerate() {
                let color = Rgb::new(rgba[0], rgba[1], rgba[2]);
                tree.insert(ImageData::pixel(x as u32, y as u32, color));
            }
        }
        debug!(
            "loaded {}x{} image into region quadtree of width {}",
            pixels.width(),
            pixels.height(),
            tree.boundary().width
        );
        Ok(tree)
    }

    pub fn root(&self) -> &RegionNode {
        &self.root
    }

    pub fn boundary(&self) -> Rectangle {
        self.root.boundary
    }

    /// Returns `false` when the block's top-left pixel lies outside the tree.
    pub fn insert(&mut self, data: ImageData) -> bool {
        self.root.insert(data)
    }

    /// Merges homogeneous quartets until no quartet within `max_color_delta`
    /// remains. Sibling subtrees are compressed independently.
    pub fn compress(&mut self, max_color_delta: f64) -> CompressStats {
        let leaves_before = self.filled_leaf_count();
        let merges = self.root.compress(max_color_delta, self.parallel_min_width);
        let stats = CompressStats {
            merges,
            leaves_before,
            leaves_after: self.filled_leaf_count(),
        };
        debug!(
            "compressed with max colour delta {}: {} merges, {} -> {} leaves",
            max_color_delta, stats.merges, stats.leaves_before, stats.leaves_after
        );
        stats
    }

    /// Calls `f` for every filled leaf, NW before NE before SW before SE.
    pub fn for_each_filled_leaf<F: FnMut(&ImageData)>(&self, mut f: F) {
        let mut stack: SmallVec<[&RegionNode; 64]> = SmallVec::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            match &node.state {
                NodeState::Empty => {}
                NodeState::Filled(data) => f(data),
                NodeState::Subdivided(children) => stack.extend(children.iter().rev()),
            }
        }
    }

    pub fn filled_leaf_count(&self) -> usize {
        let mut count = 0usize;
        self.for_each_filled_leaf(|_| count += 1);
        count
    }

    pub fn node_count(&self) -> usize {
        let mut count = 0usize;
        let mut stack: SmallVec<[&RegionNode; 64]> = SmallVec::new();
        stack.push(&self.root);
        while let Some(node) = stack.pop() {
            count += 1;
            if let NodeState::Subdivided(children) = &node.state {
                stack.extend(children.iter());
            }
        }
        count
    }
}
