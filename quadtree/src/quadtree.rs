//! Capacity-bounded point quadtree with per-node repaint tracking.
//!
//! Nodes live in a flat arena and refer to each other by index. The parent
//! index is only used to push dirty flags towards the root.

use common::shapes::Rectangle;

mod config;
mod core;
mod insert;
mod repaint;
mod types;

pub use config::{Config, RepaintOptions};
pub use repaint::{BlendMode, DrawColor, DrawCommand, RepaintStats};
pub use types::{NodeId, NodeView};

use types::{Node, NodeStack};

pub struct QuadTree {
    nodes: Vec<Node>,
    node_capacity: usize,
    min_subdivide_width: u32,
    point_count: usize,
    repaint_stack: NodeStack,
}

impl std::fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary())
            .field("nodes", &self.nodes.len())
            .field("points", &self.point_count)
            .field("node_capacity", &self.node_capacity)
            .finish()
    }
}

impl QuadTree {
    pub fn boundary(&self) -> Rectangle {
        self.nodes[types::ROOT as usize].boundary
    }
}
