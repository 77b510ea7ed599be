use super::types::*;
use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::{Point, Rectangle};

impl QuadTree {
    pub fn new_with_config(boundary: Rectangle, config: Config) -> QuadtreeResult<Self> {
        if boundary.width == 0 {
            return Err(QuadtreeError::InvalidRectangleWidth {
                width: boundary.width,
            });
        }
        if boundary.overflows() {
            return Err(QuadtreeError::BoundaryOverflow {
                x: boundary.x,
                y: boundary.y,
                width: boundary.width,
            });
        }
        let node_capacity = config.node_capacity.max(1);
        let min_subdivide_width = config.min_subdivide_width.max(2);
        let mut nodes = Vec::new();
        nodes.push(Node::new_leaf(boundary, NO_PARENT, 0));
        Ok(Self {
            nodes,
            node_capacity,
            min_subdivide_width,
            point_count: 0,
            repaint_stack: NodeStack::new(),
        })
    }

    pub fn new(boundary: Rectangle) -> QuadtreeResult<Self> {
        Self::new_with_config(boundary, Config::default())
    }

    pub fn config(&self) -> Config {
        Config {
            node_capacity: self.node_capacity,
            min_subdivide_width: self.min_subdivide_width,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> QuadtreeResult<NodeView<'_>> {
        match self.nodes.get(id.index()) {
            Some(node) => Ok(NodeView { id: id.0, node }),
            None => Err(QuadtreeError::UnknownNode {
                node: id.0,
                node_count: self.nodes.len(),
            }),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of stored points.
    pub fn len(&self) -> usize {
        self.point_count
    }

    pub fn is_empty(&self) -> bool {
        self.point_count == 0
    }

    /// Drops every node but the root and marks the root for repaint.
    pub fn clear(&mut self) {
        let boundary = self.boundary();
        self.nodes.clear();
        self.nodes.push(Node::new_leaf(boundary, NO_PARENT, 0));
        self.point_count = 0;
    }

    /// Node that stores, or would store, `point`.
    pub fn find_leaf(&self, point: Point) -> Option<NodeId> {
        let root = &self.nodes[ROOT as usize];
        if !root.boundary.contains_point(point.x, point.y) {
            return None;
        }
        let mut node_index = ROOT;
        loop {
            let node = &self.nodes[node_index as usize];
            if node.is_leaf() {
                return Some(NodeId(node_index));
            }
            match self.child_containing(node_index, point) {
                Some(child) => node_index = child,
                None => return Some(NodeId(node_index)),
            }
        }
    }

    pub fn all_points(&self, points: &mut Vec<Point>) {
        for node in &self.nodes {
            points.extend_from_slice(&node.points);
        }
    }

    pub fn all_node_boundaries(&self, boundaries: &mut Vec<Rectangle>) {
        boundaries.extend(self.nodes.iter().map(|node| node.boundary));
    }

    #[inline(always)]
    pub(crate) fn child_containing(&self, node_index: u32, point: Point) -> Option<u32> {
        debug_assert!(!self.nodes[node_index as usize].is_leaf());
        self.nodes[node_index as usize]
            .children
            .iter()
            .copied()
            .find(|&child| {
                self.nodes[child as usize]
                    .boundary
                    .contains_point(point.x, point.y)
            })
    }

    pub(crate) fn check_node(&self, id: NodeId) -> QuadtreeResult<u32> {
        if id.index() < self.nodes.len() {
            Ok(id.0)
        } else {
            Err(QuadtreeError::UnknownNode {
                node: id.0,
                node_count: self.nodes.len(),
            })
        }
    }
}
