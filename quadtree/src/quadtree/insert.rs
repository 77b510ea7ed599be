use super::types::*;
use super::*;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Point;
use log::trace;

impl QuadTree {
    /// Returns `false` when `point` lies outside the tree's boundary.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.nodes[ROOT as usize]
            .boundary
            .contains_point(point.x, point.y)
        {
            return false;
        }
        self.insert_into(ROOT, point);
        self.point_count += 1;
        true
    }

    /// Splits a leaf into four quadrants and pushes its points down.
    pub fn subdivide(&mut self, id: NodeId) -> QuadtreeResult<()> {
        let node_index = self.check_node(id)?;
        if !self.nodes[node_index as usize].is_leaf() {
            return Err(QuadtreeError::AlreadySubdivided { node: node_index });
        }
        self.subdivide_leaf(node_index);
        Ok(())
    }

    // Descends from `node_index` until some node keeps the point.
    fn insert_into(&mut self, mut node_index: u32, point: Point) {
        loop {
            let node = &self.nodes[node_index as usize];
            if node.is_leaf() {
                if node.points.len() < self.node_capacity
                    || node.boundary.width < self.min_subdivide_width
                {
                    self.store(node_index, point);
                    return;
                }
                self.subdivide_leaf(node_index);
                continue;
            }
            match self.child_containing(node_index, point) {
                Some(child) => node_index = child,
                None => {
                    // Odd widths leave a strip no quadrant covers.
                    self.store(node_index, point);
                    return;
                }
            }
        }
    }

    fn subdivide_leaf(&mut self, node_index: u32) {
        let (boundary, depth) = {
            let node = &self.nodes[node_index as usize];
            (node.boundary, node.depth)
        };
        let mut children = [0u32; 4];
        for (slot, quadrant) in children.iter_mut().zip(boundary.quadrants()) {
            *slot = self.nodes.len() as u32;
            self.nodes
                .push(Node::new_leaf(quadrant, node_index, depth + 1));
        }
        self.nodes[node_index as usize].children = children;
        trace!(
            "subdivided node {} at ({}, {}) width {}",
            node_index,
            boundary.x,
            boundary.y,
            boundary.width
        );
        self.mark_dirty(node_index);
        self.nodes[node_index as usize].set_flag(FLAG_CHILD_REQUIRES_REPAINT);
        self.shake(node_index);
    }

    // Re-inserts the node's own points into its children.
    fn shake(&mut self, node_index: u32) {
        let points = std::mem::take(&mut self.nodes[node_index as usize].points);
        for point in points {
            self.insert_into(node_index, point);
        }
    }

    fn store(&mut self, node_index: u32, point: Point) {
        self.nodes[node_index as usize].points.push(point);
        self.mark_dirty(node_index);
    }

    /// Flags the node itself and every ancestor up to the root.
    pub(crate) fn mark_dirty(&mut self, node_index: u32) {
        let node = &mut self.nodes[node_index as usize];
        node.set_flag(FLAG_REQUIRES_REPAINT);
        let mut parent = node.parent();
        while let Some(parent_index) = parent {
            let parent_node = &mut self.nodes[parent_index as usize];
            parent_node.set_flag(FLAG_CHILD_REQUIRES_REPAINT);
            parent = parent_node.parent();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::shapes::Rectangle;

    fn tree(width: u32, node_capacity: usize) -> QuadTree {
        let config = Config {
            node_capacity,
            ..Config::default()
        };
        QuadTree::new_with_config(Rectangle::new(0, 0, width), config).unwrap()
    }

    #[test]
    fn split_moves_points_out_of_parent() {
        let mut qt = tree(16, 1);
        assert!(qt.insert(Point::new(1.0, 1.0)));
        assert!(qt.insert(Point::new(12.0, 12.0)));

        let root = &qt.nodes[ROOT as usize];
        assert!(!root.is_leaf());
        assert!(root.points.is_empty());
        let nw = &qt.nodes[root.children[0] as usize];
        let se = &qt.nodes[root.children[3] as usize];
        assert_eq!(nw.points, vec![Point::new(1.0, 1.0)]);
        assert_eq!(se.points, vec![Point::new(12.0, 12.0)]);
    }

    #[test]
    fn odd_width_gap_keeps_point_in_parent() {
        let mut qt = tree(5, 1);
        assert!(qt.insert(Point::new(0.5, 0.5)));
        assert!(qt.insert(Point::new(4.5, 4.5)));
        assert_eq!(qt.len(), 2);
        let root = &qt.nodes[ROOT as usize];
        assert!(!root.is_leaf());
        assert_eq!(root.points, vec![Point::new(4.5, 4.5)]);
    }

    #[test]
    fn mark_dirty_reaches_root() {
        let mut qt = tree(64, 1);
        for i in 0..6 {
            qt.insert(Point::new(i as f32, i as f32));
        }
        for node in qt.nodes.iter_mut() {
            node.flags = 0;
        }
        let deepest = (qt.nodes.len() - 1) as u32;
        qt.mark_dirty(deepest);

        let mut current = Some(deepest);
        let mut chain = 0;
        while let Some(index) = current {
            let node = &qt.nodes[index as usize];
            if index == deepest {
                assert!(node.has_flag(FLAG_REQUIRES_REPAINT));
            } else {
                assert!(node.has_flag(FLAG_CHILD_REQUIRES_REPAINT));
                assert!(!node.has_flag(FLAG_REQUIRES_REPAINT));
            }
            chain += 1;
            current = node.parent();
        }
        let flagged = qt.nodes.iter().filter(|node| node.flags != 0).count();
        assert_eq!(flagged, chain);
    }
}
