use common::shapes::{Point, Rectangle};
use smallvec::SmallVec;

pub(crate) const FLAG_REQUIRES_REPAINT: u8 = 0b01;
pub(crate) const FLAG_CHILD_REQUIRES_REPAINT: u8 = 0b10;
pub(crate) const NO_PARENT: u32 = u32::MAX;
pub(crate) const ROOT: u32 = 0;

pub(crate) type NodeStack = SmallVec<[u32; 64]>;

/// Handle to a node of a [`super::QuadTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub const ROOT: NodeId = NodeId(ROOT);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) struct Node {
    pub(crate) boundary: Rectangle,
    pub(crate) points: Vec<Point>,
    // Zeroed while a leaf. The root sits at index 0 and is never anyone's child.
    pub(crate) children: [u32; 4],
    pub(crate) parent: u32,
    pub(crate) depth: u32,
    pub(crate) flags: u8,
}

impl Node {
    #[inline(always)]
    pub(crate) fn new_leaf(boundary: Rectangle, parent: u32, depth: u32) -> Self {
        Self {
            boundary,
            points: Vec::new(),
            children: [0; 4],
            parent,
            depth,
            flags: FLAG_REQUIRES_REPAINT,
        }
    }

    #[inline(always)]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children[0] == 0
    }

    #[inline(always)]
    pub(crate) fn parent(&self) -> Option<u32> {
        if self.parent == NO_PARENT {
            None
        } else {
            Some(self.parent)
        }
    }

    #[inline(always)]
    pub(crate) fn has_flag(&self, flag: u8) -> bool {
        self.flags & flag != 0
    }

    #[inline(always)]
    pub(crate) fn set_flag(&mut self, flag: u8) {
        self.flags |= flag;
    }

    #[inline(always)]
    pub(crate) fn clear_flag(&mut self, flag: u8) {
        self.flags &= !flag;
    }
}

/// Read-only view of one node.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    pub(crate) id: u32,
    pub(crate) node: &'a Node,
}

impl<'a> NodeView<'a> {
    pub fn id(&self) -> NodeId {
        NodeId(self.id)
    }

    pub fn boundary(&self) -> Rectangle {
        self.node.boundary
    }

    pub fn points(&self) -> &'a [Point] {
        &self.node.points
    }

    pub fn depth(&self) -> u32 {
        self.node.depth
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// NW, NE, SW, SE, or `None` for a leaf.
    pub fn children(&self) -> Option<[NodeId; 4]> {
        if self.node.is_leaf() {
            return None;
        }
        Some(self.node.children.map(NodeId))
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.node.parent().map(NodeId)
    }

    pub fn requires_repaint(&self) -> bool {
        self.node.has_flag(FLAG_REQUIRES_REPAINT)
    }

    pub fn child_requires_repaint(&self) -> bool {
        self.node.has_flag(FLAG_CHILD_REQUIRES_REPAINT)
    }
}

impl std::fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("id", &self.id)
            .field("boundary", &self.node.boundary)
            .field("points", &self.node.points.len())
            .field("leaf", &self.node.is_leaf())
            .field("flags", &self.node.flags)
            .finish()
    }
}
