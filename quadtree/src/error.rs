use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuadtreeError {
    #[error("quadtree boundary width must be non-zero (width: {width})")]
    InvalidRectangleWidth { width: u32 },
    #[error("boundary at ({x}, {y}) with width {width} exceeds the u32 coordinate range")]
    BoundaryOverflow { x: u32, y: u32, width: u32 },
    /// Subdividing a node twice means the tree structure is already corrupt.
    #[error("node {node} is already subdivided")]
    AlreadySubdivided { node: u32 },
    #[error("node {node} does not exist in this quadtree (node count: {node_count})")]
    UnknownNode { node: u32, node_count: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
