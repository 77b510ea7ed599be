use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressionError {
    #[error("region quadtree width must be a non-zero power of two (width: {width})")]
    InvalidRootWidth { width: u32 },
    #[error("boundary at ({x}, {y}) with width {width} exceeds the u32 coordinate range")]
    BoundaryOverflow { x: u32, y: u32, width: u32 },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    InvalidBufferLength { expected: usize, actual: usize },
    #[error("image dimensions must be non-zero (width: {width}, height: {height})")]
    EmptyImage { width: u32, height: u32 },
    #[error("colour list must not be empty")]
    EmptyColourList,
}

pub type CompressionResult<T> = Result<T, CompressionError>;
