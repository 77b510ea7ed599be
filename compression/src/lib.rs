//! Region quadtree image codec.
//!
//! A raster is loaded pixel by pixel into a [`RegionQuadTree`], homogeneous
//! sibling quartets are merged bottom-up under a colour tolerance, and the
//! result is either painted back into an RGBA buffer or measured under a few
//! candidate encodings.

pub mod colour;
pub mod config;
pub mod error;
pub mod extract;
pub mod pixels;
pub mod region_tree;
pub mod size;

pub use colour::{blend_colours, colour_difference, Rgb};
pub use config::{Config, ExtractSettings};
pub use error::{CompressionError, CompressionResult};
pub use extract::quadtree_to_image_data;
pub use pixels::PixelBuffer;
pub use region_tree::{CompressStats, ImageData, NodeState, RegionNode, RegionQuadTree};
pub use size::SizeReport;
