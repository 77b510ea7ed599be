//! Variable-length integer compression.
//!
//! Each integer is stored in 1 to 5 bytes, seven payload bits per byte,
//! least significant group first. A set high bit means another byte follows.
//! Signed integers go through zig-zag mapping first so that small negative
//! values stay short.

pub mod error;
pub mod varint;

pub use error::{DecodeError, DecodeResult};
pub use varint::*;
