//! Rhombus tiling geometry generator
//!
//! Sweeps a grid of blocks, each made of four diamond squares split into
//! triangles, and emits every vertex as a single JSON document. Alternating
//! the split diagonal between neighbouring squares produces the rhombus
//! illusion when the tiles are drawn.

#![forbid(unsafe_code)]

/// Points, squares and block layout
pub mod geometry;
/// Command-line handling, JSON output and error types
pub mod io;
/// Grid sweep, palette and output document
pub mod pattern;

pub use io::error::{PatternError, Result};
pub use pattern::{PatternConfig, PatternDocument, generate};
