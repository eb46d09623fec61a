//! Tile geometry
//!
//! This module contains the coordinate-level building blocks:
//! - Points and triangles
//! - Square outlines and their diagonal subdivision
//! - Block layout of four squares per grid cell

/// Block layout and square placement
pub mod block;
/// Points and triangles
pub mod point;
/// Square outlines and triangle splitting
pub mod square;

pub use block::{Block, BlockLayout};
pub use point::{Point, Triangle};
pub use square::{Square, SquarePosition};
