//! Planar points and triangles

use crate::io::json::JsonNumber;
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A point in pattern space, serialized as `[x, y]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

/// Three vertices of a triangle
pub type Triangle = [Point; 3];

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(self, other: Self) -> Self {
        Self::new(f64::midpoint(self.x, other.x), f64::midpoint(self.y, other.y))
    }
}

impl Serialize for Point {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut pair = serializer.serialize_tuple(2)?;
        pair.serialize_element(&JsonNumber(self.x))?;
        pair.serialize_element(&JsonNumber(self.y))?;
        pair.end()
    }
}
