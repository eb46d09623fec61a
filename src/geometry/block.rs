//! Block layout: four squares arranged around the center of a grid cell

use crate::geometry::point::Point;
use crate::geometry::square::{Square, SquarePosition};
use serde::Serialize;

/// Dimensions shared by every block of a pattern
///
/// A block is two scaled tiles wide and two tall, so that neighbouring
/// blocks meet edge to edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockLayout {
    /// Edge span of each square
    pub scaled_size: f64,
    /// Horizontal distance between block origins
    pub block_width: f64,
    /// Vertical distance between block origins
    pub block_height: f64,
}

impl BlockLayout {
    /// Layout for squares of the given scaled size
    pub fn new(scaled_size: f64) -> Self {
        Self {
            scaled_size,
            block_width: scaled_size * 2.0,
            block_height: scaled_size * 2.0,
        }
    }

    /// Top-left corner of the block at (`row`, `col`)
    pub fn origin(&self, row: usize, col: usize) -> Point {
        Point::new(col as f64 * self.block_width, row as f64 * self.block_height)
    }

    /// Center of the square at `position` within the block at `origin`
    pub fn square_center(&self, origin: Point, position: SquarePosition) -> Point {
        let Point { x: bx, y: by } = origin;
        let half = self.scaled_size / 2.0;
        match position {
            SquarePosition::Top => Point::new(bx + self.block_width / 2.0, by + half),
            SquarePosition::Left => Point::new(bx + half, by + self.block_height / 2.0),
            SquarePosition::Right => Point::new(
                bx + self.block_width - half,
                by + self.block_height / 2.0,
            ),
            SquarePosition::Bottom => Point::new(
                bx + self.block_width / 2.0,
                by + self.block_height - half,
            ),
        }
    }

    /// Build the uncolored block at (`row`, `col`)
    pub fn block(&self, row: usize, col: usize) -> Block {
        let origin = self.origin(row, col);
        let squares = SquarePosition::ALL.map(|position| {
            Square::new(
                self.square_center(origin, position),
                self.scaled_size,
                position,
            )
        });

        Block { row, col, squares }
    }
}

/// One repeating unit of the tiling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
    /// Grid row of the block
    pub row: usize,
    /// Grid column of the block
    pub col: usize,
    /// Squares in order: top, left, right, bottom
    pub squares: [Square; 4],
}

impl Block {
    /// Square at the given position
    pub fn square(&self, position: SquarePosition) -> Option<&Square> {
        self.squares
            .iter()
            .find(|square| square.position == position)
    }
}
