//! Diamond-shaped squares and their triangular subdivision
//!
//! Every square is stored by its center and edge span: its four boundary
//! vertices sit half a span above, right of, below and left of the center.
//! A square is split into two triangles along one of its diagonals, chosen by
//! where the square sits inside its block. Alternating the diagonal between
//! the horizontal and vertical positions is what makes abutting tiles read as
//! rhombi.

use crate::geometry::point::{Point, Triangle};
use serde::Serialize;

/// Position of a square inside its block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SquarePosition {
    /// Horizontally centered, against the block's top edge
    Top,
    /// Vertically centered, against the block's left edge
    Left,
    /// Vertically centered, against the block's right edge
    Right,
    /// Horizontally centered, against the block's bottom edge
    Bottom,
}

impl SquarePosition {
    /// All positions in block order
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Right, Self::Bottom];

    /// Diagonal used to split a square at this position
    pub const fn split_axis(self) -> SplitAxis {
        match self {
            Self::Top | Self::Bottom => SplitAxis::Vertical,
            Self::Left | Self::Right => SplitAxis::Horizontal,
        }
    }
}

/// Diagonal along which a square is cut into two triangles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Cut from the top vertex to the bottom vertex
    Vertical,
    /// Cut from the left vertex to the right vertex
    Horizontal,
}

/// The four boundary vertices of a square
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corners {
    /// Vertex above the center
    pub top: Point,
    /// Vertex right of the center
    pub right: Point,
    /// Vertex below the center
    pub bottom: Point,
    /// Vertex left of the center
    pub left: Point,
}

impl Corners {
    /// Boundary vertices of the square centered at `center` with edge span `size`
    pub fn around(center: Point, size: f64) -> Self {
        let Point { x: cx, y: cy } = center;
        let half = size / 2.0;
        Self {
            top: Point::new(cx, cy - half),
            right: Point::new(cx + half, cy),
            bottom: Point::new(cx, cy + half),
            left: Point::new(cx - half, cy),
        }
    }

    /// Vertices in outline order: top, right, bottom, left
    pub const fn outline(self) -> [Point; 4] {
        [self.top, self.right, self.bottom, self.left]
    }

    /// Two triangles covering the square, cut along `axis`
    ///
    /// Each triangle lists its off-diagonal vertex first, followed by the two
    /// endpoints of the cut.
    pub const fn split(self, axis: SplitAxis) -> [Triangle; 2] {
        match axis {
            SplitAxis::Vertical => [
                [self.left, self.top, self.bottom],
                [self.right, self.top, self.bottom],
            ],
            SplitAxis::Horizontal => [
                [self.top, self.left, self.right],
                [self.bottom, self.left, self.right],
            ],
        }
    }
}

/// Split the square centered at `center` into two triangles for `position`
pub fn split_square(center: Point, size: f64, position: SquarePosition) -> [Triangle; 2] {
    Corners::around(center, size).split(position.split_axis())
}

/// Outline of the square centered at `center`: top, right, bottom, left
pub fn outer_square(center: Point, size: f64) -> [Point; 4] {
    Corners::around(center, size).outline()
}

/// A positioned square with its subdivision and outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    /// Where the square sits in its block
    #[serde(rename = "type")]
    pub position: SquarePosition,
    /// Two triangles partitioning the square
    pub triangles: [Triangle; 2],
    /// Boundary vertices in outline order
    pub outer: [Point; 4],
    /// Fill colors for the two triangles, when a palette is applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<[&'static str; 2]>,
    /// Center of the square
    #[serde(skip)]
    pub center: Point,
}

impl Square {
    /// Build the square at `position` centered at `center` with edge span `size`
    pub fn new(center: Point, size: f64, position: SquarePosition) -> Self {
        Self {
            position,
            triangles: split_square(center, size, position),
            outer: outer_square(center, size),
            colors: None,
            center,
        }
    }

    /// Attach a pair of triangle fill colors
    #[must_use]
    pub const fn with_colors(mut self, colors: [&'static str; 2]) -> Self {
        self.colors = Some(colors);
        self
    }
}
