//! Fixed three-color palette for colored documents

use crate::geometry::SquarePosition;
use crate::io::configuration::{COLOR_BACKGROUND, COLOR_PRIMARY, COLOR_SECONDARY};
use serde::Serialize;

/// Document-level colors, serialized as `color1`, `color2` and `color3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// First triangle color of `top` and `left` squares
    #[serde(rename = "color1")]
    pub primary: &'static str,
    /// First triangle color of `right` and `bottom` squares
    #[serde(rename = "color2")]
    pub secondary: &'static str,
    /// Background behind the tiling
    #[serde(rename = "color3")]
    pub background: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: COLOR_PRIMARY,
            secondary: COLOR_SECONDARY,
            background: COLOR_BACKGROUND,
        }
    }
}

impl Palette {
    /// Triangle colors for a square at `position`
    ///
    /// The pair is swapped between the upper-left and lower-right halves of
    /// a block.
    pub const fn square_colors(&self, position: SquarePosition) -> [&'static str; 2] {
        match position {
            SquarePosition::Top | SquarePosition::Left => [self.primary, self.secondary],
            SquarePosition::Right | SquarePosition::Bottom => [self.secondary, self.primary],
        }
    }
}
