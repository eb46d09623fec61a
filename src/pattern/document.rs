//! Serializable pattern document

use crate::geometry::Block;
use crate::io::json;
use crate::pattern::palette::Palette;
use ndarray::Array2;
use serde::{Serialize, Serializer};

/// Complete output of one generation run
///
/// Echoes the configuration it was built from, followed by every block in
/// row-major order. Extents that failed to parse serialize as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDocument {
    /// Requested number of block rows
    pub rows: Option<i64>,
    /// Requested number of block columns
    pub cols: Option<i64>,
    /// Base tile size
    #[serde(serialize_with = "json::number")]
    pub size: f64,
    /// Spacing multiplier
    #[serde(serialize_with = "json::number")]
    pub spacing: f64,
    /// Tile size after spacing is applied
    #[serde(serialize_with = "json::number")]
    pub scaled_size: f64,
    /// Palette, present only for colored documents
    #[serde(flatten)]
    pub palette: Option<Palette>,
    /// Blocks indexed by (`row`, `col`)
    #[serde(serialize_with = "row_major")]
    pub blocks: Array2<Block>,
}

impl PatternDocument {
    /// Grid dimensions actually swept (rows, cols)
    pub fn dimensions(&self) -> (usize, usize) {
        self.blocks.dim()
    }

    /// Total number of blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Block at the given grid position
    pub fn block(&self, row: usize, col: usize) -> Option<&Block> {
        self.blocks.get((row, col))
    }

    /// Blocks in row-major order
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }
}

fn row_major<S: Serializer>(blocks: &Array2<Block>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(blocks.iter())
}
