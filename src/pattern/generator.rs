//! Grid sweep producing the full pattern document
//!
//! Generation is a pure function of [`PatternConfig`]: the same configuration
//! always yields the same document, block for block.

use crate::geometry::{Block, BlockLayout};
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SIZE, DEFAULT_SPACING};
use crate::pattern::document::PatternDocument;
use crate::pattern::palette::Palette;
use ndarray::Array2;

/// Parameters for one generation run
///
/// Values are kept as given: an extent of `None` stands for a row or column
/// count that failed to parse, and `size` or `spacing` may be NaN. Neither is
/// rejected here; they propagate into the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Number of block rows
    pub rows: Option<i64>,
    /// Number of block columns
    pub cols: Option<i64>,
    /// Base tile size
    pub size: f64,
    /// Multiplier applied to `size`
    pub spacing: f64,
    /// Whether squares and the document carry palette colors
    pub include_colors: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            rows: Some(DEFAULT_ROWS),
            cols: Some(DEFAULT_COLS),
            size: DEFAULT_SIZE,
            spacing: DEFAULT_SPACING,
            include_colors: false,
        }
    }
}

impl PatternConfig {
    /// Tile size after spacing is applied
    pub fn scaled_size(&self) -> f64 {
        self.size * self.spacing
    }

    /// Block dimensions derived from the scaled size
    pub fn layout(&self) -> BlockLayout {
        BlockLayout::new(self.scaled_size())
    }

    /// Number of (rows, cols) swept
    ///
    /// Missing and non-positive extents sweep nothing.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        (sweep_extent(self.rows), sweep_extent(self.cols))
    }

    /// Palette applied to the document, if colors are enabled
    pub fn palette(&self) -> Option<Palette> {
        self.include_colors.then(Palette::default)
    }
}

fn sweep_extent(extent: Option<i64>) -> usize {
    extent
        .and_then(|count| usize::try_from(count).ok())
        .unwrap_or(0)
}

/// Generate every block of the pattern described by `config`
pub fn generate(config: &PatternConfig) -> PatternDocument {
    let layout = config.layout();
    let palette = config.palette();

    let blocks = Array2::from_shape_fn(config.grid_dimensions(), |(row, col)| {
        colored_block(layout.block(row, col), palette.as_ref())
    });

    PatternDocument {
        rows: config.rows,
        cols: config.cols,
        size: config.size,
        spacing: config.spacing,
        scaled_size: layout.scaled_size,
        palette,
        blocks,
    }
}

fn colored_block(block: Block, palette: Option<&Palette>) -> Block {
    let Some(palette) = palette else {
        return block;
    };

    let Block { row, col, squares } = block;
    let squares = squares.map(|square| {
        let colors = palette.square_colors(square.position);
        square.with_colors(colors)
    });

    Block { row, col, squares }
}
