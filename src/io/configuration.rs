//! Default parameters and output constants

// Grid extent used when an option is absent or empty
/// Default number of block rows
pub const DEFAULT_ROWS: i64 = 12;
/// Default number of block columns
pub const DEFAULT_COLS: i64 = 20;

// Tile dimensions before and after scaling
/// Default base tile size
pub const DEFAULT_SIZE: f64 = 170.0;
/// Default spacing multiplier applied to the tile size
pub const DEFAULT_SPACING: f64 = 1.0;

// Palette shared by every square when colors are enabled
/// Primary color, first on `top` and `left` squares
pub const COLOR_PRIMARY: &str = "#3b82f6";
/// Secondary color, first on `right` and `bottom` squares
pub const COLOR_SECONDARY: &str = "#ef4444";
/// Background color, emitted at document level only
pub const COLOR_BACKGROUND: &str = "#1f2937";

// Output settings
/// Indentation used for pretty-printed JSON
pub const JSON_INDENT: &[u8] = b"  ";

/// Largest magnitude at which every integer is exactly representable in `f64`
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
