//! Pattern generation over a grid of blocks

/// Serializable output document
pub mod document;
/// Configuration and grid sweep
pub mod generator;
/// Fixed color palette
pub mod palette;

pub use document::PatternDocument;
pub use generator::{PatternConfig, generate};
pub use palette::Palette;
