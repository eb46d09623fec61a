//! Input/output operations and error handling

/// Command-line parsing and the generation run
pub mod cli;
/// Defaults and output constants
pub mod configuration;
/// Error types
pub mod error;
/// JSON serialization helpers
pub mod json;
/// Permissive and strict numeric parsing
pub mod numeric;
