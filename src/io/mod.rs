//! Input/output operations and configuration

/// Command-line parsing and conversion orchestration
pub mod cli;
/// Layout constants and output naming defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and lossless encoding
pub mod image;
/// Progress display
pub mod progress;
