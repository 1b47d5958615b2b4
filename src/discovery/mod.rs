//! Route discovery and file processing
//!
//! This module handles walking source trees for JavaScript files and
//! extracting parameterized path templates from their contents.

pub mod extractor;
pub mod path_utils;

// Re-export commonly used items
pub use extractor::{ExtractPaths, Extractor};
pub use path_utils::expand_paths;
