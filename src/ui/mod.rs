//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, output files and progress reporting.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, Mode, cli_to_config, normalize_args};
pub use output::{WriteToFile, Writer};
pub use progress::ProgressReporter;
