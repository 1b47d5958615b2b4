//! Runtime configuration
//!
//! Settings for a single run, built from defaults and overlaid with CLI
//! arguments. Nothing is read from or persisted to disk.

use std::path::PathBuf;

use crate::core::constants::files;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory the output files are written to
    pub output_dir: PathBuf,

    /// File name suffix picked up by the collector
    pub extension: String,

    /// Enable verbose logging
    pub verbose: bool,

    /// Suppress progress output
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(files::DEFAULT_OUTPUT_DIR),
            extension: files::JS_EXTENSION.to_string(),
            verbose: false,
            quiet: false,
        }
    }
}

/// CLI values that override the defaults when present
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub output_dir: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl Config {
    /// Merge CLI arguments into this configuration (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliConfig) {
        if let Some(ref dir) = cli.output_dir {
            self.output_dir = dir.clone();
        }
        self.verbose |= cli.verbose;
        self.quiet |= cli.quiet;
    }

    pub fn paths_output(&self) -> PathBuf {
        self.output_path(files::PATHS_OUTPUT)
    }

    pub fn urls_output(&self) -> PathBuf {
        self.output_path(files::URLS_OUTPUT)
    }

    pub fn url_list_output(&self) -> PathBuf {
        self.output_path(files::URL_LIST_OUTPUT)
    }

    fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(name)
    }
}
