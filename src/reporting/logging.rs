use log::{debug, error, info, warn};
use std::path::Path;

use crate::config::Config;

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    let env_filter_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    if let Some(level) = level_override(verbose, quiet, env_filter_set) {
        builder.filter_level(level);
    }

    builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized (verbose={verbose}, quiet={quiet})");
}

/// Level forced on top of `RUST_LOG`. Without flags and without
/// `RUST_LOG`, logging stays off so diagnostics are printed only once.
fn level_override(verbose: bool, quiet: bool, env_filter_set: bool) -> Option<log::LevelFilter> {
    if quiet {
        Some(log::LevelFilter::Off)
    } else if verbose {
        Some(log::LevelFilter::Debug)
    } else if env_filter_set {
        None
    } else {
        Some(log::LevelFilter::Off)
    }
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    info!(
        "Configuration: output_dir={}, extension={}",
        config.output_dir.display(),
        config.extension
    );
}

/// Log file collection information
pub fn log_file_info<P: AsRef<Path>>(file_count: usize, files: &[P]) {
    info!("Collected {file_count} file(s)");
    for (i, file) in files.iter().enumerate() {
        debug!("  {}. {}", i + 1, file.as_ref().display());
    }
}

/// Log the templates extracted from a single file
pub fn log_extraction<T: AsRef<str>>(path: &Path, templates: &[T]) {
    debug!("{}: {} template(s)", path.display(), templates.len());
    for template in templates {
        debug!("  {}", template.as_ref());
    }
}

/// Log URL generation totals
pub fn log_generation(unique_urls: usize, total_generated: usize) {
    info!("Generated {unique_urls} unique URLs (from {total_generated} total)");
}

/// Log URL list canonicalization totals
pub fn log_canonicalization(processed: usize, skipped: usize, unique: usize) {
    info!("Canonicalized {processed} line(s): {skipped} skipped, {unique} unique");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
