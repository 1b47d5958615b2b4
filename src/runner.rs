use rustc_hash::FxHashSet;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::constants::display;
use crate::core::error::{CsptError, Result};
use crate::core::types::PathTemplate;
use crate::discovery::{ExtractPaths, Extractor, expand_paths};
use crate::generation::{CanonicalSummary, build_url, canonicalize_file};
use crate::reporting::logging;
use crate::ui::cli::Mode;
use crate::ui::output::{WriteToFile, Writer, count_noun};
use crate::ui::progress::ProgressReporter;

/// Totals of an extraction run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractionSummary {
    pub files_scanned: usize,
    pub read_errors: usize,
    /// Unique templates, sorted
    pub templates: Vec<PathTemplate>,
    /// Unique URLs in template order
    pub urls: Vec<String>,
    /// URLs that collapsed into an earlier one after substitution
    pub duplicate_urls: usize,
}

/// Run the selected mode with a fresh progress reporter
pub fn run(mode: &Mode, config: &Config) -> Result<()> {
    let mut progress = ProgressReporter::new(config.quiet);
    match mode {
        Mode::UrlList { file } => run_url_list(file, config, &progress).map(|_| ()),
        Mode::Extract { dir, domain } => {
            run_extraction(dir, domain, config, &mut progress).map(|_| ())
        }
    }
}

/// Collect source files, extract templates, write `paths.txt` and the
/// generated URL file. Nothing is written when no template is found.
pub fn run_extraction(
    dir: &Path,
    domain: &str,
    config: &Config,
    progress: &mut ProgressReporter,
) -> Result<ExtractionSummary> {
    let files = match expand_paths(dir, &config.extension) {
        Ok(files) => files,
        Err(err @ CsptError::DirectoryNotFound(_)) => {
            logging::log_error("Could not collect source files", Some(&err));
            progress.error(&err.to_string());
            Vec::new()
        }
        Err(err) => return Err(err),
    };
    logging::log_file_info(files.len(), &files);
    progress.info(&format!(
        "Found {}",
        count_noun(files.len(), "JavaScript file", "JavaScript files")
    ));

    let (templates, read_errors) = extract_templates(&Extractor::default(), &files, progress);
    let mut summary = ExtractionSummary {
        files_scanned: files.len(),
        read_errors,
        templates: templates.into_iter().collect(),
        ..Default::default()
    };

    if summary.templates.is_empty() {
        progress.plain(display::NO_PATHS_MESSAGE);
        return Ok(summary);
    }

    let paths_output = config.paths_output();
    Writer.write_lines(&paths_output, &summary.templates)?;
    progress.info(&format!(
        "Saved {} to {}",
        count_noun(summary.templates.len(), "path", "paths"),
        paths_output.display()
    ));

    let (urls, duplicate_urls) = generate_urls(domain, &summary.templates);
    logging::log_generation(urls.len(), summary.templates.len());
    summary.urls = urls;
    summary.duplicate_urls = duplicate_urls;

    let urls_output = config.urls_output();
    Writer.write_lines(&urls_output, &summary.urls)?;
    progress.info(&format!(
        "Saved {} to {}",
        count_noun(summary.urls.len(), "URL", "URLs"),
        urls_output.display()
    ));
    if duplicate_urls > 0 {
        progress.info(&format!(
            "{} collapsed after substitution",
            count_noun(duplicate_urls, "duplicate URL", "duplicate URLs")
        ));
    }

    Ok(summary)
}

/// Union of the templates found in every readable file, plus the number
/// of files that could not be read.
pub fn extract_templates<E: ExtractPaths>(
    extractor: &E,
    files: &[PathBuf],
    progress: &mut ProgressReporter,
) -> (BTreeSet<PathTemplate>, usize) {
    let mut all_templates = BTreeSet::new();
    let mut read_errors = 0;

    progress.start_file_processing(files.len());
    for file in files {
        match extractor.extract_from_file(file) {
            Ok(found) => {
                let mut found: Vec<PathTemplate> = found.into_iter().collect();
                found.sort();
                logging::log_extraction(file, &found);
                if !found.is_empty() {
                    progress.info(&format!(
                        "{}: {}",
                        file.display(),
                        count_noun(found.len(), "path", "paths")
                    ));
                }
                all_templates.extend(found);
            }
            Err(err) => {
                read_errors += 1;
                logging::log_error(&format!("Could not read {}", file.display()), Some(&err));
                progress.error(&format!("Error reading {}: {err}", file.display()));
            }
        }
        progress.advance_file_progress();
    }
    progress.finish_file_processing();

    (all_templates, read_errors)
}

/// Substitute every template onto `domain`, dropping repeated URLs while
/// keeping the first occurrence in template order. Also returns how many
/// were dropped.
pub fn generate_urls(domain: &str, templates: &[PathTemplate]) -> (Vec<String>, usize) {
    let mut seen = FxHashSet::default();
    let mut urls = Vec::with_capacity(templates.len());

    for template in templates {
        let url = build_url(domain, template.as_str());
        if seen.insert(url.clone()) {
            urls.push(url);
        }
    }

    let duplicates = templates.len() - urls.len();
    (urls, duplicates)
}

/// Canonicalize a URL list and write the result, unless it is empty.
pub fn run_url_list(
    file: &Path,
    config: &Config,
    progress: &ProgressReporter,
) -> Result<CanonicalSummary> {
    let summary = canonicalize_file(file)?;
    logging::log_canonicalization(
        summary.lines_processed,
        summary.lines_skipped,
        summary.urls.len(),
    );

    if summary.urls.is_empty() {
        progress.plain(display::NO_URLS_MESSAGE);
        return Ok(summary);
    }

    let urls: Vec<&str> = summary.urls.iter().map(String::as_str).collect();
    let output = config.url_list_output();
    Writer.write_lines(&output, &urls)?;
    progress.info(&format!(
        "Saved {} to {}",
        count_noun(urls.len(), "URL", "URLs"),
        output.display()
    ));

    Ok(summary)
}
