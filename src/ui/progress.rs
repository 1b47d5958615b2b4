use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;

use crate::core::constants::display;
use crate::ui::color::{Colors, Stream, colorize};

/// Progress lines on stdout, errors on stderr, and an optional bar over
/// the file scan. Lines printed while the bar is active go through it so
/// they do not tear the bar.
pub struct ProgressReporter {
    file_progress: Option<ProgressBar>,
    show_bar: bool,
    quiet: bool,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            file_progress: None,
            show_bar: !quiet && std::io::stderr().is_terminal(),
            quiet,
        }
    }

    pub fn start_file_processing(&mut self, total_files: usize) {
        if !self.show_bar || total_files == 0 {
            return;
        }

        let pb = ProgressBar::new(total_files as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files scanned")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        self.file_progress = Some(pb);
    }

    pub fn advance_file_progress(&self) {
        if let Some(ref pb) = self.file_progress {
            pb.inc(1);
        }
    }

    pub fn finish_file_processing(&mut self) {
        if let Some(pb) = self.file_progress.take() {
            pb.finish_and_clear();
        }
    }

    /// Informational line, suppressed in quiet mode
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let line = format!(
            "{} {message}",
            colorize(display::INFO_PREFIX, Colors::GREEN, Stream::Stdout)
        );
        match self.file_progress {
            Some(ref pb) => pb.println(line),
            None => println!("{line}"),
        }
    }

    /// Plain line without a prefix, suppressed in quiet mode
    pub fn plain(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Recoverable error line, always shown
    pub fn error(&self, message: &str) {
        let line = format!(
            "{} {message}",
            colorize(display::ERROR_PREFIX, Colors::RED, Stream::Stderr)
        );
        match self.file_progress {
            Some(ref pb) => pb.suspend(|| eprintln!("{line}")),
            None => eprintln!("{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_never_shows_bar() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start_file_processing(10);

        assert!(reporter.file_progress.is_none());
        reporter.advance_file_progress();
        reporter.finish_file_processing();
    }

    #[test]
    fn test_no_bar_for_zero_files() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start_file_processing(0);

        assert!(reporter.file_progress.is_none());
    }

    #[test]
    fn test_messages_without_bar() {
        let reporter = ProgressReporter::new(false);
        reporter.info("Found 3 JavaScript files");
        reporter.plain("No paths with parameters found!");
        reporter.error("Error reading file: denied");
    }

    #[test]
    fn test_finish_is_idempotent() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start_file_processing(2);
        reporter.advance_file_progress();
        reporter.finish_file_processing();
        reporter.finish_file_processing();

        assert!(reporter.file_progress.is_none());
    }
}
