/// Application-wide constants to avoid magic values throughout the codebase.
///
/// The extraction heuristics live here as named values so tests can pin the
/// exact accept/reject boundaries.
/// Placeholder token constants
pub mod placeholders {
    /// Value given to the first substituted parameter
    pub const BASE: &str = "magun4";
    /// Joins the base token and the 1-based index of later substitutions
    pub const INDEX_SEPARATOR: char = '_';
}

/// Path extraction heuristics
pub mod extraction {
    /// Quote characters that may delimit a route literal
    pub const QUOTES: [char; 3] = ['\'', '"', '`'];
    /// Characters allowed inside a route literal, as a regex class body
    pub const PATH_CHAR_CLASS: &str = r"A-Za-z0-9_\-/:*";
    /// A template must start with this
    pub const PATH_PREFIX: char = '/';
    /// Marker that introduces a path parameter
    pub const PARAM_MARKER: &str = "/:";
    /// Substrings that disqualify a candidate (regex-like or non-path content)
    pub const FORBIDDEN_SUBSTRINGS: [&str; 8] = [" ", "(", ")", "[", "]", "\\", "|", "?!"];
    /// Candidates must be strictly longer than this
    pub const MIN_LENGTH_EXCLUSIVE: usize = 2;
    /// Candidates must be strictly shorter than this
    pub const MAX_LENGTH_EXCLUSIVE: usize = 200;
    /// A well-formed parameter: marker, a letter, then name characters
    pub const PARAM_NAME_PATTERN: &str = r"/:[a-zA-Z][a-zA-Z0-9_\-]*";
    /// Parameter occurrences replaced during substitution
    pub const SUBSTITUTION_PATTERN: &str = r":[a-zA-Z0-9_]+";
    /// Trailing wildcard segment
    pub const WILDCARD_SUFFIX: &str = "/*";
}

/// File processing constants
pub mod files {
    /// Suffix of the files the collector picks up
    pub const JS_EXTENSION: &str = ".js";
    /// Sorted list of extracted path templates
    pub const PATHS_OUTPUT: &str = "paths.txt";
    /// Domain-prefixed URLs generated from the templates
    pub const URLS_OUTPUT: &str = "CSPT_magun4.txt";
    /// Canonicalized URLs produced in list mode
    pub const URL_LIST_OUTPUT: &str = "CSPT_magun4_waymore.txt";
    /// Default directory output files are written to
    pub const DEFAULT_OUTPUT_DIR: &str = ".";
}

/// URL list constants
pub mod url_list {
    /// Accepted scheme prefixes, compared case-insensitively
    pub const SCHEME_PREFIXES: [&str; 2] = ["http://", "https://"];
    /// Lines without this have no query string to canonicalize
    pub const QUERY_DELIMITER: char = '?';
    /// Start of the fragment, copied through unchanged
    pub const FRAGMENT_DELIMITER: char = '#';
}

/// Display and formatting constants
pub mod display {
    /// Prefix for progress lines
    pub const INFO_PREFIX: &str = "[+]";
    /// Prefix for recoverable errors
    pub const ERROR_PREFIX: &str = "[-]";
    /// Extraction mode found nothing
    pub const NO_PATHS_MESSAGE: &str = "No paths with parameters found!";
    /// List mode found nothing
    pub const NO_URLS_MESSAGE: &str = "No URLs with query parameters found!";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_constants() {
        assert_eq!(placeholders::BASE, "magun4");
        assert_eq!(placeholders::INDEX_SEPARATOR, '_');
    }

    #[test]
    fn test_extraction_bounds() {
        assert_eq!(extraction::MIN_LENGTH_EXCLUSIVE, 2);
        assert_eq!(extraction::MAX_LENGTH_EXCLUSIVE, 200);
        assert!(extraction::FORBIDDEN_SUBSTRINGS.contains(&"?!"));
        assert_eq!(extraction::QUOTES.len(), 3);
    }

    #[test]
    fn test_output_file_names() {
        assert_eq!(files::PATHS_OUTPUT, "paths.txt");
        assert_eq!(files::URLS_OUTPUT, "CSPT_magun4.txt");
        assert_eq!(files::URL_LIST_OUTPUT, "CSPT_magun4_waymore.txt");
        assert_eq!(files::JS_EXTENSION, ".js");
    }
}
