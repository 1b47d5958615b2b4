use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

use crate::core::constants::extraction;
use crate::core::types::PathTemplate;

use std::{fs, io, path::Path};

// One alternative per quote character, since the opening and closing quote
// must match and the regex crate has no backreferences.
static ROUTE_LITERAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&route_literal_pattern()).expect("Failed to compile route literal pattern")
});

fn route_literal_pattern() -> String {
    extraction::QUOTES
        .iter()
        .map(|quote| {
            let quote = regex::escape(&quote.to_string());
            format!("{quote}(/[{}]+){quote}", extraction::PATH_CHAR_CLASS)
        })
        .collect::<Vec<_>>()
        .join("|")
}

pub trait ExtractPaths {
    fn extract_paths(&self, content: &str) -> FxHashSet<PathTemplate>;
    fn extract_from_file(&self, path: &Path) -> io::Result<FxHashSet<PathTemplate>>;
}

/// Heuristic route extractor for JavaScript sources.
///
/// Finds quoted literals that look like parameterized routes. It is not a
/// JavaScript parser: concatenated or computed paths are missed, and any
/// string that happens to satisfy the character rules is accepted.
#[derive(Default, Debug)]
pub struct Extractor {}

impl ExtractPaths for Extractor {
    fn extract_paths(&self, content: &str) -> FxHashSet<PathTemplate> {
        ROUTE_LITERAL_REGEX
            .captures_iter(content)
            .filter_map(|caps| caps.iter().skip(1).flatten().next())
            .filter_map(|candidate| PathTemplate::new(candidate.as_str()).ok())
            .collect()
    }

    /// Non-UTF-8 bytes are replaced rather than failing the whole file.
    fn extract_from_file(&self, path: &Path) -> io::Result<FxHashSet<PathTemplate>> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.extract_paths(&content))
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    fn sorted(found: FxHashSet<PathTemplate>) -> Vec<String> {
        let mut paths: Vec<String> = found.into_iter().map(PathTemplate::into_inner).collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_extract_paths__express_routes() {
        let content = "app.get('/download/:id', handler);\n\
                       app.post('/user/:userId/post/:postId', handler);";

        let actual = sorted(Extractor::default().extract_paths(content));

        assert_eq!(actual, vec!["/download/:id", "/user/:userId/post/:postId"]);
    }

    #[test]
    fn test_extract_paths__all_quote_styles() {
        let content = r#"a('/one/:a'); b("/two/:b"); c(`/three/:c`);"#;

        let actual = sorted(Extractor::default().extract_paths(content));

        assert_eq!(actual, vec!["/one/:a", "/three/:c", "/two/:b"]);
    }

    #[test]
    fn test_extract_paths__quotes_must_match() {
        let content = r#"x = '/mixed/:id"; y = "/other/:id`;"#;

        let actual = Extractor::default().extract_paths(content);

        assert!(actual.is_empty());
    }

    #[test]
    fn test_extract_paths__deduplicates_within_file() {
        let content = "'/a/:id' \"/a/:id\" `/a/:id`";

        let actual = sorted(Extractor::default().extract_paths(content));

        assert_eq!(actual, vec!["/a/:id"]);
    }

    #[test]
    fn test_extract_paths__rejects_parentheses() {
        let content = "fetch('/api/search?q=(test)'); fetch('/api/:id(\\\\d+)');";

        let actual = Extractor::default().extract_paths(content);

        assert!(actual.is_empty());
    }

    #[test]
    fn test_extract_paths__rejects_non_parameterized_and_malformed() {
        let content = "'/static/logo' '/download/:1abc' '/:' 'relative/:id' '/a/:'";

        let actual = Extractor::default().extract_paths(content);

        assert!(actual.is_empty());
    }

    #[test]
    fn test_extract_paths__keeps_wildcard() {
        let content = "router.use('/files/:bucket/*', serve);";

        let actual = sorted(Extractor::default().extract_paths(content));

        assert_eq!(actual, vec!["/files/:bucket/*"]);
    }

    #[test]
    fn test_extract_paths__hyphenated_names() {
        let content = "path: \"/org/:org-id/repo/:repo_name\"";

        let actual = sorted(Extractor::default().extract_paths(content));

        assert_eq!(actual, vec!["/org/:org-id/repo/:repo_name"]);
    }

    #[test]
    fn test_extract_paths__length_limit() {
        let long = format!("'/:{}'", "a".repeat(300));

        let actual = Extractor::default().extract_paths(&long);

        assert!(actual.is_empty());
    }

    #[test]
    fn test_extract_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"const routes = ['/a/:x', '/b/:y'];\n")?;
        file.write_all(&[0xff, 0xfe, b'\n'])?;
        file.write_all(b"go(\"/c/:z\");")?;

        let actual = sorted(Extractor::default().extract_from_file(file.path())?);

        assert_eq!(actual, vec!["/a/:x", "/b/:y", "/c/:z"]);
        Ok(())
    }

    #[test]
    fn test_extract_from_file__when_non_existing_file() {
        let is_err = Extractor::default()
            .extract_from_file("non_existing_file.js".as_ref())
            .is_err();

        assert!(is_err);
    }
}
