use url::{Url, form_urlencoded};

use crate::core::constants::url_list;
use crate::core::error::{CsptError, Result};
use crate::generation::substitute::placeholder;

use std::collections::{BTreeMap, BTreeSet};
use std::{fs, path::Path};

/// Outcome of canonicalizing a URL list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CanonicalSummary {
    /// Non-blank lines looked at
    pub lines_processed: usize,
    /// Lines dropped for lacking a scheme, a query or failing to parse
    pub lines_skipped: usize,
    /// Unique canonical URLs, sorted
    pub urls: BTreeSet<String>,
}

fn has_http_scheme(line: &str) -> bool {
    url_list::SCHEME_PREFIXES.iter().any(|prefix| {
        line.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

/// Canonical form of one URL line, or `None` when the line is skipped.
///
/// Query keys are sorted with their multiplicity kept, which discards the
/// original relative order of distinct keys. Values become placeholders
/// numbered across the whole query. Everything before the first `?` and
/// the `#` fragment are copied from the input as written.
///
/// # Examples
/// ```
/// use csptgen::generation::canonicalize_line;
///
/// assert_eq!(
///     canonicalize_line("https://x.com/a?b=1&a=2&b=3").as_deref(),
///     Some("https://x.com/a?a=magun4&b=magun4_1&b=magun4_2")
/// );
/// assert_eq!(canonicalize_line("https://x.com/path"), None);
/// ```
pub fn canonicalize_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || !has_http_scheme(line) || !line.contains(url_list::QUERY_DELIMITER) {
        return None;
    }

    let parsed = Url::parse(line).ok()?;

    let mut key_counts: BTreeMap<String, usize> = BTreeMap::new();
    for (key, _) in parsed.query_pairs() {
        *key_counts.entry(key.into_owned()).or_default() += 1;
    }
    if key_counts.is_empty() {
        return None;
    }

    let canonical_keys = key_counts
        .iter()
        .flat_map(|(key, count)| std::iter::repeat_n(key.as_str(), *count));
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(
            canonical_keys
                .enumerate()
                .map(|(index, key)| (key, placeholder(index))),
        )
        .finish();

    // Text around the query is copied from the line as written.
    let query_start = line.find(url_list::QUERY_DELIMITER)?;
    let fragment = line[query_start..]
        .find(url_list::FRAGMENT_DELIMITER)
        .map(|offset| &line[query_start + offset..]);

    let mut canonical = String::from(&line[..query_start]);
    canonical.push(url_list::QUERY_DELIMITER);
    canonical.push_str(&query);
    if let Some(fragment) = fragment {
        canonical.push_str(fragment);
    }

    Some(canonical)
}

/// Canonicalize every line, deduplicating the results.
pub fn canonicalize_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> CanonicalSummary {
    let mut summary = CanonicalSummary::default();

    for line in lines.into_iter().filter(|line| !line.trim().is_empty()) {
        summary.lines_processed += 1;
        match canonicalize_line(line) {
            Some(url) => {
                summary.urls.insert(url);
            }
            None => summary.lines_skipped += 1,
        }
    }

    summary
}

/// Read a URL list file and canonicalize its lines.
pub fn canonicalize_file(path: &Path) -> Result<CanonicalSummary> {
    if !path.is_file() {
        return Err(CsptError::FileNotFound(path.display().to_string()));
    }

    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(canonicalize_lines(content.lines()))
}
