use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::constants::{extraction, placeholders};

static SUBSTITUTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(extraction::SUBSTITUTION_PATTERN).expect("Failed to compile substitution pattern")
});

/// Placeholder for the `index`-th substitution (0-based) within one
/// template or URL: `magun4`, then `magun4_1`, `magun4_2`, ...
pub fn placeholder(index: usize) -> String {
    if index == 0 {
        placeholders::BASE.to_string()
    } else {
        format!(
            "{}{}{index}",
            placeholders::BASE,
            placeholders::INDEX_SEPARATOR
        )
    }
}

/// Replace every `:name` occurrence left to right with sequential
/// placeholders and drop a single trailing `/*`.
pub fn substitute_params(template: &str) -> String {
    let mut index = 0;
    let substituted = SUBSTITUTION_REGEX.replace_all(template, |_: &Captures| {
        let value = placeholder(index);
        index += 1;
        value
    });

    match substituted.strip_suffix(extraction::WILDCARD_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => substituted.into_owned(),
    }
}

/// Join `domain` and a substituted `template` with exactly one `/`.
///
/// # Examples
/// ```
/// use csptgen::generation::build_url;
///
/// assert_eq!(
///     build_url("https://example.com/", "/user/:userId/post/:postId"),
///     "https://example.com/user/magun4/post/magun4_1"
/// );
/// ```
pub fn build_url(domain: &str, template: &str) -> String {
    let domain = domain.trim_end_matches('/');
    let path = substitute_params(template);
    format!("{domain}/{}", path.trim_start_matches('/'))
}
