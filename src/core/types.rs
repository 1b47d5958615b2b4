use once_cell::sync::Lazy;
use regex::Regex;

use std::fmt;

use crate::core::constants::extraction;

static PARAM_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(extraction::PARAM_NAME_PATTERN).expect("Failed to compile parameter name pattern")
});

/// A route string with at least one `:name` parameter, e.g. `/user/:id/*`.
///
/// Only constructible through [`PathTemplate::new`], which applies the
/// extraction heuristics. Equality and ordering are by string value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathTemplate(String);

/// Reasons a candidate string is rejected as a path template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathTemplateError {
    /// Does not start with `/`
    MissingLeadingSlash,
    /// Does not contain the `/:` parameter marker
    MissingParamMarker,
    /// Contains a character outside the path character class
    InvalidCharacter(char),
    /// Contains a space, parenthesis, bracket, backslash, pipe or `?!`
    ForbiddenSubstring(&'static str),
    /// Length is not strictly between the bounds
    InvalidLength(usize),
    /// No `/:` is followed by a well-formed parameter name
    MalformedParamName,
}

impl fmt::Display for PathTemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLeadingSlash => write!(f, "path must start with '/'"),
            Self::MissingParamMarker => write!(f, "path must contain '/:'"),
            Self::InvalidCharacter(c) => write!(f, "path contains invalid character '{c}'"),
            Self::ForbiddenSubstring(s) => write!(f, "path contains forbidden sequence '{s}'"),
            Self::InvalidLength(len) => write!(
                f,
                "path length {len} must be between {} and {} (exclusive)",
                extraction::MIN_LENGTH_EXCLUSIVE,
                extraction::MAX_LENGTH_EXCLUSIVE
            ),
            Self::MalformedParamName => write!(f, "path has no well-formed parameter name"),
        }
    }
}

impl std::error::Error for PathTemplateError {}

impl PathTemplate {
    /// Validate a candidate route string.
    ///
    /// # Examples
    /// ```
    /// use csptgen::core::types::PathTemplate;
    ///
    /// assert!(PathTemplate::new("/download/:id").is_ok());
    /// assert!(PathTemplate::new("/download/:1abc").is_err());
    /// ```
    pub fn new(candidate: impl Into<String>) -> Result<Self, PathTemplateError> {
        let candidate = candidate.into();

        if !candidate.starts_with(extraction::PATH_PREFIX) {
            return Err(PathTemplateError::MissingLeadingSlash);
        }
        if !candidate.contains(extraction::PARAM_MARKER) {
            return Err(PathTemplateError::MissingParamMarker);
        }
        if let Some(forbidden) = extraction::FORBIDDEN_SUBSTRINGS
            .iter()
            .find(|s| candidate.contains(**s))
        {
            return Err(PathTemplateError::ForbiddenSubstring(*forbidden));
        }
        if let Some(c) = candidate.chars().find(|c| !is_path_char(*c)) {
            return Err(PathTemplateError::InvalidCharacter(c));
        }

        let len = candidate.chars().count();
        if len <= extraction::MIN_LENGTH_EXCLUSIVE || len >= extraction::MAX_LENGTH_EXCLUSIVE {
            return Err(PathTemplateError::InvalidLength(len));
        }
        if !PARAM_NAME_REGEX.is_match(&candidate) {
            return Err(PathTemplateError::MalformedParamName);
        }

        Ok(Self(normalize_wildcard(candidate)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// A trailing `/*` is kept as the literal `/*`.
fn normalize_wildcard(candidate: String) -> String {
    match candidate.strip_suffix(extraction::WILDCARD_SUFFIX) {
        Some(stem) => format!("{stem}{}", extraction::WILDCARD_SUFFIX),
        None => candidate,
    }
}

// Mirrors `extraction::PATH_CHAR_CLASS`.
fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '*' | ':')
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PathTemplate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
