use std::fs;
use std::path::Path;

use crate::core::error::{CsptError, Result};

pub trait WriteToFile {
    fn write_lines<S: AsRef<str>>(&self, path: &Path, lines: &[S]) -> Result<()>;
}

/// Writes each output file in a single call: lines joined by `\n`, no
/// trailing newline.
#[derive(Default)]
pub struct Writer;

impl WriteToFile for Writer {
    fn write_lines<S: AsRef<str>>(&self, path: &Path, lines: &[S]) -> Result<()> {
        let data = join_lines(lines);
        fs::write(path, data).map_err(|source| CsptError::Output {
            path: path.display().to_string(),
            source,
        })
    }
}

pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Pluralize a count for progress messages, e.g. `1 path` / `2 paths`
pub fn count_noun(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(&["a", "b"]), "a\nb");
        assert_eq!(join_lines::<&str>(&[]), "");
    }

    #[test]
    fn test_write_lines__no_trailing_newline() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("paths.txt");

        Writer.write_lines(&path, &["/download/:id", "/user/:userId"])?;

        assert_eq!(fs::read_to_string(&path)?, "/download/:id\n/user/:userId");
        Ok(())
    }

    #[test]
    fn test_write_lines__overwrites() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.txt");
        fs::write(&path, "old content that is longer")?;

        Writer.write_lines(&path, &["new"])?;

        assert_eq!(fs::read_to_string(&path)?, "new");
        Ok(())
    }

    #[test]
    fn test_write_lines__missing_directory() {
        let result = Writer.write_lines(Path::new("/no/such/dir/paths.txt"), &["x"]);

        assert!(matches!(result, Err(CsptError::Output { .. })));
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(1, "path", "paths"), "1 path");
        assert_eq!(count_noun(0, "path", "paths"), "0 paths");
        assert_eq!(count_noun(3, "file", "files"), "3 files");
    }
}
