use std::path::{Path, PathBuf};

use crate::core::error::{CsptError, Result};
use crate::reporting::logging;

/// Recursively list every file under `root` whose name ends with `suffix`.
///
/// Every directory is descended: no ignore files, hidden-file rules or
/// exclusion patterns apply. Symlinked directories are not followed.
/// Entries that cannot be read are logged and skipped.
pub fn expand_paths(root: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CsptError::DirectoryNotFound(root.display().to_string()));
    }

    let mut builder = ignore::WalkBuilder::new(root);
    builder.standard_filters(false);

    let mut result_paths = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                logging::log_warning(&format!("Skipping unreadable entry: {err}"));
                continue;
            }
        };

        let entry_path = entry.path();
        if entry_path.is_file() && has_suffix(entry_path, suffix) {
            result_paths.push(entry_path.to_path_buf());
        }
    }

    Ok(result_paths)
}

fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(suffix))
}
