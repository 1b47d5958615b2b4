use std::fmt;

/// Error types for csptgen operations
#[derive(Debug)]
pub enum CsptError {
    /// IO error (file operations, etc.)
    Io(std::io::Error),

    /// File not found error
    FileNotFound(String),

    /// Source directory does not exist
    DirectoryNotFound(String),

    /// Writing an output file failed
    Output { path: String, source: std::io::Error },
}

impl fmt::Display for CsptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsptError::Io(err) => write!(f, "IO error: {err}"),
            CsptError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CsptError::DirectoryNotFound(path) => write!(f, "Directory not found: {path}"),
            CsptError::Output { path, source } => {
                write!(f, "Could not write output file '{path}': {source}")
            }
        }
    }
}

impl std::error::Error for CsptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CsptError::Io(err) => Some(err),
            CsptError::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CsptError {
    fn from(err: std::io::Error) -> Self {
        CsptError::Io(err)
    }
}

/// Type alias for Results using CsptError
pub type Result<T> = std::result::Result<T, CsptError>;
