//! Test URL generation
//!
//! This module turns path templates into placeholder-filled URLs and
//! canonicalizes existing URL lists with the same placeholder scheme.

pub mod canonical;
pub mod substitute;

// Re-export commonly used items
pub use canonical::{CanonicalSummary, canonicalize_file, canonicalize_line, canonicalize_lines};
pub use substitute::{build_url, placeholder, substitute_params};
