//! Extract parameterized routes from JavaScript sources and generate
//! placeholder-filled URLs for client-side path traversal testing.

pub mod config;
pub mod core;
pub mod discovery;
pub mod generation;
pub mod reporting;
pub mod runner;
pub mod ui;

pub use crate::core::{CsptError, PathTemplate, Result};
