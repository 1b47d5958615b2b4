//! Diagnostics
//!
//! Structured logging for the application.

pub mod logging;
