//! Utility modules.

/// Log sanitization utilities to keep large or sensitive bodies out of logs.
pub mod log_sanitizer;
