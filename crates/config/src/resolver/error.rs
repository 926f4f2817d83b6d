//! Error types for configuration resolution.
//!
//! Responsibilities:
//! - Define error variants for all resolution failures.
//! - Carry the origin (resource, path, key) of each failure.
//!
//! Does NOT handle:
//! - Parse error details (see `PropertiesError` in properties.rs).
//!
//! Invariants:
//! - Absent optional layers never produce an error.
//! - Absent keys never produce an error.

use std::path::PathBuf;
use thiserror::Error;

use crate::properties::PropertiesError;

/// Errors that can occur while resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The key is empty or whitespace-only.
    #[error("Invalid property key: {0:?}")]
    InvalidKey(String),

    #[error("Failed to read resource {resource}")]
    ResourceRead {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read config file at {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}")]
    Parse {
        origin: String,
        #[source]
        source: PropertiesError,
    },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Unable to determine resource directory: {0}")]
    ResourceDirUnavailable(String),
}
