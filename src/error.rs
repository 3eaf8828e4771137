//! Error types for nested-select
//!
//! The selection core never fails; these errors cover loading option
//! lists and configuration from disk.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for nested-select operations
pub type NestedSelectResult<T> = Result<T, NestedSelectError>;

/// Main error type for nested-select operations
#[derive(Error, Debug)]
pub enum NestedSelectError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON option list could not be parsed
    #[error("invalid JSON in {file}: {message}")]
    Json { file: PathBuf, message: String },

    /// YAML option list could not be parsed
    #[error("invalid YAML in {file}: {message}")]
    Yaml { file: PathBuf, message: String },

    /// TOML option list or config could not be parsed
    #[error("invalid TOML in {file}: {message}")]
    Toml { file: PathBuf, message: String },

    /// Option file extension is not one we can read
    #[error("unsupported option file format '{extension}' for {file} (expected .json, .yaml, .yml or .toml)")]
    UnsupportedFormat { file: PathBuf, extension: String },

    /// A value was requested that is not in the option list
    #[error("unknown option value '{value}'")]
    UnknownOption { value: String },
}
