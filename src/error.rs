//! Error types for transfer utility operations

use std::io;
use thiserror::Error;

/// The error type for transfer utility operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilError {
    /// Path string could not be read as a URI path component
    #[error("Cannot parse path {path:?}: {reason}")]
    PathParse { path: String, reason: String },

    /// URI string is not syntactically valid
    #[error("Invalid URI {uri:?}: {reason}")]
    UriParse { uri: String, reason: String },

    /// URI parsed but carries no scheme
    #[error("URI has no scheme: {uri:?}")]
    MissingScheme { uri: String },

    /// Filesystem operation (stat, read_dir) failed
    #[error("Cannot access {path}: {message}")]
    FileAccess {
        path: String,
        kind: io::ErrorKind,
        message: String,
    },

    /// Byte format specifier is malformed
    #[error("Invalid byte format {spec:?}: {reason}")]
    InvalidFormat { spec: String, reason: String },
}

impl UtilError {
    /// Wrap an I/O failure on `path`.
    pub(crate) fn file_access(path: impl Into<String>, err: &io::Error) -> Self {
        UtilError::FileAccess {
            path: path.into(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// True for both URI failure variants.
    pub fn is_uri_error(&self) -> bool {
        matches!(
            self,
            UtilError::UriParse { .. } | UtilError::MissingScheme { .. }
        )
    }
}

/// Result type for transfer utility operations
pub type Result<T> = std::result::Result<T, UtilError>;
