//! Error types for argconv-core

use std::path::PathBuf;

/// Result type for argconv-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type returned by conversion callables registered on a [`TargetType`].
///
/// These errors never leave the resolution chain; a strategy that receives
/// one reports a failed outcome instead.
///
/// [`TargetType`]: crate::TargetType
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur in argconv-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required argument to `convert` was absent.
    ///
    /// This is a caller-side contract violation, raised before any
    /// strategy runs.
    #[error("Invalid argument: {argument} is absent")]
    InvalidArgument { argument: &'static str },

    /// Every strategy declined to convert the value.
    #[error("{name}: can not convert \"{value}\" to a {type_name}")]
    TypeConversion {
        name: String,
        value: String,
        type_name: String,
    },

    #[error("Unknown type: {name}")]
    UnknownType { name: String },

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid_config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Check whether this error is a conversion failure rather than a
    /// contract violation or a configuration problem.
    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, Error::TypeConversion { .. })
    }
}
