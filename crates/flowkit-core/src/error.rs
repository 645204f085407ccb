//! Error handling for flowkit
//!
//! Provides the error types used by the geometry layer:
//! - Geometry errors (rejected transforms, bad handles, bad configuration)
//! - A unified `Error` for callers that mix geometry with I/O
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Represents a transform or configuration that the geometry layer refused
/// to apply. A rejected transform never leaves a rect partially modified.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Resize would shrink the rect below the configured minimum extent
    #[error("Resize rejected: {width}x{height} is below the minimum extent {min}")]
    BelowMinimumExtent {
        /// The width the resize would have produced.
        width: f64,
        /// The height the resize would have produced.
        height: f64,
        /// The configured minimum extent.
        min: f64,
    },

    /// Resize handle index outside 0..=7
    #[error("Invalid resize handle index: {0}")]
    InvalidResizeHandle(u8),

    /// A geometry configuration value is unusable
    #[error("Invalid geometry setting '{key}': {reason}")]
    InvalidConfig {
        /// The setting name.
        key: String,
        /// Why the value was refused.
        reason: String,
    },
}

/// Main error type for flowkit
///
/// A unified error type that can represent any error from the core layer.
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error is a rejected resize
    pub fn is_rejected_resize(&self) -> bool {
        matches!(
            self,
            Error::Geometry(GeometryError::BelowMinimumExtent { .. })
                | Error::Geometry(GeometryError::InvalidResizeHandle(_))
        )
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
