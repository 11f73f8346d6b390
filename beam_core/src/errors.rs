//! # Error Types
//!
//! Structured error types for beam_core. Every failure that can reach the
//! user (bad enum values at the input boundary, settings problems, network
//! and stream failures) is one of these variants, so front-ends can show a
//! message and also emit a machine-readable form.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn parse_kind(value: &str) -> BeamResult<()> {
//!     if value != "point" {
//!         return Err(BeamError::invalid_input("load_kind", value, "Unknown load kind"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(parse_kind("torque").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for BeamCee operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// An input value is invalid (unknown enum value, malformed file, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Client settings are unusable
    #[error("Invalid setting '{field}': {reason}")]
    Settings { field: String, reason: String },

    /// The request could not be sent (connection refused, DNS, timeout)
    #[error("Request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    /// The endpoint answered with a non-success status
    #[error("Endpoint returned {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The response stream broke after it started
    #[error("Stream error: {reason}")]
    Stream { reason: String },

    /// The response contained no "Step N:" markers
    #[error("No step markers found in a response of {length} characters")]
    NoStepsFound { length: usize },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BeamError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Settings error
    pub fn settings(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::Settings {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an Http error
    pub fn http(url: impl Into<String>, reason: impl Into<String>) -> Self {
        BeamError::Http {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a Stream error
    pub fn stream(reason: impl Into<String>) -> Self {
        BeamError::Stream { reason: reason.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::InvalidInput { .. } => "INVALID_INPUT",
            BeamError::Settings { .. } => "SETTINGS",
            BeamError::Http { .. } => "HTTP_ERROR",
            BeamError::HttpStatus { .. } => "HTTP_STATUS",
            BeamError::Stream { .. } => "STREAM_ERROR",
            BeamError::NoStepsFound { .. } => "NO_STEPS_FOUND",
            BeamError::SerializationError { .. } => "SERIALIZATION_ERROR",
            BeamError::FileError { .. } => "FILE_ERROR",
            BeamError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for BeamError {
    fn from(e: serde_json::Error) -> Self {
        BeamError::SerializationError { reason: e.to_string() }
    }
}
