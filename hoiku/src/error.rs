//! Error types for the hoiku library.
//!
//! This module provides the error hierarchy shared by every layer of the
//! library, using `thiserror` for ergonomic error handling.

use thiserror::Error;

use crate::reservation::ReservationStatus;

/// Result type alias for operations that may fail with a hoiku error.
///
/// # Examples
///
/// ```
/// use hoiku::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(5)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the hoiku library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file exists but could not be parsed.
    #[error("invalid configuration file {}: {source}", path.display())]
    ConfigFile {
        /// The offending file.
        path: std::path::PathBuf,
        /// The parse failure.
        source: serde_yaml::Error,
    },

    /// A JSON document could not be encoded or decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A reservation status change is not allowed by the lifecycle.
    #[error("cannot change reservation status from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ReservationStatus,
        /// The requested status.
        to: ReservationStatus,
    },

    /// A deep-link form payload could not be decoded.
    #[error("could not read form data: {reason}")]
    PayloadDecode {
        /// Why decoding failed.
        reason: String,
    },

    /// The operation is not available on this platform.
    #[error("{message}")]
    UnsupportedPlatform {
        /// Fixed user-facing message.
        message: String,
    },

    /// A reservation with the same id already exists.
    #[error("reservation already exists: {id}")]
    DuplicateReservation {
        /// The conflicting id.
        id: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::reservation::ValidationError> for Error {
    fn from(err: crate::reservation::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing reservation or resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoiku::Error;
    ///
    /// let err = Error::NotFound { resource: "reservation r-1".into() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error was raised by the status lifecycle.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition { .. })
    }
}
