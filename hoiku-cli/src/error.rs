//! CLI error type and exit codes.

use std::fmt;
use hoiku::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Database missing and auto-init disabled.
    NoDataDirectory,

    /// Configuration error.
    Config(String),

    /// The command ran but did not fully succeed.
    SemanticFailure(String),
}

impl CliError {
    /// Exit code for this error.
    ///
    /// - 1: semantic failure, including a rejected status change
    /// - 3: no data directory
    /// - 4: invalid arguments or input
    /// - 5: I/O error
    /// - 6: other library error
    /// - 7: configuration error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::InvalidTransition { .. } => 1,
                LibError::Validation { .. } | LibError::PayloadDecode { .. } => 4,
                LibError::Io(_) => 5,
                LibError::Configuration(_) | LibError::ConfigFile { .. } => 7,
                _ => 6,
            },
            CliError::NoDataDirectory => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::NoDataDirectory => write!(
                f,
                "Database not found (run `hoiku init` or drop --disable-autoinit)"
            ),
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Library(LibError::Json(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoiku::ReservationStatus;

    #[test]
    fn test_exit_codes() {
        let transition = CliError::from(LibError::InvalidTransition {
            from: ReservationStatus::Cancelled,
            to: ReservationStatus::Confirmed,
        });
        assert_eq!(transition.exit_code(), 1);
        assert_eq!(CliError::NoDataDirectory.exit_code(), 3);
        assert_eq!(CliError::InvalidArguments("x".into()).exit_code(), 4);
        assert_eq!(
            CliError::from(LibError::PayloadDecode { reason: "x".into() }).exit_code(),
            4
        );
        assert_eq!(
            CliError::from(std::io::Error::new(std::io::ErrorKind::Other, "x")).exit_code(),
            5
        );
        assert_eq!(
            CliError::from(LibError::NotFound { resource: "x".into() }).exit_code(),
            6
        );
        assert_eq!(CliError::Config("x".into()).exit_code(), 7);
    }
}
