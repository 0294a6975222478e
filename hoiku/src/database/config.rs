//! Database location and connection parameters.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the reservation database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "hoiku.db";

/// Environment variable that overrides the data directory.
pub(crate) const DATA_DIR_ENV: &str = "HOIKU_DATA_DIR";

/// Default busy timeout applied to new connections.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use hoiku::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/hoiku.db")
///     .with_busy_timeout(Duration::from_millis(10_000));
/// assert_eq!(config.busy_timeout, Duration::from_millis(10_000));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// How long to wait on a locked database.
    pub busy_timeout: Duration,
    /// Create the file and its parent directory if missing.
    pub auto_create: bool,
    /// Open without write access.
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Creates a configuration with a 5s busy timeout, auto-create on,
    /// read-only off.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
            read_only: false,
        }
    }

    /// Sets the busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Refuses to create a missing database.
    #[must_use]
    pub const fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }

    /// Opens read-only. Implies no auto-create.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.hoiku`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".hoiku"))
        .ok_or_else(|| Error::Validation {
            field: "home_directory".into(),
            message: "cannot determine home directory".into(),
        })
}

/// Resolves the database path.
///
/// `$HOIKU_DATA_DIR/hoiku.db` when the variable is set, otherwise
/// `~/.hoiku/hoiku.db`.
///
/// # Errors
///
/// Returns an error if `HOIKU_DATA_DIR` is unset and the home directory
/// cannot be determined.
pub fn resolve_database_path() -> Result<PathBuf> {
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => Ok(PathBuf::from(dir).join(DATABASE_FILE_NAME)),
        _ => Ok(default_data_dir()?.join(DATABASE_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_config_defaults() {
        let config = DatabaseConfig::new("/tmp/test.db");
        assert_eq!(config.path, PathBuf::from("/tmp/test.db"));
        assert_eq!(config.busy_timeout, DEFAULT_BUSY_TIMEOUT);
        assert!(config.auto_create);
        assert!(!config.read_only);
    }

    #[test]
    fn test_read_only_disables_auto_create() {
        let config = DatabaseConfig::new("/tmp/test.db").read_only();
        assert!(config.read_only);
        assert!(!config.auto_create);
    }

    #[test]
    #[serial]
    fn test_resolve_database_path_from_env() {
        std::env::set_var(DATA_DIR_ENV, "/custom/data");
        let path = resolve_database_path().unwrap();
        std::env::remove_var(DATA_DIR_ENV);
        assert_eq!(path, PathBuf::from("/custom/data/hoiku.db"));
    }

    #[test]
    #[serial]
    fn test_resolve_database_path_default() {
        std::env::remove_var(DATA_DIR_ENV);
        if let Ok(path) = resolve_database_path() {
            assert!(path.ends_with(".hoiku/hoiku.db"));
        }
    }
}
