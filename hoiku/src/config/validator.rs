//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use hoiku::config::{Config, ConfigValidator};
///
/// assert!(ConfigValidator::validate(&Config::default()).is_ok());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks every value that the schema alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending key.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(dir) = &config.data_dir {
            if dir.as_os_str().is_empty() {
                return Err(invalid("data_dir", "must not be empty"));
            }
        }

        if let Some(db) = &config.database {
            if db.busy_timeout_ms == Some(0) {
                return Err(invalid("database.busy_timeout_ms", "must be greater than 0"));
            }
        }

        if let Some(template) = &config.template {
            if let Some(path) = &template.asset_path {
                if path.as_os_str().is_empty() {
                    return Err(invalid("template.asset_path", "must not be empty"));
                }
            }
            if let Some(name) = &template.default_file_name {
                Self::validate_file_name(name)?;
            }
        }

        Ok(())
    }

    /// Checks an export file name: non-empty and without path separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an empty name or one containing
    /// `/` or `\`.
    pub fn validate_file_name(name: &str) -> Result<()> {
        let field = "template.default_file_name";
        if name.trim().is_empty() {
            return Err(invalid(field, "must not be empty"));
        }
        if name.contains(['/', '\\']) {
            return Err(invalid(field, "must be a file name, not a path"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> Error {
    Error::Validation {
        field: field.into(),
        message: message.into(),
    }
}
