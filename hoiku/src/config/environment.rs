//! `HOIKU_*` environment variable overrides.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::query::{SortDirection, SortKey};
use std::env;
use std::path::PathBuf;

/// Applies environment variables on top of file-based configuration.
///
/// | Variable | Key |
/// |---|---|
/// | `HOIKU_DATA_DIR` | `data_dir` |
/// | `HOIKU_BUSY_TIMEOUT_MS` | `database.busy_timeout_ms` |
/// | `HOIKU_DEFAULT_SORT` | `view.default_sort` |
/// | `HOIKU_SORT_DIRECTION` | `view.default_direction` |
/// | `HOIKU_CLEAR_SELECTION_ON_FILTER_CHANGE` | `view.clear_selection_on_filter_change` |
/// | `HOIKU_TEMPLATE_PATH` | `template.asset_path` |
/// | `HOIKU_OUTPUT_FORMAT` | `output_format` |
/// | `HOIKU_DISABLE_AUTOINIT` | `disable_autoinit` |
///
/// # Examples
///
/// ```no_run
/// use hoiku::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the variable if its value cannot
    /// be parsed.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::var(crate::database::DATA_DIR_ENV) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(ms) = Self::var("HOIKU_BUSY_TIMEOUT_MS") {
            let ms = ms.parse().map_err(|_| Error::Validation {
                field: "HOIKU_BUSY_TIMEOUT_MS".into(),
                message: "must be a non-negative integer".into(),
            })?;
            config
                .database
                .get_or_insert_with(Default::default)
                .busy_timeout_ms = Some(ms);
        }

        if let Some(key) = Self::var("HOIKU_DEFAULT_SORT") {
            let key: SortKey = key.parse().map_err(|e| Self::rename("HOIKU_DEFAULT_SORT", e))?;
            config.view.get_or_insert_with(Default::default).default_sort = Some(key);
        }

        if let Some(direction) = Self::var("HOIKU_SORT_DIRECTION") {
            let direction: SortDirection = direction
                .parse()
                .map_err(|e| Self::rename("HOIKU_SORT_DIRECTION", e))?;
            config.view.get_or_insert_with(Default::default).default_direction = Some(direction);
        }

        if let Some(val) = Self::var("HOIKU_CLEAR_SELECTION_ON_FILTER_CHANGE") {
            let clear = Self::parse_bool("HOIKU_CLEAR_SELECTION_ON_FILTER_CHANGE", &val)?;
            config
                .view
                .get_or_insert_with(Default::default)
                .clear_selection_on_filter_change = Some(clear);
        }

        if let Some(path) = Self::var("HOIKU_TEMPLATE_PATH") {
            config.template.get_or_insert_with(Default::default).asset_path =
                Some(PathBuf::from(path));
        }

        if let Some(format) = Self::var("HOIKU_OUTPUT_FORMAT") {
            config.output_format =
                Some(format.parse().map_err(|e| Self::rename("HOIKU_OUTPUT_FORMAT", e))?);
        }

        if let Some(val) = Self::var("HOIKU_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("HOIKU_DISABLE_AUTOINIT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean environment value.
    ///
    /// Accepts `true/1/yes/on` and `false/0/no/off`, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming `var_name` for anything else.
    pub fn parse_bool(var_name: &str, value: &str) -> Result<bool> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: var_name.into(),
                message: format!("invalid boolean value '{value}'"),
            }),
        }
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }

    // Reports a parse failure against the variable rather than the key.
    fn rename(var_name: &str, err: Error) -> Error {
        match err {
            Error::Validation { message, .. } => Error::Validation {
                field: var_name.into(),
                message,
            },
            other => other,
        }
    }
}
