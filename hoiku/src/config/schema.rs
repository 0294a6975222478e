//! Configuration schema definitions.
//!
//! Every field is optional so that partial files can be layered on top of
//! each other; defaults are applied by the accessor methods on [`Config`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::database::DEFAULT_BUSY_TIMEOUT;
use crate::error::{Error, Result};
use crate::query::{SortDirection, SortKey, SortSpec, ViewConfig};

/// File name used for template exports when none is given.
pub const DEFAULT_TEMPLATE_FILE_NAME: &str = "reservation_template.xlsx";

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use hoiku::config::Config;
///
/// let yaml = r#"
/// database:
///   busy_timeout_ms: 10000
/// view:
///   default_sort: child_name
///   default_direction: desc
/// output_format: csv
/// "#;
///
/// let config: Config = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(config.busy_timeout().as_millis(), 10_000);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the database and the user config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Database connection settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseSettings>,

    /// Dashboard view defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewSettings>,

    /// Excel template export settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateSettings>,

    /// Default output format for list commands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Do not create the database on first use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// Busy timeout for database connections.
    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        self.database
            .as_ref()
            .and_then(|db| db.busy_timeout_ms)
            .map_or(DEFAULT_BUSY_TIMEOUT, Duration::from_millis)
    }

    /// Settings for a [`crate::query::ReservationView`].
    #[must_use]
    pub fn view_config(&self) -> ViewConfig {
        let Some(view) = &self.view else {
            return ViewConfig::default();
        };
        ViewConfig {
            clear_selection_on_filter_change: view.clear_selection_on_filter_change.unwrap_or(false),
            default_sort: SortSpec::new(
                view.default_sort.unwrap_or_default(),
                view.default_direction.unwrap_or_default(),
            ),
        }
    }

    /// File name used when exporting the template without an explicit name.
    #[must_use]
    pub fn template_file_name(&self) -> &str {
        self.template
            .as_ref()
            .and_then(|t| t.default_file_name.as_deref())
            .unwrap_or(DEFAULT_TEMPLATE_FILE_NAME)
    }

    /// Configured template asset, if any.
    #[must_use]
    pub fn template_asset_path(&self) -> Option<&PathBuf> {
        self.template.as_ref().and_then(|t| t.asset_path.as_ref())
    }

    /// Output format, defaulting to a table.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Database settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSettings {
    /// Milliseconds to wait on a locked database.
    pub busy_timeout_ms: Option<u64>,
}

/// Dashboard view defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ViewSettings {
    /// Initial sort key.
    pub default_sort: Option<SortKey>,
    /// Initial sort direction.
    pub default_direction: Option<SortDirection>,
    /// Drop the selection whenever the filter changes.
    pub clear_selection_on_filter_change: Option<bool>,
}

/// Template export settings.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TemplateSettings {
    /// Path of the `.xlsx` asset to copy.
    pub asset_path: Option<PathBuf>,
    /// File name used when none is given.
    pub default_file_name: Option<String>,
}

/// Output format for reservation listings.
///
/// # Examples
///
/// ```
/// use hoiku::config::OutputFormat;
///
/// let format: OutputFormat = "tsv".parse().unwrap();
/// assert_eq!(format.to_string(), "tsv");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array.
    Json,
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Aligned columns for the terminal.
    #[default]
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
            Self::Table => write!(f, "table"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            "table" => Ok(Self::Table),
            other => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown format '{other}' (expected json, csv, tsv or table)"),
            }),
        }
    }
}
