//! Helpers shared by the commands: configuration, database access and
//! output formatting.

use crate::error::CliError;
use chrono::{DateTime, Utc};
use hoiku::config::OutputFormat;
use hoiku::database::{default_data_dir, DATABASE_FILE_NAME};
use hoiku::{Config, ConfigBuilder, Database, DatabaseConfig, ReservationId};
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in milliseconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// `--data-dir` decides where the user `config.yaml` is read from.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &global.data_dir {
        builder = builder.with_data_dir(dir);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolves the data directory: `--data-dir`, then config, then `~/.hoiku`.
pub fn resolve_data_dir(global: &GlobalOptions, config: &Config) -> Result<PathBuf, CliError> {
    if let Some(dir) = global.data_dir.clone().or_else(|| config.data_dir.clone()) {
        return Ok(dir);
    }
    default_data_dir().map_err(|e| CliError::Config(e.to_string()))
}

/// Builds the connection settings from flags and configuration.
pub fn database_config(global: &GlobalOptions, config: &Config) -> Result<DatabaseConfig, CliError> {
    let path = resolve_data_dir(global, config)?.join(DATABASE_FILE_NAME);
    let timeout = global
        .busy_timeout
        .map_or_else(|| config.busy_timeout(), Duration::from_millis);
    Ok(DatabaseConfig::new(path).with_busy_timeout(timeout))
}

/// Open the database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database does not exist and auto-init
/// is disabled by flag or configuration.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_config = database_config(global, config)?;

    let autoinit_disabled = global.disable_autoinit || config.disable_autoinit == Some(true);
    if !db_config.path.exists() && autoinit_disabled {
        return Err(CliError::NoDataDirectory);
    }

    log::debug!("using database {}", db_config.path.display());
    Database::open(db_config).map_err(CliError::from)
}

/// Parses a reservation id argument.
pub fn parse_id(raw: &str) -> Result<ReservationId, CliError> {
    ReservationId::new(raw).map_err(|e| CliError::InvalidArguments(e.to_string()))
}

/// Format a timestamp for display, in UTC.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Tab-separated table for the terminal
    Table,
    /// JSON array
    Json,
    /// Comma-separated values
    Csv,
    /// Tab-separated values with a header row
    Tsv,
}

impl From<OutputFormat> for FormatArg {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => Self::Table,
            OutputFormat::Json => Self::Json,
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Tsv => Self::Tsv,
        }
    }
}
