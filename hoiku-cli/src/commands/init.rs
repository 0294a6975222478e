//! `init`: create the data directory and database.

use crate::error::CliError;
use crate::utils::{database_config, load_configuration, GlobalOptions};
use clap::Parser;
use hoiku::sample::sample_reservations;
use hoiku::template::install_bundled_template;
use hoiku::Database;
use std::fs;

const DEFAULT_CONFIG: &str = "\
# hoiku user configuration
# database:
#   busy_timeout_ms: 5000
# view:
#   default_sort: date_time
#   default_direction: asc
#   clear_selection_on_filter_change: false
# output_format: table
";

/// Create the database, load the sample reservations and install the
/// Excel template.
#[derive(Parser)]
pub struct InitCommand {
    /// Create the schema without sample reservations
    #[arg(long)]
    empty: bool,

    /// Replace existing reservations with the sample set
    #[arg(long, conflicts_with = "empty")]
    overwrite: bool,

    /// Also write a commented config.yaml if none exists
    #[arg(long)]
    with_config: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` is ignored here; creating the database is the
    /// point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db_config = database_config(global, &config)?;
        let existed = db_config.path.exists();
        let data_dir = db_config
            .path
            .parent()
            .map(std::path::Path::to_path_buf)
            .unwrap_or_default();

        let mut db = Database::open(db_config)?;
        let existing = Database::list_all_reservations(db.connection())?.len();

        let mut report = vec![format!(
            "  - {} database",
            if existed { "Using existing" } else { "Created" }
        )];

        if self.empty {
            report.push("  - No sample data loaded".to_string());
        } else if existing > 0 && !self.overwrite {
            report.push(format!(
                "  - Database already holds {existing} reservation(s); use --overwrite to reload the sample set"
            ));
        } else {
            let samples = sample_reservations();
            let removed = db.replace_all(&samples)?;
            if removed > 0 {
                report.push(format!("  - Removed {removed} existing reservation(s)"));
            }
            report.push(format!("  - Loaded {} sample reservation(s)", samples.len()));
        }

        match install_bundled_template(&data_dir)? {
            Some(path) => report.push(format!("  - Installed Excel template {}", path.display())),
            None => report.push("  - Excel template already present (not overwritten)".to_string()),
        }

        if self.with_config {
            let path = data_dir.join("config.yaml");
            if path.exists() {
                report.push("  - Configuration file already exists (not overwritten)".to_string());
            } else {
                fs::write(&path, DEFAULT_CONFIG)?;
                report.push(format!("  - Created {}", path.display()));
            }
        }

        if !global.quiet {
            println!("Initialized hoiku in: {}", data_dir.display());
            for line in report {
                println!("{line}");
            }
        }
        Ok(())
    }
}
