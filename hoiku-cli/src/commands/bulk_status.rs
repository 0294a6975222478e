//! `bulk-status`: select every reservation matching a filter, then change
//! their status together.

use crate::commands::FilterArgs;
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};
use clap::Args;
use hoiku::query::ReservationView;
use hoiku::service::ReservationService;
use hoiku::ReservationStatus;

/// Change the status of every reservation matching a filter.
#[derive(Args)]
pub struct BulkStatusCommand {
    /// Target status
    #[arg(id = "target", value_name = "STATUS")]
    pub status: ReservationStatus,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show the selection without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl BulkStatusCommand {
    /// Execute the bulk-status command.
    ///
    /// Reservations whose lifecycle forbids the move are reported and the
    /// command exits with a semantic failure; the others are still updated.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let mut view = ReservationView::from_repository(&db, config.view_config())?;
        view.set_filter(self.filter.to_filter());
        view.select_all();
        let selected = view.visible_selection();

        if selected.is_empty() {
            if !global.quiet {
                println!("No reservations match the filter");
            }
            return Ok(());
        }

        if self.dry_run {
            println!("Would move {} reservation(s) to {}:", selected.len(), self.status);
            for id in &selected {
                println!("  {id}");
            }
            return Ok(());
        }

        let mut service = ReservationService::new(db);
        let outcome = service.bulk_update_status(&selected, self.status);

        if !global.quiet {
            for reservation in &outcome.updated {
                println!("{}: -> {}", reservation.id(), self.status);
            }
        }
        for (id, error) in &outcome.failed {
            eprintln!("{id}: {error}");
        }

        if outcome.is_complete() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} of {} reservation(s) could not be moved to {}",
                outcome.failed.len(),
                selected.len(),
                self.status
            )))
        }
    }
}
