//! Single-reservation status changes.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, parse_id, GlobalOptions};
use clap::Args;
use hoiku::repository::SqliteRepository;
use hoiku::service::ReservationService;
use hoiku::{Reservation, ReservationId, ReservationStatus};

type Service = ReservationService<SqliteRepository>;

fn apply<F>(global: &GlobalOptions, raw_id: &str, change: F) -> Result<(), CliError>
where
    F: FnOnce(&mut Service, &ReservationId) -> hoiku::Result<Reservation>,
{
    let id = parse_id(raw_id)?;
    let config = load_configuration(global)?;
    let mut service = ReservationService::new(open_database(global, &config)?);

    let before = service.get(&id)?.status();
    let updated = change(&mut service, &id)?;

    if !global.quiet {
        println!("{id}: {before} -> {}", updated.status());
    }
    Ok(())
}

/// Move a reservation to another status.
#[derive(Args)]
pub struct SetStatusCommand {
    /// Reservation id
    pub id: String,

    /// Target status (pending, confirmed, checked_in, checked_out, cancelled)
    pub status: ReservationStatus,
}

impl SetStatusCommand {
    /// Execute the set-status command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let target = self.status;
        apply(global, &self.id, |service, id| service.update_status(id, target))
    }
}

/// Record a child's arrival.
#[derive(Args)]
pub struct CheckInCommand {
    /// Reservation id
    pub id: String,
}

impl CheckInCommand {
    /// Execute the check-in command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        apply(global, &self.id, Service::check_in)
    }
}

/// Record a child's departure.
#[derive(Args)]
pub struct CheckOutCommand {
    /// Reservation id
    pub id: String,
}

impl CheckOutCommand {
    /// Execute the check-out command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        apply(global, &self.id, Service::check_out)
    }
}

/// Cancel a reservation.
#[derive(Args)]
pub struct CancelCommand {
    /// Reservation id
    pub id: String,
}

impl CancelCommand {
    /// Execute the cancel command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        apply(global, &self.id, Service::cancel)
    }
}
