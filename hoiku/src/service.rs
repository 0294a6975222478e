//! Reservation mutations.
//!
//! Every status change loads the record, checks the lifecycle, stamps the
//! audit timestamps and writes it back through the repository.

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::repository::{not_found, ReservationRepository};
use crate::reservation::{Reservation, ReservationId, ReservationStatus};

/// Result of a bulk status change.
#[derive(Debug, Default)]
pub struct BulkOutcome {
    /// Reservations that reached the target status.
    pub updated: Vec<Reservation>,
    /// Ids that could not be changed, with the reason.
    pub failed: Vec<(ReservationId, Error)>,
}

impl BulkOutcome {
    /// Returns true if every id was updated.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Applies status changes to reservations held by a repository.
///
/// # Examples
///
/// ```
/// use hoiku::repository::MemoryRepository;
/// use hoiku::sample::sample_reservations;
/// use hoiku::service::ReservationService;
/// use hoiku::{ReservationId, ReservationStatus};
///
/// let repo = MemoryRepository::with_records(sample_reservations()).unwrap();
/// let mut service = ReservationService::new(repo);
///
/// let id = ReservationId::new("r-001").unwrap();
/// let updated = service.check_in(&id).unwrap();
/// assert_eq!(updated.status(), ReservationStatus::CheckedIn);
/// assert!(updated.checked_in_at().is_some());
/// ```
#[derive(Debug)]
pub struct ReservationService<R> {
    repository: R,
    now: fn() -> DateTime<Utc>,
}

impl<R: ReservationRepository> ReservationService<R> {
    /// Creates a service using the system clock.
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            now: Utc::now,
        }
    }

    /// Replaces the clock used for audit timestamps.
    #[must_use]
    pub fn with_clock(mut self, now: fn() -> DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Consumes the service, returning the repository.
    pub fn into_inner(self) -> R {
        self.repository
    }

    /// Returns every reservation in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read.
    pub fn list(&self) -> Result<Vec<Reservation>> {
        self.repository.list()
    }

    /// Loads one reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id.
    pub fn get(&self, id: &ReservationId) -> Result<Reservation> {
        self.repository.get(id)?.ok_or_else(|| not_found(id))
    }

    /// Stores a new reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReservation`] if the id is taken.
    pub fn create(&mut self, reservation: Reservation) -> Result<()> {
        let id = reservation.id().clone();
        self.repository.insert(reservation)?;
        log::info!("created reservation {id}");
        Ok(())
    }

    /// Moves a reservation to `target` and persists it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown id,
    /// [`Error::InvalidTransition`] if the lifecycle forbids the move, and
    /// [`Error::Validation`] if the clock reads earlier than the record's
    /// last update. The stored record is untouched on error.
    pub fn update_status(
        &mut self,
        id: &ReservationId,
        target: ReservationStatus,
    ) -> Result<Reservation> {
        let mut reservation = self.get(id)?;
        let from = reservation.status();

        if let Err(e) = reservation.transition_to(target, (self.now)()) {
            log::warn!("rejected status change for {id}: {e}");
            return Err(e);
        }
        self.repository.update(&reservation)?;

        log::info!("reservation {id}: {from} -> {target}");
        Ok(reservation)
    }

    /// Records the child's arrival.
    ///
    /// # Errors
    ///
    /// Same as [`ReservationService::update_status`].
    pub fn check_in(&mut self, id: &ReservationId) -> Result<Reservation> {
        self.update_status(id, ReservationStatus::CheckedIn)
    }

    /// Records the child's departure.
    ///
    /// # Errors
    ///
    /// Same as [`ReservationService::update_status`].
    pub fn check_out(&mut self, id: &ReservationId) -> Result<Reservation> {
        self.update_status(id, ReservationStatus::CheckedOut)
    }

    /// Cancels a pending or confirmed reservation.
    ///
    /// # Errors
    ///
    /// Same as [`ReservationService::update_status`].
    pub fn cancel(&mut self, id: &ReservationId) -> Result<Reservation> {
        self.update_status(id, ReservationStatus::Cancelled)
    }

    /// Applies [`ReservationService::update_status`] to each id.
    ///
    /// Failures are collected per id; one rejected change does not stop the
    /// rest.
    pub fn bulk_update_status<'a, I>(&mut self, ids: I, target: ReservationStatus) -> BulkOutcome
    where
        I: IntoIterator<Item = &'a ReservationId>,
    {
        let mut outcome = BulkOutcome::default();
        for id in ids {
            match self.update_status(id, target) {
                Ok(reservation) => outcome.updated.push(reservation),
                Err(e) => outcome.failed.push((id.clone(), e)),
            }
        }
        log::info!(
            "bulk status change to {target}: {} updated, {} failed",
            outcome.updated.len(),
            outcome.failed.len()
        );
        outcome
    }
}
