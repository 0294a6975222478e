//! In-memory reservation store.

use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};

use super::{not_found, ReservationRepository};

/// Insertion-ordered store held in a `Vec`.
///
/// # Examples
///
/// ```
/// use hoiku::repository::{MemoryRepository, ReservationRepository};
/// use hoiku::sample::sample_reservations;
///
/// let repo = MemoryRepository::with_records(sample_reservations()).unwrap();
/// assert_eq!(repo.list().unwrap().len(), 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    records: Vec<Reservation>,
}

impl MemoryRepository {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `records`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReservation`] if two records share an id.
    pub fn with_records(records: impl IntoIterator<Item = Reservation>) -> Result<Self> {
        let mut repo = Self::new();
        for record in records {
            repo.insert(record)?;
        }
        Ok(repo)
    }

    /// Number of stored reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, id: &ReservationId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

impl ReservationRepository for MemoryRepository {
    fn list(&self) -> Result<Vec<Reservation>> {
        Ok(self.records.clone())
    }

    fn get(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Ok(self.position(id).map(|i| self.records[i].clone()))
    }

    fn insert(&mut self, reservation: Reservation) -> Result<()> {
        if self.position(reservation.id()).is_some() {
            return Err(Error::DuplicateReservation {
                id: reservation.id().to_string(),
            });
        }
        self.records.push(reservation);
        Ok(())
    }

    fn update(&mut self, reservation: &Reservation) -> Result<()> {
        let index = self
            .position(reservation.id())
            .ok_or_else(|| not_found(reservation.id()))?;
        self.records[index] = reservation.clone();
        Ok(())
    }

    fn delete(&mut self, id: &ReservationId) -> Result<bool> {
        Ok(self
            .position(id)
            .map(|i| self.records.remove(i))
            .is_some())
    }
}
