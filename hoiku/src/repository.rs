//! Storage boundary for reservations.
//!
//! The query layer and the service only see [`ReservationRepository`]; the
//! data may come from the bundled sample set, an in-memory store, or the
//! SQLite database.

mod memory;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, ReservationId};

pub use memory::MemoryRepository;

/// The SQLite store; [`Database`] implements the trait directly.
pub type SqliteRepository = Database;

/// Reservation storage.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationRepository {
    /// Returns every reservation in store order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn list(&self) -> Result<Vec<Reservation>>;

    /// Returns one reservation, or `None` if the id is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn get(&self, id: &ReservationId) -> Result<Option<Reservation>>;

    /// Adds a new reservation at the end of the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReservation`] if the id is taken.
    fn insert(&mut self, reservation: Reservation) -> Result<()>;

    /// Replaces the stored reservation with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no reservation has the id.
    fn update(&mut self, reservation: &Reservation) -> Result<()>;

    /// Removes a reservation, returning whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete(&mut self, id: &ReservationId) -> Result<bool>;
}

pub(crate) fn not_found(id: &ReservationId) -> Error {
    Error::NotFound {
        resource: format!("reservation {id}"),
    }
}

impl ReservationRepository for Database {
    fn list(&self) -> Result<Vec<Reservation>> {
        Self::list_all_reservations(self.connection())
    }

    fn get(&self, id: &ReservationId) -> Result<Option<Reservation>> {
        Self::get_reservation(self.connection(), id)
    }

    fn insert(&mut self, reservation: Reservation) -> Result<()> {
        self.insert_reservation(&reservation)
    }

    fn update(&mut self, reservation: &Reservation) -> Result<()> {
        if self.update_reservation(reservation)? {
            Ok(())
        } else {
            Err(not_found(reservation.id()))
        }
    }

    fn delete(&mut self, id: &ReservationId) -> Result<bool> {
        self.delete_reservation(id)
    }
}
