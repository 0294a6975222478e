//! Multi-row operations that run in a single transaction.

use rusqlite::TransactionBehavior;

use crate::error::Result;
use crate::reservation::Reservation;

use super::connection::Database;
use super::schema::DELETE_ALL_RESERVATIONS;

impl Database {
    /// Inserts every reservation, or none of them.
    ///
    /// # Errors
    ///
    /// Returns the first insert error, such as
    /// [`crate::Error::DuplicateReservation`]; the transaction is rolled back.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hoiku::database::{Database, DatabaseConfig};
    /// use hoiku::sample::sample_reservations;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/hoiku.db")).unwrap();
    /// db.insert_many(&sample_reservations()).unwrap();
    /// ```
    pub fn insert_many(&mut self, reservations: &[Reservation]) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        for reservation in reservations {
            Self::insert_reservation_simple(&tx, reservation)?;
        }
        tx.commit()?;
        log::debug!("inserted {} reservations", reservations.len());
        Ok(())
    }

    /// Replaces the whole store with `reservations`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete or any insert fails; the previous
    /// contents are kept in that case.
    pub fn replace_all(&mut self, reservations: &[Reservation]) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let removed = tx.execute(DELETE_ALL_RESERVATIONS, [])?;
        for reservation in reservations {
            Self::insert_reservation_simple(&tx, reservation)?;
        }
        tx.commit()?;
        log::debug!(
            "replaced {removed} reservations with {}",
            reservations.len()
        );
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use crate::database::test_util::{create_test_database, sample_reservation};
    use crate::database::Database;
    use crate::sample::sample_reservations;
    use crate::Error;

    #[test]
    fn test_insert_many() {
        let mut db = create_test_database();
        let records = sample_reservations();
        db.insert_many(&records).unwrap();
        assert_eq!(
            Database::list_all_reservations(db.connection()).unwrap(),
            records
        );
    }

    #[test]
    fn test_insert_many_is_atomic() {
        let mut db = create_test_database();
        let batch = vec![
            sample_reservation("r-100"),
            sample_reservation("r-101"),
            sample_reservation("r-100"),
        ];
        let err = db.insert_many(&batch).unwrap_err();
        assert!(matches!(err, Error::DuplicateReservation { .. }));
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_replace_all() {
        let mut db = create_test_database();
        db.insert_many(&[sample_reservation("r-100")]).unwrap();

        let removed = db.replace_all(&sample_reservations()).unwrap();
        assert_eq!(removed, 1);
        assert_eq!(
            Database::list_all_reservations(db.connection()).unwrap().len(),
            5
        );
    }
}
