//! Reservation CRUD against the database.

use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row, TransactionBehavior};

use crate::error::{Error, Result};
use crate::reservation::{ChildRef, ParentRef, Reservation, ReservationId, TimeSlot};

use super::connection::Database;
use super::schema::{
    DELETE_RESERVATION, INSERT_RESERVATION, LIST_RESERVATIONS, SELECT_RESERVATION,
    UPDATE_RESERVATION,
};

fn conversion_error<E>(err: E) -> rusqlite::Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(conversion_error)
}

fn parse_date(raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(conversion_error)
}

fn parse_time(raw: &str) -> rusqlite::Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").map_err(conversion_error)
}

/// Column values of one reservation row, owned so they can be bound.
struct EncodedRow {
    id: String,
    date: String,
    start_time: String,
    end_time: String,
    status: &'static str,
    kind: &'static str,
    allergies: String,
    created_at: String,
    updated_at: String,
    checked_in_at: Option<String>,
    checked_out_at: Option<String>,
    birth_date: Option<String>,
}

impl EncodedRow {
    fn new(reservation: &Reservation) -> Result<Self> {
        let slot = reservation.slot();
        Ok(Self {
            id: reservation.id().to_string(),
            date: slot.date_key(),
            start_time: slot.start_time.format("%H:%M").to_string(),
            end_time: slot.end_time.format("%H:%M").to_string(),
            status: reservation.status().as_str(),
            kind: reservation.kind().slug(),
            allergies: serde_json::to_string(reservation.allergies())?,
            created_at: format_timestamp(reservation.created_at()),
            updated_at: format_timestamp(reservation.updated_at()),
            checked_in_at: reservation.checked_in_at().map(format_timestamp),
            checked_out_at: reservation.checked_out_at().map(format_timestamp),
            birth_date: reservation
                .child()
                .birth_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
        })
    }

    /// Runs `sql` with the row bound to `?1`..`?22` in column order.
    fn execute(
        &self,
        conn: &Connection,
        sql: &str,
        reservation: &Reservation,
    ) -> rusqlite::Result<usize> {
        let child = reservation.child();
        let parent = reservation.parent();
        conn.execute(
            sql,
            params![
                self.id,
                self.date,
                self.start_time,
                self.end_time,
                child.id,
                child.name,
                child.age,
                self.birth_date,
                parent.id,
                parent.name,
                parent.phone,
                parent.email,
                self.status,
                self.kind,
                self.allergies,
                reservation.medical_notes(),
                reservation.special_requests(),
                reservation.notes(),
                self.created_at,
                self.updated_at,
                self.checked_in_at,
                self.checked_out_at,
            ],
        )
    }
}

/// Decodes a row selected with the shared column list.
fn row_to_reservation(row: &Row<'_>) -> rusqlite::Result<Reservation> {
    let id = ReservationId::new(row.get::<_, String>(0)?).map_err(conversion_error)?;
    let slot = TimeSlot::new(
        parse_date(&row.get::<_, String>(1)?)?,
        parse_time(&row.get::<_, String>(2)?)?,
        parse_time(&row.get::<_, String>(3)?)?,
    )
    .map_err(conversion_error)?;

    let child = ChildRef {
        id: row.get(4)?,
        name: row.get(5)?,
        age: row.get(6)?,
        birth_date: row
            .get::<_, Option<String>>(7)?
            .as_deref()
            .map(parse_date)
            .transpose()?,
    };
    let parent = ParentRef {
        id: row.get(8)?,
        name: row.get(9)?,
        phone: row.get(10)?,
        email: row.get(11)?,
    };

    let status = row.get::<_, String>(12)?.parse().map_err(conversion_error)?;
    let kind = row.get::<_, String>(13)?.parse().map_err(conversion_error)?;
    let allergies: Vec<String> =
        serde_json::from_str(&row.get::<_, String>(14)?).map_err(conversion_error)?;

    let checked_in_at = row
        .get::<_, Option<String>>(20)?
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;
    let checked_out_at = row
        .get::<_, Option<String>>(21)?
        .as_deref()
        .map(parse_timestamp)
        .transpose()?;

    Reservation::builder(id, slot, child, parent)
        .status(status)
        .kind(kind)
        .allergies(allergies)
        .medical_notes(row.get(15)?)
        .special_requests(row.get(16)?)
        .notes(row.get(17)?)
        .created_at(parse_timestamp(&row.get::<_, String>(18)?)?)
        .updated_at(parse_timestamp(&row.get::<_, String>(19)?)?)
        .checked_in_at(checked_in_at)
        .checked_out_at(checked_out_at)
        .build()
        .map_err(conversion_error)
}

impl Database {
    /// Inserts a new reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateReservation`] if the id is already stored,
    /// or a database error if the insert fails.
    pub fn insert_reservation(&mut self, reservation: &Reservation) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        Self::insert_reservation_simple(&tx, reservation)?;
        tx.commit()?;
        Ok(())
    }

    /// Inserts using an existing connection or transaction.
    ///
    /// # Errors
    ///
    /// Same as [`Database::insert_reservation`].
    pub fn insert_reservation_simple(conn: &Connection, reservation: &Reservation) -> Result<()> {
        let encoded = EncodedRow::new(reservation)?;
        match encoded.execute(conn, INSERT_RESERVATION, reservation) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(Error::DuplicateReservation {
                    id: reservation.id().to_string(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrites a stored reservation.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if a row with the id existed and was rewritten
    /// - `Ok(false)` if no row has the id
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_reservation(&mut self, reservation: &Reservation) -> Result<bool> {
        let encoded = EncodedRow::new(reservation)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_affected = encoded.execute(&tx, UPDATE_RESERVATION, reservation)?;
        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Deletes a reservation.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a row was deleted, `Ok(false)` if none had the id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation(&mut self, id: &ReservationId) -> Result<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let rows_affected = tx.execute(DELETE_RESERVATION, [id.as_str()])?;
        tx.commit()?;
        Ok(rows_affected > 0)
    }

    /// Loads one reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is invalid.
    pub fn get_reservation(conn: &Connection, id: &ReservationId) -> Result<Option<Reservation>> {
        let mut stmt = conn.prepare(SELECT_RESERVATION)?;
        Ok(stmt
            .query_row([id.as_str()], row_to_reservation)
            .optional()?)
    }

    /// Loads every reservation in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or any stored row is invalid.
    pub fn list_all_reservations(conn: &Connection) -> Result<Vec<Reservation>> {
        let mut stmt = conn.prepare(LIST_RESERVATIONS)?;
        let reservations = stmt
            .query_map([], row_to_reservation)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;
        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, sample_reservation};
    use crate::reservation::{ReservationStatus, ReservationType};
    use chrono::TimeZone;

    #[test]
    fn test_insert_and_get() {
        let mut db = create_test_database();
        let reservation = sample_reservation("r-001");
        db.insert_reservation(&reservation).unwrap();

        let loaded = Database::get_reservation(db.connection(), reservation.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded, reservation);
    }

    #[test]
    fn test_get_missing_is_none() {
        let db = create_test_database();
        let id = ReservationId::new("r-404").unwrap();
        assert!(Database::get_reservation(db.connection(), &id)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_insert_duplicate_is_rejected() {
        let mut db = create_test_database();
        let reservation = sample_reservation("r-001");
        db.insert_reservation(&reservation).unwrap();

        let err = db.insert_reservation(&reservation).unwrap_err();
        assert!(matches!(err, Error::DuplicateReservation { ref id } if id == "r-001"));
    }

    #[test]
    fn test_round_trip_keeps_every_field() {
        let mut db = create_test_database();
        for reservation in crate::sample::sample_reservations() {
            db.insert_reservation(&reservation).unwrap();
            let loaded = Database::get_reservation(db.connection(), reservation.id())
                .unwrap()
                .unwrap();
            assert_eq!(loaded, reservation);
        }
    }

    #[test]
    fn test_update_rewrites_row() {
        let mut db = create_test_database();
        let mut reservation = sample_reservation("r-001");
        db.insert_reservation(&reservation).unwrap();

        let at = Utc.with_ymd_and_hms(2024, 1, 15, 0, 5, 0).unwrap();
        reservation
            .transition_to(ReservationStatus::CheckedIn, at)
            .unwrap();
        assert!(db.update_reservation(&reservation).unwrap());

        let loaded = Database::get_reservation(db.connection(), reservation.id())
            .unwrap()
            .unwrap();
        assert_eq!(loaded.status(), ReservationStatus::CheckedIn);
        assert_eq!(loaded.checked_in_at(), Some(at));
    }

    #[test]
    fn test_update_missing_returns_false() {
        let mut db = create_test_database();
        assert!(!db.update_reservation(&sample_reservation("r-404")).unwrap());
    }

    #[test]
    fn test_delete() {
        let mut db = create_test_database();
        let reservation = sample_reservation("r-001");
        db.insert_reservation(&reservation).unwrap();

        assert!(db.delete_reservation(reservation.id()).unwrap());
        assert!(!db.delete_reservation(reservation.id()).unwrap());
        assert!(Database::list_all_reservations(db.connection())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let mut db = create_test_database();
        for id in ["r-010", "r-002", "r-007"] {
            db.insert_reservation(&sample_reservation(id)).unwrap();
        }
        let ids: Vec<String> = Database::list_all_reservations(db.connection())
            .unwrap()
            .iter()
            .map(|r| r.id().to_string())
            .collect();
        assert_eq!(ids, ["r-010", "r-002", "r-007"]);
    }

    #[test]
    fn test_type_is_stored_as_slug() {
        let mut db = create_test_database();
        db.insert_reservation(&sample_reservation("r-001")).unwrap();
        let stored: String = db
            .connection()
            .query_row("SELECT type FROM reservations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(stored, ReservationType::TemporaryCare.slug());
    }
}
