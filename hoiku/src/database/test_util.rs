//! Shared helpers for database unit tests.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::{
    ChildRef, ParentRef, Reservation, ReservationId, ReservationStatus, ReservationType, TimeSlot,
};

/// Opens a database in a temporary directory that outlives the test.
///
/// # Panics
///
/// Panics if the directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the connection's lifetime.
    std::mem::forget(dir);

    db
}

/// Builds a confirmed temporary-care reservation with the given id.
///
/// # Panics
///
/// Panics if the fixture fails validation.
#[must_use]
pub fn sample_reservation(id: &str) -> Reservation {
    let slot = TimeSlot::new(
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    )
    .unwrap();

    let mut child = ChildRef::new("c-001", "山田 太郎");
    child.age = Some(3);
    let mut parent = ParentRef::new("p-001", "山田 花子");
    parent.phone = Some("090-1234-5678".into());

    Reservation::builder(ReservationId::new(id).unwrap(), slot, child, parent)
        .status(ReservationStatus::Confirmed)
        .kind(ReservationType::TemporaryCare)
        .allergies(["卵", "小麦"])
        .medical_notes(Some("喘息の既往あり".into()))
        .created_at(Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap())
        .build()
        .unwrap()
}
