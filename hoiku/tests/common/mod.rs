//! Shared fixtures for the integration tests.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use hoiku::database::{Database, DatabaseConfig};
use hoiku::{
    ChildRef, ParentRef, Reservation, ReservationId, ReservationStatus, ReservationType, TimeSlot,
};

/// Opens a database in a temporary directory that outlives the test.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let db = Database::open(DatabaseConfig::new(dir.path().join("test.db"))).unwrap();
    std::mem::forget(dir);
    db
}

/// Builder for reservations with sensible defaults.
///
/// Defaults: pending 一時預かり on 2024-01-15 09:00-17:00, created
/// 2024-01-10T00:00Z.
#[allow(dead_code)]
pub struct ReservationFixture {
    id: String,
    date: NaiveDate,
    start: (u32, u32),
    end: (u32, u32),
    child: String,
    parent: String,
    status: ReservationStatus,
    kind: ReservationType,
    created_at: DateTime<Utc>,
}

#[allow(dead_code)]
impl ReservationFixture {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            start: (9, 0),
            end: (17, 0),
            child: format!("child {id}"),
            parent: format!("parent {id}"),
            status: ReservationStatus::Pending,
            kind: ReservationType::TemporaryCare,
            created_at: Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap(),
        }
    }

    pub fn on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn from_to(mut self, start: (u32, u32), end: (u32, u32)) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn child(mut self, name: &str) -> Self {
        self.child = name.to_string();
        self
    }

    pub fn parent(mut self, name: &str) -> Self {
        self.parent = name.to_string();
        self
    }

    pub fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn kind(mut self, kind: ReservationType) -> Self {
        self.kind = kind;
        self
    }

    pub fn created_minutes_later(mut self, minutes: i64) -> Self {
        self.created_at += Duration::minutes(minutes);
        self
    }

    pub fn build(self) -> Reservation {
        let slot = TimeSlot::new(
            self.date,
            NaiveTime::from_hms_opt(self.start.0, self.start.1, 0).unwrap(),
            NaiveTime::from_hms_opt(self.end.0, self.end.1, 0).unwrap(),
        )
        .unwrap();

        let checked_in_at = self.status.has_checked_in().then_some(self.created_at);
        let checked_out_at =
            (self.status == ReservationStatus::CheckedOut).then_some(self.created_at);

        Reservation::builder(
            ReservationId::new(&self.id).unwrap(),
            slot,
            ChildRef::new(format!("c-{}", self.id), self.child),
            ParentRef::new(format!("p-{}", self.id), self.parent),
        )
        .status(self.status)
        .kind(self.kind)
        .created_at(self.created_at)
        .checked_in_at(checked_in_at)
        .checked_out_at(checked_out_at)
        .build()
        .unwrap()
    }
}

/// Returns the ids of `records`, in order.
#[allow(dead_code)]
pub fn ids<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Reservation>,
{
    records
        .into_iter()
        .map(|r| r.id().as_str().to_string())
        .collect()
}
