//! Count aggregation over a reservation view.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::reservation::{Reservation, ReservationStatus, ReservationType};

/// Per-status and per-type counts.
///
/// Only values that occur in the input appear as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReservationStats {
    /// Count per status.
    pub by_status: BTreeMap<ReservationStatus, usize>,
    /// Count per type.
    pub by_type: BTreeMap<ReservationType, usize>,
}

impl ReservationStats {
    /// Counts `records` by status and by type.
    #[must_use]
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut stats = Self::default();
        for record in records {
            *stats.by_status.entry(record.status()).or_insert(0) += 1;
            *stats.by_type.entry(record.kind()).or_insert(0) += 1;
        }
        stats
    }

    /// Number of records counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_status.values().sum()
    }

    /// Count for one status, zero when absent.
    #[must_use]
    pub fn count_status(&self, status: ReservationStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or(0)
    }

    /// Count for one type, zero when absent.
    #[must_use]
    pub fn count_type(&self, kind: ReservationType) -> usize {
        self.by_type.get(&kind).copied().unwrap_or(0)
    }
}

/// Header figures for the staff dashboard on a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Reservations dated today, any status.
    pub today_total: usize,
    /// Pending reservations dated today or later.
    pub pending: usize,
    /// Children currently checked in today.
    pub checked_in: usize,
    /// Reservations dated today that were cancelled.
    pub cancelled_today: usize,
    /// Distinct children with a live reservation today.
    pub children_today: usize,
}

impl DashboardStats {
    /// Computes the dashboard figures for `today`.
    #[must_use]
    pub fn compute<'a, I>(records: I, today: NaiveDate) -> Self
    where
        I: IntoIterator<Item = &'a Reservation>,
    {
        let mut stats = Self::default();
        let mut children = BTreeSet::new();

        for record in records {
            let status = record.status();
            if status == ReservationStatus::Pending && record.date() >= today {
                stats.pending += 1;
            }
            if record.date() != today {
                continue;
            }

            stats.today_total += 1;
            match status {
                ReservationStatus::CheckedIn => stats.checked_in += 1,
                ReservationStatus::Cancelled => stats.cancelled_today += 1,
                _ => {}
            }
            if status != ReservationStatus::Cancelled {
                children.insert(record.child().id.as_str());
            }
        }

        stats.children_today = children.len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::ReservationFilter;
    use crate::sample::sample_reservations;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_counts_cover_every_record() {
        let records = sample_reservations();
        let stats = ReservationStats::from_records(&records);
        assert_eq!(stats.total(), records.len());
        assert_eq!(stats.count_status(ReservationStatus::Confirmed), 2);
        assert_eq!(stats.count_type(ReservationType::TemporaryCare), 2);
        assert_eq!(stats.by_type.values().sum::<usize>(), records.len());
    }

    #[test]
    fn test_absent_keys_are_omitted() {
        let records = sample_reservations();
        let visible = ReservationFilter::new()
            .with_statuses([ReservationStatus::Pending])
            .apply(&records);
        let stats = ReservationStats::from_records(visible.iter().copied());

        assert_eq!(stats.by_status.len(), 1);
        assert!(!stats.by_status.contains_key(&ReservationStatus::CheckedOut));
        assert_eq!(stats.count_status(ReservationStatus::CheckedOut), 0);
    }

    #[test]
    fn test_empty_input() {
        let stats = ReservationStats::from_records(std::iter::empty());
        assert_eq!(stats.total(), 0);
        assert!(stats.by_status.is_empty());
        assert!(stats.by_type.is_empty());
    }

    #[test]
    fn test_dashboard_for_a_day() {
        let records = sample_reservations();

        let monday = DashboardStats::compute(&records, day(15));
        assert_eq!(monday.today_total, 2);
        assert_eq!(monday.pending, 1);
        assert_eq!(monday.checked_in, 0);
        assert_eq!(monday.children_today, 2);

        let tuesday = DashboardStats::compute(&records, day(16));
        assert_eq!(tuesday.today_total, 2);
        assert_eq!(tuesday.cancelled_today, 1);
        assert_eq!(tuesday.children_today, 1);
        assert_eq!(tuesday.pending, 0);

        let wednesday = DashboardStats::compute(&records, day(17));
        assert_eq!(wednesday.checked_in, 1);
    }

    #[test]
    fn test_serializes_status_keys_in_snake_case() {
        let records = sample_reservations();
        let stats = ReservationStats::from_records(&records);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["by_status"]["checked_in"], 1);
        assert_eq!(json["by_type"]["一時預かり"], 2);
    }
}
