//! Filter stage: narrows a reservation collection by date, status, type and
//! free-text search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::reservation::{Reservation, ReservationStatus, ReservationType};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day kept.
    pub start: NaiveDate,
    /// Last day kept.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range. A range whose start is after its end matches nothing.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    /// Returns true if `date` lies within the range, both ends included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        // NaiveDate orders exactly like its zero-padded YYYY-MM-DD form.
        self.start <= date && date <= self.end
    }
}

/// Filter specification for reservations.
///
/// Criteria combine with AND; values inside a multi-value criterion combine
/// with OR. An empty criterion does not filter.
///
/// # Examples
///
/// ```
/// use hoiku::query::ReservationFilter;
/// use hoiku::{ReservationStatus, ReservationType};
///
/// let filter = ReservationFilter::new()
///     .with_statuses([ReservationStatus::Confirmed])
///     .with_kinds([ReservationType::TemporaryCare])
///     .with_search("yamada");
/// assert!(!filter.is_empty());
/// assert!(ReservationFilter::new().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationFilter {
    /// Keep reservations whose day falls in this range.
    #[serde(default)]
    pub date_range: Option<DateRange>,
    /// Keep reservations with one of these statuses.
    #[serde(default)]
    pub statuses: Vec<ReservationStatus>,
    /// Keep reservations with one of these types.
    #[serde(default)]
    pub kinds: Vec<ReservationType>,
    /// Case-insensitive text matched against child and parent details.
    #[serde(default)]
    pub search_query: Option<String>,
}

impl ReservationFilter {
    /// Creates a filter with no active criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a date range.
    #[must_use]
    pub const fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    /// Restricts to a set of statuses.
    #[must_use]
    pub fn with_statuses(mut self, statuses: impl IntoIterator<Item = ReservationStatus>) -> Self {
        self.statuses = statuses.into_iter().collect();
        self
    }

    /// Restricts to a set of types.
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = ReservationType>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Restricts to records matching a search query.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Returns the normalized search needle, if the search is active.
    fn needle(&self) -> Option<String> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Returns true if no criterion is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.date_range.is_none()
            && self.statuses.is_empty()
            && self.kinds.is_empty()
            && self.needle().is_none()
    }

    /// Returns true if `reservation` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.matches_with_needle(reservation, self.needle().as_deref())
    }

    fn matches_with_needle(&self, reservation: &Reservation, needle: Option<&str>) -> bool {
        if let Some(range) = self.date_range {
            if !range.contains(reservation.date()) {
                return false;
            }
        }

        if !self.statuses.is_empty() && !self.statuses.contains(&reservation.status()) {
            return false;
        }

        if !self.kinds.is_empty() && !self.kinds.contains(&reservation.kind()) {
            return false;
        }

        needle.map_or(true, |needle| matches_search(reservation, needle))
    }

    /// Applies the filter, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [Reservation]) -> Vec<&'a Reservation> {
        let needle = self.needle();
        records
            .iter()
            .filter(|r| self.matches_with_needle(r, needle.as_deref()))
            .collect()
    }
}

/// `needle` must already be lowercased.
fn matches_search(reservation: &Reservation, needle: &str) -> bool {
    let child = reservation.child();
    let parent = reservation.parent();

    [
        Some(child.name.as_str()),
        Some(parent.name.as_str()),
        parent.phone.as_deref(),
        parent.email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the records matching `filter`, in their original order.
///
/// An empty filter returns every record unchanged.
#[must_use]
pub fn filter_reservations<'a>(
    records: &'a [Reservation],
    filter: &ReservationFilter,
) -> Vec<&'a Reservation> {
    filter.apply(records)
}
