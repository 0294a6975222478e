//! Property-based tests for the query layer.

use super::*;
use crate::reservation::{
    ChildRef, ParentRef, Reservation, ReservationId, ReservationStatus, ReservationType, TimeSlot,
};
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ReservationStatus::ALL.to_vec())
}

fn kind_strategy() -> impl Strategy<Value = ReservationType> {
    prop::sample::select(ReservationType::ALL.to_vec())
}

// Builds a valid record; check-in timestamps follow the status.
fn reservation_strategy() -> impl Strategy<Value = (String, String, ReservationStatus, ReservationType, u32, u32)> {
    (
        "[A-Za-z]{1,8}",
        "[A-Za-z]{1,8}",
        status_strategy(),
        kind_strategy(),
        1u32..=28,
        8u32..=16,
    )
}

fn build(
    index: usize,
    (child, parent, status, kind, day, hour): (String, String, ReservationStatus, ReservationType, u32, u32),
) -> Reservation {
    let slot = TimeSlot::new(
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
    )
    .unwrap();
    let created = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
    let checked_in = status.has_checked_in().then_some(created);
    let checked_out = (status == ReservationStatus::CheckedOut).then_some(created);

    Reservation::builder(
        ReservationId::new(format!("r-{index:03}")).unwrap(),
        slot,
        ChildRef::new(format!("c-{index}"), child),
        ParentRef::new(format!("p-{index}"), parent),
    )
    .status(status)
    .kind(kind)
    .created_at(created)
    .checked_in_at(checked_in)
    .checked_out_at(checked_out)
    .build()
    .unwrap()
}

fn records_strategy() -> impl Strategy<Value = Vec<Reservation>> {
    prop::collection::vec(reservation_strategy(), 0..30).prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, r)| build(i, r))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 500,
        .. ProptestConfig::default()
    })]

    // An empty filter returns every record in input order
    #[test]
    fn empty_filter_is_identity(records in records_strategy()) {
        let filtered = filter_reservations(&records, &ReservationFilter::new());
        prop_assert_eq!(filtered.len(), records.len());
        for (a, b) in filtered.iter().zip(records.iter()) {
            prop_assert_eq!(a.id(), b.id());
        }
    }

    // Every kept record has a selected status, and none with one is dropped
    #[test]
    fn status_filter_is_sound_and_complete(
        records in records_strategy(),
        statuses in prop::collection::vec(status_strategy(), 1..3),
    ) {
        let filter = ReservationFilter::new().with_statuses(statuses.clone());
        let filtered = filter.apply(&records);

        for r in &filtered {
            prop_assert!(statuses.contains(&r.status()));
        }
        let expected = records.iter().filter(|r| statuses.contains(&r.status())).count();
        prop_assert_eq!(filtered.len(), expected);
    }

    // Search ignores the case of the query
    #[test]
    fn search_ignores_case(records in records_strategy(), query in "[A-Za-z]{1,3}") {
        let upper = ReservationFilter::new().with_search(query.to_uppercase()).apply(&records);
        let lower = ReservationFilter::new().with_search(query.to_lowercase()).apply(&records);
        prop_assert_eq!(upper, lower);
    }

    // Ascending child-name order is non-decreasing under locale_compare
    #[test]
    fn child_name_sort_is_monotonic(records in records_strategy()) {
        let refs: Vec<&Reservation> = records.iter().collect();
        let sorted = sort_reservations(&refs, SortSpec::asc(SortKey::ChildName));
        for pair in sorted.windows(2) {
            prop_assert_ne!(
                locale_compare(&pair[0].child().name, &pair[1].child().name),
                std::cmp::Ordering::Greater
            );
        }
    }

    // Descending equals reversed ascending when keys are distinct
    #[test]
    fn descending_reverses_distinct_keys(records in records_strategy()) {
        let mut names: Vec<&str> = records.iter().map(|r| r.child().name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assume!(names.len() == records.len());

        let refs: Vec<&Reservation> = records.iter().collect();
        let asc = sort_reservations(&refs, SortSpec::asc(SortKey::ChildName));
        let mut desc = sort_reservations(&refs, SortSpec::desc(SortKey::ChildName));
        desc.reverse();
        prop_assert_eq!(asc, desc);
    }

    // Toggling the same id twice restores the selection
    #[test]
    fn toggle_twice_is_identity(
        initial in prop::collection::btree_set("r-[0-9]{3}", 0..10),
        id in "r-[0-9]{3}",
    ) {
        let mut selection = Selection::new();
        for raw in &initial {
            selection.toggle(&ReservationId::new(raw).unwrap());
        }
        let before = selection.clone();
        let id = ReservationId::new(id).unwrap();
        selection.toggle(&id);
        selection.toggle(&id);
        prop_assert_eq!(selection, before);
    }

    // select_all after filtering selects exactly the visible ids
    #[test]
    fn select_all_matches_visible(records in records_strategy(), kind in kind_strategy()) {
        let mut view = ReservationView::new(records);
        view.set_filter(ReservationFilter::new().with_kinds([kind]));
        view.select_all();

        let visible: Vec<ReservationId> = view.visible().iter().map(|r| r.id().clone()).collect();
        prop_assert_eq!(view.selection().len(), visible.len());
        for id in &visible {
            prop_assert!(view.selection().contains(id));
        }
    }
}
