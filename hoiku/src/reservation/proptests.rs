//! Property-based tests for reservation types.

use super::*;
use chrono::{Duration, TimeZone};
use proptest::prelude::*;

fn status_strategy() -> impl Strategy<Value = ReservationStatus> {
    prop::sample::select(ReservationStatus::ALL.to_vec())
}

fn kind_strategy() -> impl Strategy<Value = ReservationType> {
    prop::sample::select(ReservationType::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // A slot is valid exactly when start precedes end
    #[test]
    fn slot_requires_start_before_end(start in 0u32..86_400, end in 0u32..86_400) {
        let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let start_time = NaiveTime::from_num_seconds_from_midnight_opt(start, 0).unwrap();
        let end_time = NaiveTime::from_num_seconds_from_midnight_opt(end, 0).unwrap();
        prop_assert_eq!(TimeSlot::new(day, start_time, end_time).is_ok(), start < end);
    }

    // Ids are trimmed, and never empty
    #[test]
    fn id_is_trimmed(raw in "\\s{0,3}[a-z0-9-]{1,12}\\s{0,3}") {
        let id = ReservationId::new(&raw).unwrap();
        prop_assert_eq!(id.as_str(), raw.trim());
    }

    // transition succeeds exactly when the table allows it
    #[test]
    fn transition_agrees_with_table(from in status_strategy(), to in status_strategy()) {
        prop_assert_eq!(from.transition(to).is_ok(), from.can_transition_to(to));
        if from == to {
            prop_assert!(from.transition(to).is_err());
        }
        if from.is_terminal() {
            prop_assert!(from.transition(to).is_err());
        }
    }

    // A failed transition leaves the record exactly as it was
    #[test]
    fn failed_transition_is_a_no_op(to in status_strategy(), minutes in 0i64..600) {
        let slot = TimeSlot::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        )
        .unwrap();
        let created = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
        let mut record = Reservation::builder(
            ReservationId::new("r-001").unwrap(),
            slot,
            ChildRef::new("c-1", "child"),
            ParentRef::new("p-1", "parent"),
        )
        .created_at(created)
        .build()
        .unwrap();

        let before = record.clone();
        let result = record.transition_to(to, created + Duration::minutes(minutes));
        if result.is_err() {
            prop_assert_eq!(record, before);
        } else {
            prop_assert_eq!(record.status(), to);
        }
    }

    // Labels and slugs both parse back to the same type
    #[test]
    fn kind_parses_from_label_and_slug(kind in kind_strategy()) {
        prop_assert_eq!(kind.label().parse::<ReservationType>().unwrap(), kind);
        prop_assert_eq!(kind.slug().parse::<ReservationType>().unwrap(), kind);
    }

    // Display output parses back for every status
    #[test]
    fn status_display_parses(status in status_strategy()) {
        prop_assert_eq!(status.to_string().parse::<ReservationStatus>().unwrap(), status);
    }
}
