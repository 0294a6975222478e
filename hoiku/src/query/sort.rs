//! Sort stage: orders reservations by one key, ascending or descending.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::reservation::Reservation;

/// Field a reservation list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Day and start time together.
    #[default]
    DateTime,
    /// Child display name.
    ChildName,
    /// Parent display name.
    ParentName,
    /// Lifecycle status.
    Status,
    /// Reservation type.
    Type,
    /// Creation timestamp.
    CreatedAt,
}

impl SortKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::DateTime,
        Self::ChildName,
        Self::ParentName,
        Self::Status,
        Self::Type,
        Self::CreatedAt,
    ];

    /// Returns the configuration name of the key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateTime => "date_time",
            Self::ChildName => "child_name",
            Self::ParentName => "parent_name",
            Self::Status => "status",
            Self::Type => "type",
            Self::CreatedAt => "created_at",
        }
    }

    /// Projects a reservation onto the string this key compares.
    fn project(self, reservation: &Reservation) -> Cow<'_, str> {
        match self {
            Self::DateTime => Cow::Owned(reservation.slot().start_key()),
            Self::ChildName => Cow::Borrowed(reservation.child().name.as_str()),
            Self::ParentName => Cow::Borrowed(reservation.parent().name.as_str()),
            Self::Status => Cow::Borrowed(reservation.status().as_str()),
            Self::Type => Cow::Borrowed(reservation.kind().label()),
            // Fixed-width UTC form so string order is chronological.
            Self::CreatedAt => Cow::Owned(
                reservation
                    .created_at()
                    .to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| Error::Validation {
                field: "sort".into(),
                message: format!(
                    "unknown sort key '{s}' (expected one of: date_time, child_name, parent_name, status, type, created_at)"
                ),
            })
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Applies the direction to an ascending comparison result.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            _ => Err(Error::Validation {
                field: "direction".into(),
                message: format!("unknown sort direction '{s}' (expected asc or desc)"),
            }),
        }
    }
}

/// A sort key paired with a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to order by.
    pub key: SortKey,
    /// Direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Ascending by `key`.
    #[must_use]
    pub const fn asc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    /// Descending by `key`.
    #[must_use]
    pub const fn desc(key: SortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// Compares two strings the way a human-facing list expects.
///
/// This approximates locale collation without a collation table. The
/// primary comparison folds case and maps katakana onto hiragana, so
/// `カトウ` sorts beside `かとう`. Strings equal under that folding fall
/// back to code-point order, which keeps the result a total order. Kanji
/// compare by code point, not by reading, so `佐藤` and `鈴木` are not in
/// gojūon order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use hoiku::query::locale_compare;
///
/// assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(locale_compare("Sato", "sato"), Ordering::Less);
/// assert_eq!(locale_compare("カトウ", "さとう"), Ordering::Less);
/// assert_eq!(locale_compare("佐藤", "佐藤"), Ordering::Equal);
/// ```
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .map(fold_kana)
        .cmp(b.chars().flat_map(char::to_lowercase).map(fold_kana));
    folded.then_with(|| a.cmp(b))
}

// Katakana ァ..ヶ sit exactly 0x60 above their hiragana counterparts.
fn fold_kana(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        _ => c,
    }
}

/// Returns a new vector ordered by `spec`. The input is not modified.
///
/// Descending order negates the ascending comparator. Equal keys keep their
/// input order in both directions; no secondary key is applied.
#[must_use]
pub fn sort_reservations<'a>(records: &[&'a Reservation], spec: SortSpec) -> Vec<&'a Reservation> {
    let mut keyed: Vec<(Cow<'a, str>, &'a Reservation)> = records
        .iter()
        .map(|r| (spec.key.project(*r), *r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| spec.direction.apply(locale_compare(a, b)));

    keyed.into_iter().map(|(_, r)| r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::sample_reservations;

    fn ids(records: &[&Reservation]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_default_spec_is_date_time_ascending() {
        assert_eq!(
            SortSpec::default(),
            SortSpec::new(SortKey::DateTime, SortDirection::Asc)
        );
    }

    #[test]
    fn test_sort_by_date_time() {
        let records = sample_reservations();
        let refs: Vec<&Reservation> = records.iter().rev().collect();
        let sorted = sort_reservations(&refs, SortSpec::asc(SortKey::DateTime));
        assert_eq!(ids(&sorted), ["r-001", "r-002", "r-003", "r-004", "r-005"]);
    }

    #[test]
    fn test_input_is_untouched() {
        let records = sample_reservations();
        let refs: Vec<&Reservation> = records.iter().rev().collect();
        let before = ids(&refs);
        let _ = sort_reservations(&refs, SortSpec::asc(SortKey::ChildName));
        assert_eq!(ids(&refs), before);
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let records = sample_reservations();
        let refs: Vec<&Reservation> = records.iter().collect();
        let asc = sort_reservations(&refs, SortSpec::asc(SortKey::ChildName));
        let mut desc = sort_reservations(&refs, SortSpec::desc(SortKey::ChildName));
        desc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
    }

    #[test]
    fn test_ties_keep_input_order_in_both_directions() {
        let records = sample_reservations();
        let refs: Vec<&Reservation> = records.iter().collect();
        // r-001 and r-003 share the temporary-care type.
        let asc = sort_reservations(&refs, SortSpec::asc(SortKey::Type));
        let desc = sort_reservations(&refs, SortSpec::desc(SortKey::Type));
        let pos = |list: &[&Reservation], id: &str| {
            list.iter().position(|r| r.id().as_str() == id).unwrap()
        };
        assert!(pos(&asc, "r-001") < pos(&asc, "r-003"));
        assert!(pos(&desc, "r-001") < pos(&desc, "r-003"));
    }

    #[test]
    fn test_sort_by_created_at_is_chronological() {
        let records = sample_reservations();
        let refs: Vec<&Reservation> = records.iter().collect();
        let sorted = sort_reservations(&refs, SortSpec::asc(SortKey::CreatedAt));
        assert!(sorted
            .windows(2)
            .all(|w| w[0].created_at() <= w[1].created_at()));
    }

    #[test]
    fn test_locale_compare_folds_case() {
        assert_eq!(locale_compare("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_compare("ABC", "abc"), Ordering::Less);
        assert_eq!(locale_compare("b", "A"), Ordering::Greater);
    }

    #[test]
    fn test_locale_compare_treats_katakana_as_hiragana() {
        assert_eq!(locale_compare("カトウ", "さとう"), Ordering::Less);
        assert_eq!(locale_compare("さとう", "カトウ"), Ordering::Greater);
        // Same reading: still a strict order, hiragana first.
        assert_eq!(locale_compare("さくら", "サクラ"), Ordering::Less);
        assert_ne!(locale_compare("ヴ", "ゔ"), Ordering::Equal);
    }

    #[test]
    fn test_parse_sort_key() {
        assert_eq!("child-name".parse::<SortKey>().unwrap(), SortKey::ChildName);
        assert_eq!("Created_At".parse::<SortKey>().unwrap(), SortKey::CreatedAt);
        assert!("age".parse::<SortKey>().is_err());
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert!("up".parse::<SortDirection>().is_err());
    }
}
