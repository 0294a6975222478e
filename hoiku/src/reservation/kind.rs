//! Reservation types offered by facilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What a reservation is for.
///
/// Serialized with the Japanese label used across the app; the English slug
/// is accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReservationType {
    /// Temporary childcare (一時預かり).
    #[serde(rename = "一時預かり", alias = "temporary-care")]
    TemporaryCare,
    /// Facility tour (見学).
    #[serde(rename = "見学", alias = "tour")]
    Tour,
    /// Consultation with staff (相談).
    #[serde(rename = "相談", alias = "consultation")]
    Consultation,
    /// Facility event (イベント).
    #[serde(rename = "イベント", alias = "event")]
    Event,
    /// Anything else (その他).
    #[serde(rename = "その他", alias = "other")]
    Other,
}

impl ReservationType {
    /// Every type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::TemporaryCare,
        Self::Tour,
        Self::Consultation,
        Self::Event,
        Self::Other,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TemporaryCare => "一時預かり",
            Self::Tour => "見学",
            Self::Consultation => "相談",
            Self::Event => "イベント",
            Self::Other => "その他",
        }
    }

    /// Returns the ASCII slug, used on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TemporaryCare => "temporary-care",
            Self::Tour => "tour",
            Self::Consultation => "consultation",
            Self::Event => "event",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ReservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ReservationType {
    type Err = Error;

    /// Parses either the label or the slug.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoiku::ReservationType;
    ///
    /// assert_eq!("tour".parse::<ReservationType>().unwrap(), ReservationType::Tour);
    /// assert_eq!("見学".parse::<ReservationType>().unwrap(), ReservationType::Tour);
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == trimmed || kind.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::Validation {
                field: "type".into(),
                message: format!(
                    "unknown reservation type '{s}' (expected one of: temporary-care, tour, consultation, event, other)"
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_label() {
        let json = serde_json::to_string(&ReservationType::TemporaryCare).unwrap();
        assert_eq!(json, "\"一時預かり\"");
    }

    #[test]
    fn test_deserializes_label_and_slug() {
        let from_label: ReservationType = serde_json::from_str("\"相談\"").unwrap();
        let from_slug: ReservationType = serde_json::from_str("\"consultation\"").unwrap();
        assert_eq!(from_label, ReservationType::Consultation);
        assert_eq!(from_slug, ReservationType::Consultation);
    }

    #[test]
    fn test_rejects_unknown() {
        assert!(serde_json::from_str::<ReservationType>("\"遠足\"").is_err());
        assert!("picnic".parse::<ReservationType>().is_err());
    }

    #[test]
    fn test_slug_parse_ignores_ascii_case() {
        assert_eq!(
            "Temporary-Care".parse::<ReservationType>().unwrap(),
            ReservationType::TemporaryCare
        );
    }
}
