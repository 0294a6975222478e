//! Reservation records for childcare facility bookings.
//!
//! This module provides the reservation record, the child and parent it
//! refers to, its time slot, and a builder that enforces the record's
//! invariants. Status and type enumerations live in submodules.

mod kind;
mod status;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use kind::ReservationType;
pub use status::ReservationStatus;

/// Unique identifier of a reservation.
///
/// # Examples
///
/// ```
/// use hoiku::ReservationId;
///
/// let id = ReservationId::new(" r-001 ").unwrap();
/// assert_eq!(id.as_str(), "r-001");
/// assert!(ReservationId::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(String);

impl ReservationId {
    /// Creates an id, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty after trimming.
    pub fn new(id: impl AsRef<str>) -> std::result::Result<Self, ValidationError> {
        let trimmed = id.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::new("id", "id must be non-empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReservationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Wall-clock window on one calendar day. No timezone handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Calendar day.
    pub date: NaiveDate,
    /// Start of the window.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// End of the window.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Creates a slot.
    ///
    /// # Errors
    ///
    /// Returns an error unless `start_time` is strictly before `end_time`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{NaiveDate, NaiveTime};
    /// use hoiku::TimeSlot;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
    ///
    /// assert!(TimeSlot::new(day, nine, five).is_ok());
    /// assert!(TimeSlot::new(day, five, nine).is_err());
    /// ```
    pub fn new(
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> std::result::Result<Self, ValidationError> {
        let slot = Self {
            date,
            start_time,
            end_time,
        };
        slot.validate()?;
        Ok(slot)
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.start_time >= self.end_time {
            return Err(ValidationError::new(
                "end_time",
                format!(
                    "end time {} must be after start time {}",
                    self.end_time.format("%H:%M"),
                    self.start_time.format("%H:%M")
                ),
            ));
        }
        Ok(())
    }

    /// Returns the day as `YYYY-MM-DD`.
    #[must_use]
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Returns `YYYY-MM-DD HH:MM`, which orders the same as the slot itself.
    #[must_use]
    pub fn start_key(&self) -> String {
        format!("{} {}", self.date_key(), self.start_time.format("%H:%M"))
    }
}

/// The child a reservation is for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildRef {
    /// Child identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u8>,
    /// Date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
}

impl ChildRef {
    /// Creates a child reference with no optional details.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: None,
            birth_date: None,
        }
    }
}

/// The parent who made a reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    /// Parent identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ParentRef {
    /// Creates a parent reference with no contact details.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: None,
            email: None,
        }
    }
}

/// One booking of a child at a facility for a time window.
///
/// Construct with [`Reservation::builder`]; deserialization runs the same
/// validation.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use hoiku::{ChildRef, ParentRef, Reservation, ReservationId, ReservationStatus, TimeSlot};
///
/// let slot = TimeSlot::new(
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// )
/// .unwrap();
///
/// let reservation = Reservation::builder(
///     ReservationId::new("r-001").unwrap(),
///     slot,
///     ChildRef::new("c-1", "山田 太郎"),
///     ParentRef::new("p-1", "山田 花子"),
/// )
/// .build()
/// .unwrap();
///
/// assert_eq!(reservation.status(), ReservationStatus::Pending);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReservationData")]
pub struct Reservation {
    id: ReservationId,
    #[serde(flatten)]
    slot: TimeSlot,
    child: ChildRef,
    parent: ParentRef,
    status: ReservationStatus,
    #[serde(rename = "type")]
    kind: ReservationType,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    allergies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    medical_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checked_in_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    checked_out_at: Option<DateTime<Utc>>,
}

impl Reservation {
    /// Creates a new reservation builder.
    #[must_use]
    pub fn builder(
        id: ReservationId,
        slot: TimeSlot,
        child: ChildRef,
        parent: ParentRef,
    ) -> ReservationBuilder {
        ReservationBuilder {
            id,
            slot,
            child,
            parent,
            status: ReservationStatus::Pending,
            kind: ReservationType::Other,
            allergies: Vec::new(),
            medical_notes: None,
            special_requests: None,
            notes: None,
            created_at: None,
            updated_at: None,
            checked_in_at: None,
            checked_out_at: None,
        }
    }

    /// Returns the reservation id.
    #[must_use]
    pub const fn id(&self) -> &ReservationId {
        &self.id
    }

    /// Returns the time slot.
    #[must_use]
    pub const fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    /// Returns the calendar day.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.slot.date
    }

    /// Returns the child.
    #[must_use]
    pub const fn child(&self) -> &ChildRef {
        &self.child
    }

    /// Returns the parent.
    #[must_use]
    pub const fn parent(&self) -> &ParentRef {
        &self.parent
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> ReservationStatus {
        self.status
    }

    /// Returns the reservation type.
    #[must_use]
    pub const fn kind(&self) -> ReservationType {
        self.kind
    }

    /// Returns the recorded allergies.
    #[must_use]
    pub fn allergies(&self) -> &[String] {
        &self.allergies
    }

    /// Returns the medical notes.
    #[must_use]
    pub fn medical_notes(&self) -> Option<&str> {
        self.medical_notes.as_deref()
    }

    /// Returns the parent's special requests.
    #[must_use]
    pub fn special_requests(&self) -> Option<&str> {
        self.special_requests.as_deref()
    }

    /// Returns free-text staff notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns when the child was checked in.
    #[must_use]
    pub const fn checked_in_at(&self) -> Option<DateTime<Utc>> {
        self.checked_in_at
    }

    /// Returns when the child was checked out.
    #[must_use]
    pub const fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    /// Returns true if any allergy or medical note is recorded.
    #[must_use]
    pub fn has_care_alerts(&self) -> bool {
        !self.allergies.is_empty() || self.medical_notes.is_some()
    }

    /// Moves the reservation to `target`, stamping the audit timestamps.
    ///
    /// Entering `checked_in` records `checked_in_at`, entering
    /// `checked_out` records `checked_out_at`. `updated_at` is always set.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTransition`] if the lifecycle does not
    /// allow the move, and [`crate::Error::Validation`] if `at` precedes the
    /// last update or would leave the audit timestamps out of order. The
    /// record is unchanged on error.
    pub fn transition_to(&mut self, target: ReservationStatus, at: DateTime<Utc>) -> Result<()> {
        let next = self.status.transition(target)?;
        if at < self.updated_at {
            return Err(ValidationError::new(
                "updated_at",
                format!(
                    "status change at {at} precedes the last update at {}",
                    self.updated_at
                ),
            )
            .into());
        }

        let mut moved = self.clone();
        match next {
            ReservationStatus::CheckedIn => moved.checked_in_at = Some(at),
            ReservationStatus::CheckedOut => moved.checked_out_at = Some(at),
            _ => {}
        }
        moved.status = next;
        moved.updated_at = at;
        moved.validate()?;

        *self = moved;
        Ok(())
    }

    fn validate(&self) -> std::result::Result<(), ValidationError> {
        self.slot.validate()?;

        if self.child.name.trim().is_empty() {
            return Err(ValidationError::new("child.name", "child name must be non-empty"));
        }
        if self.parent.name.trim().is_empty() {
            return Err(ValidationError::new(
                "parent.name",
                "parent name must be non-empty",
            ));
        }

        if self.checked_in_at.is_some() && !self.status.has_checked_in() {
            return Err(ValidationError::new(
                "checked_in_at",
                format!("check-in time is not allowed while status is {}", self.status),
            ));
        }
        if self.checked_out_at.is_some() && self.status != ReservationStatus::CheckedOut {
            return Err(ValidationError::new(
                "checked_out_at",
                format!("check-out time is not allowed while status is {}", self.status),
            ));
        }
        if let (Some(checked_in), Some(checked_out)) = (self.checked_in_at, self.checked_out_at) {
            if checked_out < checked_in {
                return Err(ValidationError::new(
                    "checked_out_at",
                    "check-out time must not precede check-in time",
                ));
            }
        }
        if self.updated_at < self.created_at {
            return Err(ValidationError::new(
                "updated_at",
                "update time must not precede creation time",
            ));
        }

        Ok(())
    }
}

/// Builder for creating `Reservation` instances.
#[derive(Debug)]
pub struct ReservationBuilder {
    id: ReservationId,
    slot: TimeSlot,
    child: ChildRef,
    parent: ParentRef,
    status: ReservationStatus,
    kind: ReservationType,
    allergies: Vec<String>,
    medical_notes: Option<String>,
    special_requests: Option<String>,
    notes: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    checked_in_at: Option<DateTime<Utc>>,
    checked_out_at: Option<DateTime<Utc>>,
}

/// Trims free text, mapping blank input to `None`.
fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

impl ReservationBuilder {
    /// Sets the status. Defaults to `pending`.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the type. Defaults to `その他`.
    #[must_use]
    pub const fn kind(mut self, kind: ReservationType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the allergies. Blank entries are dropped.
    #[must_use]
    pub fn allergies<I, S>(mut self, allergies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergies = allergies
            .into_iter()
            .map(|a| a.into().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        self
    }

    /// Sets the medical notes.
    #[must_use]
    pub fn medical_notes(mut self, notes: Option<String>) -> Self {
        self.medical_notes = non_blank(notes);
        self
    }

    /// Sets the special requests.
    #[must_use]
    pub fn special_requests(mut self, requests: Option<String>) -> Self {
        self.special_requests = non_blank(requests);
        self
    }

    /// Sets the staff notes.
    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = non_blank(notes);
        self
    }

    /// Sets the creation timestamp. Defaults to now.
    #[must_use]
    pub const fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    /// Sets the update timestamp. Defaults to the creation timestamp.
    #[must_use]
    pub const fn updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Sets the check-in timestamp.
    #[must_use]
    pub const fn checked_in_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.checked_in_at = at;
        self
    }

    /// Sets the check-out timestamp.
    #[must_use]
    pub const fn checked_out_at(mut self, at: Option<DateTime<Utc>>) -> Self {
        self.checked_out_at = at;
        self
    }

    /// Builds the reservation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the slot ends before it starts
    /// - the child or parent name is blank
    /// - a check-in or check-out time is set for a status that has not
    ///   reached it
    /// - timestamps are out of order
    pub fn build(self) -> std::result::Result<Reservation, ValidationError> {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let reservation = Reservation {
            id: self.id,
            slot: self.slot,
            child: self.child,
            parent: self.parent,
            status: self.status,
            kind: self.kind,
            allergies: self.allergies,
            medical_notes: self.medical_notes,
            special_requests: self.special_requests,
            notes: self.notes,
            created_at,
            updated_at: self.updated_at.unwrap_or(created_at),
            checked_in_at: self.checked_in_at,
            checked_out_at: self.checked_out_at,
        };
        reservation.validate()?;
        Ok(reservation)
    }
}

/// Unvalidated wire form of a reservation.
#[derive(Deserialize)]
struct ReservationData {
    id: ReservationId,
    #[serde(flatten)]
    slot: TimeSlot,
    child: ChildRef,
    parent: ParentRef,
    status: ReservationStatus,
    #[serde(rename = "type")]
    kind: ReservationType,
    #[serde(default)]
    allergies: Vec<String>,
    #[serde(default)]
    medical_notes: Option<String>,
    #[serde(default)]
    special_requests: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(default)]
    checked_in_at: Option<DateTime<Utc>>,
    #[serde(default)]
    checked_out_at: Option<DateTime<Utc>>,
}

impl TryFrom<ReservationData> for Reservation {
    type Error = ValidationError;

    fn try_from(data: ReservationData) -> std::result::Result<Self, Self::Error> {
        let id = ReservationId::new(data.id.as_str())?;
        Reservation::builder(id, data.slot, data.child, data.parent)
            .status(data.status)
            .kind(data.kind)
            .allergies(data.allergies)
            .medical_notes(data.medical_notes)
            .special_requests(data.special_requests)
            .notes(data.notes)
            .created_at(data.created_at)
            .updated_at(data.updated_at)
            .checked_in_at(data.checked_in_at)
            .checked_out_at(data.checked_out_at)
            .build()
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// `HH:MM` serialization for wall-clock times; `HH:MM:SS` is accepted on input.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format("%H:%M"))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(|e| serde::de::Error::custom(format!("invalid time '{raw}': {e}")))
    }
}
