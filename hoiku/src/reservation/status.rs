//! Reservation lifecycle states and the transition table between them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lifecycle state of a reservation.
///
/// The legal transitions are:
///
/// ```text
/// pending ──▶ confirmed ──▶ checked_in ──▶ checked_out
///    │            │
///    └────────────┴──▶ cancelled
/// ```
///
/// `cancelled` and `checked_out` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    /// Booked and accepted by the facility.
    Confirmed,
    /// Waiting for the facility to accept.
    Pending,
    /// Withdrawn by the parent or the facility.
    Cancelled,
    /// The child has arrived.
    CheckedIn,
    /// The child has been picked up.
    CheckedOut,
}

impl ReservationStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Confirmed,
        Self::Pending,
        Self::Cancelled,
        Self::CheckedIn,
        Self::CheckedOut,
    ];

    /// Returns the wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
        }
    }

    /// Returns the label shown on the staff dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "確定",
            Self::Pending => "保留中",
            Self::Cancelled => "キャンセル",
            Self::CheckedIn => "チェックイン済",
            Self::CheckedOut => "チェックアウト済",
        }
    }

    /// Returns true if no further transition is possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::CheckedOut)
    }

    /// Returns true if the child has arrived at some point.
    #[must_use]
    pub const fn has_checked_in(self) -> bool {
        matches!(self, Self::CheckedIn | Self::CheckedOut)
    }

    /// Returns the statuses reachable from this one in a single step.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoiku::ReservationStatus;
    ///
    /// assert_eq!(
    ///     ReservationStatus::Pending.next_states(),
    ///     &[ReservationStatus::Confirmed, ReservationStatus::Cancelled]
    /// );
    /// assert!(ReservationStatus::CheckedOut.next_states().is_empty());
    /// ```
    #[must_use]
    pub const fn next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::CheckedIn, Self::Cancelled],
            Self::CheckedIn => &[Self::CheckedOut],
            Self::Cancelled | Self::CheckedOut => &[],
        }
    }

    /// Returns true if moving to `target` is a legal single step.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        self.next_states().contains(&target)
    }

    /// Validates a move to `target` and returns the new status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] if the lifecycle does not allow
    /// the move, including a move to the current status.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoiku::ReservationStatus;
    ///
    /// let next = ReservationStatus::Confirmed
    ///     .transition(ReservationStatus::CheckedIn)
    ///     .unwrap();
    /// assert_eq!(next, ReservationStatus::CheckedIn);
    ///
    /// assert!(ReservationStatus::Pending
    ///     .transition(ReservationStatus::CheckedOut)
    ///     .is_err());
    /// ```
    pub fn transition(self, target: Self) -> Result<Self> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(Error::InvalidTransition {
                from: self,
                to: target,
            })
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| Error::Validation {
                field: "status".into(),
                message: format!(
                    "unknown status '{s}' (expected one of: confirmed, pending, cancelled, checked_in, checked_out)"
                ),
            })
    }
}
