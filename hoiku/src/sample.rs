//! Bundled demonstration data.
//!
//! The dashboard and discovery screens are seeded from these records until a
//! real store is configured. `hoiku init` loads them into a fresh database.

use crate::facility::Facility;
use crate::reservation::Reservation;

const RESERVATIONS: &str = include_str!("sample/reservations.json");
const FACILITIES: &str = include_str!("sample/facilities.json");

/// Returns the five sample reservations, in store order.
#[must_use]
pub fn sample_reservations() -> Vec<Reservation> {
    serde_json::from_str(RESERVATIONS).unwrap_or_else(|e| {
        log::error!("bundled sample reservations are invalid: {e}");
        Vec::new()
    })
}

/// Returns the sample facilities, in store order.
#[must_use]
pub fn sample_facilities() -> Vec<Facility> {
    serde_json::from_str(FACILITIES).unwrap_or_else(|e| {
        log::error!("bundled sample facilities are invalid: {e}");
        Vec::new()
    })
}
