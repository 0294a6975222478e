//! Facility search: narrowing and ordering the discovery list.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Facility, FacilityType};
use crate::error::{Error, Result};
use crate::query::locale_compare;

/// Filter specification for facilities.
///
/// Same combination rules as the reservation filter: criteria AND together,
/// the type set ORs within itself, and an unset criterion does not filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacilityFilter {
    /// Keep facilities of one of these types.
    #[serde(default)]
    pub facility_types: Vec<FacilityType>,
    /// Keep facilities at most this far away.
    #[serde(default)]
    pub max_distance_km: Option<f64>,
    /// Keep facilities rated at least this high.
    #[serde(default)]
    pub min_rating: Option<f64>,
    /// Keep only facilities with an open slot.
    #[serde(default)]
    pub only_available: bool,
    /// Case-insensitive text matched against name and address.
    #[serde(default)]
    pub search_query: Option<String>,
}

impl FacilityFilter {
    /// Creates a filter with no active criteria.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a set of types.
    #[must_use]
    pub fn with_types(mut self, types: impl IntoIterator<Item = FacilityType>) -> Self {
        self.facility_types = types.into_iter().collect();
        self
    }

    /// Restricts by distance.
    #[must_use]
    pub const fn with_max_distance(mut self, km: f64) -> Self {
        self.max_distance_km = Some(km);
        self
    }

    /// Restricts by rating.
    #[must_use]
    pub const fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Restricts to facilities with availability.
    #[must_use]
    pub const fn only_available(mut self) -> Self {
        self.only_available = true;
        self
    }

    /// Restricts to records matching a search query.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    /// Returns true if `facility` satisfies every active criterion.
    #[must_use]
    pub fn matches(&self, facility: &Facility) -> bool {
        if !self.facility_types.is_empty() && !self.facility_types.contains(&facility.facility_type)
        {
            return false;
        }
        if self.max_distance_km.is_some_and(|max| facility.distance_km > max) {
            return false;
        }
        if self.min_rating.is_some_and(|min| facility.rating < min) {
            return false;
        }
        if self.only_available && !facility.has_availability() {
            return false;
        }

        let needle = self
            .search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        needle.map_or(true, |needle| {
            facility.name.to_lowercase().contains(&needle)
                || facility.address.to_lowercase().contains(&needle)
        })
    }

    /// Applies the filter, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, facilities: &'a [Facility]) -> Vec<&'a Facility> {
        facilities.iter().filter(|f| self.matches(f)).collect()
    }
}

/// Ordering of the discovery list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacilitySort {
    /// Nearest first.
    #[default]
    Distance,
    /// Best rated first.
    Rating,
    /// By name.
    Name,
}

impl fmt::Display for FacilitySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Distance => "distance",
            Self::Rating => "rating",
            Self::Name => "name",
        })
    }
}

impl FromStr for FacilitySort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            _ => Err(Error::Validation {
                field: "sort".into(),
                message: format!("unknown facility sort '{s}' (expected distance, rating or name)"),
            }),
        }
    }
}

/// Returns a new vector ordered by `sort`. Ties keep input order.
#[must_use]
pub fn sort_facilities<'a>(facilities: &[&'a Facility], sort: FacilitySort) -> Vec<&'a Facility> {
    let mut sorted = facilities.to_vec();
    match sort {
        FacilitySort::Distance => sorted.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km)),
        FacilitySort::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        FacilitySort::Name => sorted.sort_by(|a, b| locale_compare(&a.name, &b.name)),
    }
    sorted
}
