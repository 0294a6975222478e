//! Childcare facilities shown on the parent-facing discovery screen.

mod contact;
mod filter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use contact::{dial_uri, mail_uri};
pub use filter::{sort_facilities, FacilityFilter, FacilitySort};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

/// Legal category of a facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacilityType {
    /// 認可保育園
    #[serde(rename = "認可保育園", alias = "licensed")]
    Licensed,
    /// 認可外保育園
    #[serde(rename = "認可外保育園", alias = "unlicensed")]
    Unlicensed,
    /// 幼稚園
    #[serde(rename = "幼稚園", alias = "kindergarten")]
    Kindergarten,
    /// 認定こども園
    #[serde(rename = "認定こども園", alias = "certified")]
    Certified,
    /// 小規模保育
    #[serde(rename = "小規模保育", alias = "small-scale")]
    SmallScale,
}

impl FacilityType {
    /// Every type, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Licensed,
        Self::Unlicensed,
        Self::Kindergarten,
        Self::Certified,
        Self::SmallScale,
    ];

    /// Returns the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Licensed => "認可保育園",
            Self::Unlicensed => "認可外保育園",
            Self::Kindergarten => "幼稚園",
            Self::Certified => "認定こども園",
            Self::SmallScale => "小規模保育",
        }
    }

    /// Returns the ASCII slug.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Licensed => "licensed",
            Self::Unlicensed => "unlicensed",
            Self::Kindergarten => "kindergarten",
            Self::Certified => "certified",
            Self::SmallScale => "small-scale",
        }
    }
}

impl fmt::Display for FacilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FacilityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.label() == trimmed || t.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::Validation {
                field: "facility_type".into(),
                message: format!(
                    "unknown facility type '{s}' (expected one of: licensed, unlicensed, kindergarten, certified, small-scale)"
                ),
            })
    }
}

/// How to reach a facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Phone number as printed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Homepage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A childcare facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Facility identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Map position.
    pub coordinates: Coordinates,
    /// Average review score, 0.0 to 5.0.
    pub rating: f64,
    /// Distance from the searching parent.
    pub distance_km: f64,
    /// Legal category.
    pub facility_type: FacilityType,
    /// Licensed number of children.
    pub capacity: u32,
    /// Slots currently open.
    pub available_slots: u32,
    /// Contact details.
    #[serde(default)]
    pub contact: ContactInfo,
    /// Amenities such as 園庭 or 給食.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Facility {
    /// Returns true if at least one slot is open.
    #[must_use]
    pub const fn has_availability(&self) -> bool {
        self.available_slots > 0
    }

    /// Returns a `tel:` link for the facility phone, if it has a usable one.
    #[must_use]
    pub fn dial_uri(&self) -> Option<String> {
        self.contact.phone.as_deref().and_then(|p| dial_uri(p).ok())
    }
}
