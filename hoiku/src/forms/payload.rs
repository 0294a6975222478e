//! Application form data carried in a deep link.
//!
//! The submit screen serializes the form to JSON and percent-encodes it
//! into a single route parameter; the detail screen reverses both steps.

use chrono::NaiveDate;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// Characters a URI component may carry unescaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A childcare enrollment application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    /// Facility applied to.
    pub facility_id: String,
    /// Facility display name.
    pub facility_name: String,
    /// Child's name.
    pub child_name: String,
    /// Child's birth date.
    pub child_birth_date: NaiveDate,
    /// Applicant's name.
    pub parent_name: String,
    /// Applicant's phone.
    pub phone: String,
    /// Applicant's email.
    pub email: String,
    /// Requested first day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desired_start_date: Option<NaiveDate>,
    /// Free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ApplicationForm {
    /// Decodes a deep-link parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PayloadDecode`] if the parameter is not valid.
    pub fn from_payload(raw: &str) -> Result<Self> {
        decode_payload(raw)
    }

    /// Encodes the form as a deep-link parameter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if serialization fails.
    pub fn to_payload(&self) -> Result<String> {
        encode_payload(self)
    }
}

/// Percent-decodes `raw` and parses the result as JSON.
///
/// # Errors
///
/// Returns [`Error::PayloadDecode`] when the decoded bytes are not UTF-8 or
/// the JSON does not match `T`.
///
/// # Examples
///
/// ```
/// use hoiku::forms::{decode_payload, ApplicationForm};
///
/// let raw = "%7B%22facilityId%22%3A%22f-001%22%2C%22facilityName%22%3A%22%E3%81%95%E3%81%8F%E3%82%89%E4%BF%9D%E8%82%B2%E5%9C%92%22%2C%22childName%22%3A%22%E5%B1%B1%E7%94%B0%20%E5%A4%AA%E9%83%8E%22%2C%22childBirthDate%22%3A%222020-06-12%22%2C%22parentName%22%3A%22%E5%B1%B1%E7%94%B0%20%E8%8A%B1%E5%AD%90%22%2C%22phone%22%3A%22090-1234-5678%22%2C%22email%22%3A%22yamada.hanako%40example.com%22%7D";
/// let form: ApplicationForm = decode_payload(raw).unwrap();
/// assert_eq!(form.child_name, "山田 太郎");
///
/// assert!(decode_payload::<ApplicationForm>("%7Bbroken").is_err());
/// ```
pub fn decode_payload<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let json = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|e| Error::PayloadDecode {
            reason: format!("not UTF-8 after percent-decoding: {e}"),
        })?;

    serde_json::from_str(&json).map_err(|e| {
        log::debug!("rejected form payload: {e}");
        Error::PayloadDecode {
            reason: e.to_string(),
        }
    })
}

/// Serializes `value` to JSON and percent-encodes it as a URI component.
///
/// # Errors
///
/// Returns [`Error::Json`] if serialization fails.
pub fn encode_payload<T: Serialize>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value)?;
    Ok(utf8_percent_encode(&json, COMPONENT).to_string())
}
