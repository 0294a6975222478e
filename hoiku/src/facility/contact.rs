//! `tel:` and `mailto:` links for contacting a facility.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::{Error, Result};

// Unreserved characters per RFC 3986 stay readable.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Builds a `tel:` URI, keeping only digits and `+`.
///
/// # Errors
///
/// Returns a validation error if the number contains no digits.
///
/// # Examples
///
/// ```
/// use hoiku::facility::dial_uri;
///
/// assert_eq!(dial_uri("03-1234-5678").unwrap(), "tel:0312345678");
/// assert_eq!(dial_uri("+81 3 1234 5678").unwrap(), "tel:+81312345678");
/// assert!(dial_uri("n/a").is_err());
/// ```
pub fn dial_uri(phone: &str) -> Result<String> {
    let number: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if !number.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::Validation {
            field: "phone".into(),
            message: format!("'{phone}' has no digits to dial"),
        });
    }

    Ok(format!("tel:{number}"))
}

/// Builds a `mailto:` URI with a percent-encoded subject.
///
/// # Errors
///
/// Returns a validation error if the address is blank or lacks `@`.
///
/// # Examples
///
/// ```
/// use hoiku::facility::mail_uri;
///
/// let uri = mail_uri("info@example.com", Some("見学 希望")).unwrap();
/// assert!(uri.starts_with("mailto:info@example.com?subject=%E8%A6%8B"));
/// assert!(!uri.contains(' '));
/// ```
pub fn mail_uri(email: &str, subject: Option<&str>) -> Result<String> {
    let address = email.trim();
    if address.is_empty() || !address.contains('@') {
        return Err(Error::Validation {
            field: "email".into(),
            message: format!("'{email}' is not an email address"),
        });
    }

    let mut uri = format!("mailto:{address}");
    if let Some(subject) = subject.filter(|s| !s.is_empty()) {
        uri.push_str("?subject=");
        uri.extend(utf8_percent_encode(subject, QUERY_VALUE));
    }
    Ok(uri)
}
