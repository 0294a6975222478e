//! Parent registration and contact form checks.
//!
//! Each form stops at the first rule it violates; the returned
//! [`Error::Validation`] names that field.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Maximum contact message length, in characters.
pub const MAX_MESSAGE_LEN: usize = 1000;

/// Account sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    /// Parent's full name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Phone number, hyphens and spaces allowed.
    pub phone: String,
    /// Chosen password.
    pub password: String,
    /// Password typed a second time.
    pub password_confirmation: String,
    /// Terms of service accepted.
    pub agreed_to_terms: bool,
}

impl RegistrationForm {
    /// Checks, in order: name, email, phone, password length, password
    /// confirmation, terms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for the first failing rule.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoiku::forms::RegistrationForm;
    ///
    /// let form = RegistrationForm {
    ///     name: "山田 花子".into(),
    ///     email: "hanako@example.com".into(),
    ///     phone: "090-1234-5678".into(),
    ///     password: "correct-horse".into(),
    ///     password_confirmation: "correct-horse".into(),
    ///     agreed_to_terms: true,
    /// };
    /// assert!(form.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(invalid(
                "password",
                format!("must be at least {MIN_PASSWORD_LEN} characters"),
            ));
        }
        if self.password != self.password_confirmation {
            return Err(invalid("password_confirmation", "passwords do not match"));
        }
        if !self.agreed_to_terms {
            return Err(invalid("terms", "the terms of service must be accepted"));
        }
        Ok(())
    }
}

/// Inquiry sent to a facility or to support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    /// Sender's name.
    pub name: String,
    /// Reply address.
    pub email: String,
    /// Subject line.
    pub subject: String,
    /// Body text.
    pub message: String,
}

impl ContactForm {
    /// Checks, in order: name, email, subject, message, message length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for the first failing rule.
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;

        let len = self.message.chars().count();
        if len > MAX_MESSAGE_LEN {
            return Err(invalid(
                "message",
                format!("must be at most {MAX_MESSAGE_LEN} characters (got {len})"),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: impl Into<String>) -> Error {
    Error::Validation {
        field: field.into(),
        message: message.into(),
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, "is required"));
    }
    Ok(())
}

/// Checks for `local@domain.tld` shape without whitespace.
///
/// # Errors
///
/// Returns [`Error::Validation`] on the `email` field.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(invalid("email", "is required"));
    }

    let well_formed = email.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && !domain.contains('@')
            && domain.contains('.')
            && !domain.starts_with('.')
            && !domain.ends_with('.')
    }) && !email.chars().any(char::is_whitespace);

    if !well_formed {
        return Err(invalid("email", format!("'{email}' is not a valid address")));
    }
    Ok(())
}

/// Accepts 10 or 11 digits, optionally separated by hyphens or spaces.
///
/// # Errors
///
/// Returns [`Error::Validation`] on the `phone` field.
pub fn validate_phone(phone: &str) -> Result<()> {
    let phone = phone.trim();
    if phone.is_empty() {
        return Err(invalid("phone", "is required"));
    }
    if !phone.chars().all(|c| c.is_ascii_digit() || c == '-' || c == ' ') {
        return Err(invalid("phone", "may only contain digits, hyphens and spaces"));
    }

    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if !(10..=11).contains(&digits) {
        return Err(invalid("phone", format!("must have 10 or 11 digits (got {digits})")));
    }
    Ok(())
}
