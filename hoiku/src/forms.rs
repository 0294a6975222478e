//! Parent-facing form handling: field validation and deep-link payloads.

mod payload;
mod validation;

pub use payload::{decode_payload, encode_payload, ApplicationForm};
pub use validation::{
    validate_email, validate_phone, ContactForm, RegistrationForm, MAX_MESSAGE_LEN,
    MIN_PASSWORD_LEN,
};
