//! Form controllers: draft state, submit-time validation, submit into the
//! owning record collection.
//!
//! A failed validation returns [`DomainError::Validation`] with one message
//! and leaves every draft field as it was.
//!
//! [`DomainError::Validation`]: crate::domain::error::DomainError::Validation

pub mod evaluation;
pub mod feedback;
pub mod login;
pub mod pdp;
pub mod registration;
pub mod user_admin;

pub(crate) const FILL_ALL_FIELDS: &str = "Please fill in all fields";

/// True when every field has non-whitespace content.
pub(crate) fn all_filled(fields: &[&str]) -> bool {
    fields.iter().all(|f| !f.trim().is_empty())
}
