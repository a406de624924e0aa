//! Screens: self-contained form/display units
//!
//! Each screen pairs its form types and per-field validation with the render
//! and query helpers it needs over store data. Screens never mutate the
//! business collection directly; they go through [`crate::AggregateStore`]
//! and navigate through [`crate::Router`].

use std::collections::BTreeMap;
use std::fmt;

pub mod browse;
pub mod create_business;
pub mod create_review;
pub mod dashboard;
pub mod details;
pub mod profile;
pub mod reviews;
pub mod sign_in;
pub mod sign_up;

/// Per-field validation errors, surfaced inline next to the offending field.
/// Submission is blocked until the map is empty; none of these ever reach
/// the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<&'static str, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// Record the outcome of a validation helper against a field. Keeps the
    /// first error per field.
    pub fn check(&mut self, field: &'static str, result: Result<(), &'static str>) {
        if let Err(message) = result {
            self.insert(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, message) in self.0.iter() {
            writeln!(f,"  {}: {}", field, message)?;
        }
        Ok(())
    }
}

/// Collaborator that obtains user confirmation before a destructive action.
/// Delete operations ask through this before touching the store.
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Confirmation that always accepts; used by tests and scripted runs
pub struct AlwaysConfirm;

impl Confirmation for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Confirmation that always declines
pub struct NeverConfirm;

impl Confirmation for NeverConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_errors_keep_first_message_per_field() {
        let mut errors = FormErrors::new();
        errors.insert("email", "Email is required");
        errors.insert("email", "Invalid email format");
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_form_errors_into_result() {
        assert!(FormErrors::new().into_result().is_ok());

        let mut errors = FormErrors::new();
        errors.check("name", Err("This field is required"));
        assert!(errors.into_result().is_err());
    }
}
