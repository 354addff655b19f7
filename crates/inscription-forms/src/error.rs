//! Error types for forms.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::field::Field;

/// Operational errors raised while configuring or driving a form.
///
/// Field invalidity is never reported through this type: it is plain data
/// carried by [`ValidationErrors`].
#[derive(Debug, Error)]
pub enum FormError {
    /// A field name that is not part of the registration form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O failure while reading configuration or writing a sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A submission sink refused the snapshot.
    #[error("submission sink error: {0}")]
    Sink(String),
}

/// Per-field validation messages.
///
/// A field is absent when it is currently valid or has not been validated
/// since its last edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, String>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }

    /// Records the message for a field, replacing any previous one.
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Removes the message for a field, if any.
    pub fn clear_field(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the message for a specific field.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Returns whether the field currently has a message.
    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Iterates over the invalid fields in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_previous_message() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::Email, "first");
        errors.add(Field::Email, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Email), Some("second"));
    }

    #[test]
    fn test_clear_field() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::FirstName, "required");
        errors.add(Field::Password, "too short");

        assert_eq!(errors.clear_field(Field::FirstName).as_deref(), Some("required"));
        assert!(!errors.contains(Field::FirstName));
        assert!(errors.contains(Field::Password));
        assert_eq!(errors.clear_field(Field::FirstName), None);
    }

    #[test]
    fn test_iter_follows_display_order() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::ConfirmPassword, "c");
        errors.add(Field::FirstName, "a");
        errors.add(Field::Email, "b");

        let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(fields, vec![Field::FirstName, Field::Email, Field::ConfirmPassword]);
    }

    #[test]
    fn test_display_and_json() {
        let mut errors = ValidationErrors::new();
        errors.add(Field::LastName, "Le nom est obligatoire.");

        assert_eq!(errors.to_string(), "lastName: Le nom est obligatoire.\n");
        let json = serde_json::to_string(&errors).unwrap();
        assert_eq!(json, r#"{"lastName":"Le nom est obligatoire."}"#);
    }
}
