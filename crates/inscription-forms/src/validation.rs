//! Field validators and the registration form validator.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::ValidationErrors;
use crate::field::Field;
use crate::fields::registration_fields;
use crate::form::{FormFieldDef, RegistrationForm};

// `\S` minus U+FEFF, which browsers count as whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}]+@[^\s\x{FEFF}]+\.[^\s\x{FEFF}]+$")
        .expect("email pattern compiles")
});

/// Returns whether `value` is empty once surrounding whitespace, including
/// the U+FEFF byte order mark, is removed.
pub fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a value that is not blank once trimmed.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Ce champ est obligatoire.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if is_blank(value) {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that requires a non-empty value, whitespace included.
///
/// Used for secrets, where a password made of spaces is still a password.
#[derive(Debug, Clone)]
pub struct NonEmptyValidator {
    message: String,
}

impl NonEmptyValidator {
    /// Creates a new NonEmptyValidator.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Validator for NonEmptyValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length, counted in UTF-16 code units
/// like a browser's `value.length`.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ce champ doit contenir au moins {min_length} caractères."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.encode_utf16().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses: `local@domain.tld`, no whitespace anywhere.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Adresse e-mail invalide.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL_PATTERN.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// How an empty password confirmation is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConfirmationPolicy {
    /// Only equality with the password is checked: an empty confirmation
    /// next to a non-empty password gets the mismatch message.
    #[default]
    MismatchOnly,
    /// An empty confirmation gets its own required message before the
    /// equality check runs.
    RequiredThenMismatch,
}

/// Validates a whole [`RegistrationForm`] snapshot.
///
/// Every field is checked in one pass. Within a field the first failing
/// rule wins, so a field carries at most one message.
#[derive(Debug)]
pub struct RegistrationValidator {
    fields: Vec<FormFieldDef>,
}

impl RegistrationValidator {
    /// Builds the validator for the registration form described by `config`.
    pub fn new(config: &FormConfig) -> Self {
        Self::from_fields(registration_fields(config))
    }

    /// Builds a validator from explicit field definitions.
    pub fn from_fields(fields: Vec<FormFieldDef>) -> Self {
        Self { fields }
    }

    /// Returns the field definitions, in display order.
    pub fn fields(&self) -> &[FormFieldDef] {
        &self.fields
    }

    /// Returns the field definition for `field`, if the form has one.
    pub fn field(&self, field: Field) -> Option<&FormFieldDef> {
        self.fields.iter().find(|def| def.field == field)
    }

    /// Maps a snapshot to its per-field messages. An empty result means the
    /// form is valid.
    pub fn validate(&self, form: &RegistrationForm) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for def in &self.fields {
            if let Some(message) = def.check(form) {
                errors.add(def.field, message);
            }
        }
        errors
    }
}

impl Default for RegistrationValidator {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}
