#![allow(dead_code)]

use inscription_forms::{Field, RegistrationForm};

/// A form that passes every rule.
pub fn valid_form() -> RegistrationForm {
    RegistrationForm::new()
        .with(Field::FirstName, "A")
        .with(Field::LastName, "B")
        .with(Field::Email, "a@example.com")
        .with(Field::Password, "123456")
        .with(Field::ConfirmPassword, "123456")
}

/// `valid_form` with one field replaced.
pub fn valid_form_with(field: Field, value: &str) -> RegistrationForm {
    valid_form().with(field, value)
}

/// Fields present in an error mapping, in display order.
pub fn error_fields(errors: &inscription_forms::ValidationErrors) -> Vec<Field> {
    errors.iter().map(|(field, _)| field).collect()
}
