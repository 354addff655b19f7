//! Text field types.

use crate::field::Field;
use crate::form::FormFieldDef;
use crate::validation::{EmailValidator, RequiredValidator};

/// Creates a required name field (first or last name).
pub fn name_field(field: Field, required_message: &str) -> FormFieldDef {
    FormFieldDef::new(field)
        .required()
        .validator(RequiredValidator::with_message(required_message))
}

/// Creates a required email field.
pub fn email_field(required_message: &str, invalid_message: &str) -> FormFieldDef {
    FormFieldDef::new(Field::Email)
        .required()
        .validator(RequiredValidator::with_message(required_message))
        .validator(EmailValidator::with_message(invalid_message))
        .attr("autocomplete", "email")
}
