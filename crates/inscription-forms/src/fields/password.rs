//! Password field types.

use crate::field::Field;
use crate::form::FormFieldDef;
use crate::validation::{ConfirmationPolicy, MinLengthValidator, NonEmptyValidator};

/// Creates the password field.
pub fn password_field(
    min_length: usize,
    required_message: &str,
    too_short_message: &str,
) -> FormFieldDef {
    FormFieldDef::new(Field::Password)
        .required()
        .validator(NonEmptyValidator::with_message(required_message))
        .validator(MinLengthValidator::with_message(min_length, too_short_message))
        .attr("autocomplete", "new-password")
}

/// Creates the password confirmation field.
///
/// The confirmation is compared to the password verbatim. Its length is not
/// checked, so a short password repeated correctly only fails on the
/// password field.
pub fn confirm_password_field(
    policy: ConfirmationPolicy,
    required_message: &str,
    mismatch_message: &str,
) -> FormFieldDef {
    let mut field = FormFieldDef::new(Field::ConfirmPassword)
        .must_match(Field::Password, mismatch_message)
        .attr("autocomplete", "new-password");

    if policy == ConfirmationPolicy::RequiredThenMismatch {
        field = field
            .required()
            .validator(NonEmptyValidator::with_message(required_message));
    }

    field
}
