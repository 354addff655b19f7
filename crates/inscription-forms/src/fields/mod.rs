//! Form field definitions.

mod password;
mod text;

pub use password::{confirm_password_field, password_field};
pub use text::{email_field, name_field};

use crate::config::FormConfig;
use crate::field::Field;
use crate::form::{FormBuilder, FormFieldDef};

/// Returns the registration form's field definitions, in display order.
pub fn registration_fields(config: &FormConfig) -> Vec<FormFieldDef> {
    let messages = &config.messages;

    FormBuilder::new()
        .field(name_field(Field::FirstName, &messages.first_name_required))
        .field(name_field(Field::LastName, &messages.last_name_required))
        .field(email_field(&messages.email_required, &messages.email_invalid))
        .field(password_field(
            config.min_password_length,
            &messages.password_required,
            &messages.password_too_short(config.min_password_length),
        ))
        .field(confirm_password_field(
            config.confirmation_policy,
            &messages.confirm_password_required,
            &messages.password_mismatch,
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_fields_order() {
        let fields = registration_fields(&FormConfig::default());
        let order: Vec<Field> = fields.iter().map(|def| def.field).collect();
        assert_eq!(order, Field::ALL.to_vec());
    }
}
