//! The registration form record and field definitions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::FormConfig;
use crate::error::{FormError, Result, ValidationErrors};
use crate::field::Field;
use crate::validation::{RegistrationValidator, Validator};
use crate::widgets::WidgetAttrs;

/// Values of the five registration inputs. Empty string is the initial value.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"********")
            .field("confirm_password", &"********")
            .finish()
    }
}

impl RegistrationForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        };
        *slot = value.into();
    }

    /// Builder variant of [`RegistrationForm::set`].
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }
}

/// Trait for form types.
pub trait Form: Sized {
    /// Returns the field definitions for this form.
    fn fields(config: &FormConfig) -> Vec<FormFieldDef>;

    /// Returns the current value of a field.
    fn value(&self, field: Field) -> &str;

    /// Validates the form data.
    fn validate(&self, config: &FormConfig) -> std::result::Result<(), ValidationErrors>;

    /// Creates a form instance from submitted name/value pairs.
    fn from_data(data: &HashMap<String, String>) -> Result<Self>;
}

impl Form for RegistrationForm {
    fn fields(config: &FormConfig) -> Vec<FormFieldDef> {
        crate::fields::registration_fields(config)
    }

    fn value(&self, field: Field) -> &str {
        self.get(field)
    }

    fn validate(&self, config: &FormConfig) -> std::result::Result<(), ValidationErrors> {
        let errors = RegistrationValidator::new(config).validate(self);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn from_data(data: &HashMap<String, String>) -> Result<Self> {
        let mut form = Self::new();
        for (name, value) in data {
            let field: Field = name.parse()?;
            form.set(field, value.as_str());
        }
        Ok(form)
    }
}

/// Rule requiring a field to hold exactly the value of another field.
#[derive(Debug, Clone)]
pub struct MatchRule {
    /// The field whose value must be repeated.
    pub other: Field,
    /// Message reported on mismatch.
    pub message: String,
}

/// Definition of a form field.
pub struct FormFieldDef {
    /// Field identity.
    pub field: Field,
    /// Field label.
    pub label: String,
    /// Whether the field is required.
    pub required: bool,
    /// Help text.
    pub help_text: Option<String>,
    /// Validators, run in order until one fails.
    pub validators: Vec<Box<dyn Validator>>,
    /// Cross-field equality rule, checked after the validators pass.
    pub must_match: Option<MatchRule>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FormFieldDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormFieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("help_text", &self.help_text)
            .field("validators", &self.validators.len())
            .field("must_match", &self.must_match)
            .finish_non_exhaustive()
    }
}

impl FormFieldDef {
    /// Creates a new field definition labelled with the field's default label.
    pub fn new(field: Field) -> Self {
        Self {
            field,
            label: field.label().to_string(),
            required: false,
            help_text: None,
            validators: Vec::new(),
            must_match: None,
            attrs: WidgetAttrs::new(),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Overrides the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Requires the value to equal `other`'s value.
    #[must_use]
    pub fn must_match(mut self, other: Field, message: impl Into<String>) -> Self {
        self.must_match = Some(MatchRule {
            other,
            message: message.into(),
        });
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Returns the message for the first failing rule, if any.
    pub fn check(&self, form: &RegistrationForm) -> Option<String> {
        let value = form.get(self.field);

        for validator in &self.validators {
            if let Err(message) = validator.validate(value) {
                return Some(message);
            }
        }

        match &self.must_match {
            Some(rule) if value != form.get(rule.other) => Some(rule.message.clone()),
            _ => None,
        }
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<FormFieldDef>,
}

impl FormBuilder {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FormFieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field definitions.
    pub fn build(self) -> Vec<FormFieldDef> {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::RequiredValidator;

    #[test]
    fn test_get_and_set() {
        let mut form = RegistrationForm::new();
        for field in Field::ALL {
            assert_eq!(form.get(field), "");
        }

        form.set(Field::Email, "ada@example.com");
        form.set(Field::ConfirmPassword, "secret");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.get(Field::ConfirmPassword), "secret");
        assert_eq!(form.get(Field::Password), "");
    }

    #[test]
    fn test_debug_masks_passwords() {
        let form = RegistrationForm::new()
            .with(Field::FirstName, "Ada")
            .with(Field::Password, "hunter22")
            .with(Field::ConfirmPassword, "hunter22");
        let debug = format!("{form:?}");
        assert!(debug.contains("Ada"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn test_json_uses_camel_case_and_defaults() {
        let form: RegistrationForm =
            serde_json::from_str(r#"{"firstName":"Ada","confirmPassword":"x"}"#).unwrap();
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.confirm_password, "x");
        assert_eq!(form.last_name, "");
    }

    #[test]
    fn test_from_data() {
        let data = HashMap::from([
            ("firstName".to_string(), "Ada".to_string()),
            ("email".to_string(), "ada@example.com".to_string()),
        ]);
        let form = RegistrationForm::from_data(&data).unwrap();
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.password, "");
    }

    #[test]
    fn test_from_data_rejects_unknown_field() {
        let data = HashMap::from([("username".to_string(), "ada".to_string())]);
        let err = RegistrationForm::from_data(&data).unwrap_err();
        assert!(matches!(err, FormError::UnknownField(name) if name == "username"));
    }

    #[test]
    fn test_form_trait_validate() {
        let config = FormConfig::default();
        let errors = RegistrationForm::new().validate(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_field_def_builder() {
        let def = FormFieldDef::new(Field::FirstName)
            .required()
            .validator(RequiredValidator::new())
            .help_text("Tel qu'il apparaît sur vos papiers")
            .attr("autocomplete", "given-name");

        assert_eq!(def.name(), "firstName");
        assert_eq!(def.label, "Prénom");
        assert!(def.required);
        assert_eq!(def.validators.len(), 1);
        assert_eq!(def.attrs.get("autocomplete").map(String::as_str), Some("given-name"));
    }

    #[test]
    fn test_check_runs_validators_before_match() {
        let def = FormFieldDef::new(Field::ConfirmPassword)
            .validator(RequiredValidator::with_message("required"))
            .must_match(Field::Password, "mismatch");

        let form = RegistrationForm::new().with(Field::Password, "abcdef");
        assert_eq!(def.check(&form).as_deref(), Some("required"));

        let form = form.with(Field::ConfirmPassword, "abcdeg");
        assert_eq!(def.check(&form).as_deref(), Some("mismatch"));

        let form = form.with(Field::ConfirmPassword, "abcdef");
        assert_eq!(def.check(&form), None);
    }

    #[test]
    fn test_form_builder() {
        let fields = FormBuilder::new()
            .field(FormFieldDef::new(Field::FirstName).required())
            .field(FormFieldDef::new(Field::Email))
            .build();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].field, Field::FirstName);
        assert_eq!(fields[1].field, Field::Email);
    }
}
