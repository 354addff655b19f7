//! Registration form field identities.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// One named string input of the registration form.
///
/// Variants are declared in display order, which is also their sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: [Self; 5] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Password,
        Self::ConfirmPassword,
    ];

    /// Returns the field name used in HTML `name` attributes and JSON keys.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "Prénom",
            Self::LastName => "Nom",
            Self::Email => "Adresse e-mail",
            Self::Password => "Mot de passe",
            Self::ConfirmPassword => "Confirmer le mot de passe",
        }
    }

    /// Returns the HTML input type.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
            Self::FirstName | Self::LastName => "text",
        }
    }

    /// Returns whether the rendered input must never echo its value.
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
