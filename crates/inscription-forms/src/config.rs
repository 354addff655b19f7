//! Form configuration.
//!
//! Every key is optional; an empty JSON object yields the defaults, which
//! reproduce the French registration page:
//!
//! ```json
//! {
//!   "minPasswordLength": 6,
//!   "confirmationPolicy": "mismatchOnly",
//!   "presentation": "bootstrap",
//!   "messages": { "emailInvalid": "Adresse e-mail invalide." }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::render::Presentation;
use crate::validation::ConfirmationPolicy;

/// Default minimum password length.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// User-facing validation messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Messages {
    pub first_name_required: String,
    pub last_name_required: String,
    pub email_required: String,
    pub email_invalid: String,
    pub password_required: String,
    /// `{min}` is replaced by the configured minimum length.
    pub password_too_short: String,
    pub confirm_password_required: String,
    pub password_mismatch: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            first_name_required: "Le prénom est obligatoire.".to_string(),
            last_name_required: "Le nom est obligatoire.".to_string(),
            email_required: "L'adresse e-mail est obligatoire.".to_string(),
            email_invalid: "Adresse e-mail invalide.".to_string(),
            password_required: "Le mot de passe est obligatoire.".to_string(),
            password_too_short: "Le mot de passe doit contenir au moins {min} caractères."
                .to_string(),
            confirm_password_required: "La confirmation du mot de passe est obligatoire."
                .to_string(),
            password_mismatch: "Les mots de passe ne correspondent pas.".to_string(),
        }
    }
}

impl Messages {
    /// Renders the too-short message for the given minimum length.
    pub fn password_too_short(&self, min_length: usize) -> String {
        self.password_too_short
            .replace("{min}", &min_length.to_string())
    }
}

/// Configuration of the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FormConfig {
    /// Minimum password length, in characters.
    pub min_password_length: usize,
    /// How an empty confirmation field is reported.
    pub confirmation_policy: ConfirmationPolicy,
    /// Which presentation layer renders the page.
    pub presentation: Presentation,
    /// Validation messages.
    pub messages: Messages,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            confirmation_policy: ConfirmationPolicy::default(),
            presentation: Presentation::default(),
            messages: Messages::default(),
        }
    }
}

impl FormConfig {
    /// Parses and checks a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Reads and checks a configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loaded form configuration");
        Self::from_json_str(&contents)
    }

    /// Sets the confirmation policy.
    #[must_use]
    pub fn confirmation_policy(mut self, policy: ConfirmationPolicy) -> Self {
        self.confirmation_policy = policy;
        self
    }

    /// Sets the presentation layer.
    #[must_use]
    pub fn presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Sets the minimum password length.
    #[must_use]
    pub fn min_password_length(mut self, min_length: usize) -> Self {
        self.min_password_length = min_length;
        self
    }

    fn check(&self) -> Result<()> {
        if self.min_password_length == 0 {
            return Err(FormError::Config(
                "minPasswordLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_object_yields_defaults() {
        let config = FormConfig::from_json_str("{}").unwrap();
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.min_password_length, 6);
        assert_eq!(config.confirmation_policy, ConfirmationPolicy::MismatchOnly);
        assert_eq!(config.presentation, Presentation::Bootstrap);
    }

    #[test]
    fn test_partial_messages_keep_other_defaults() {
        let config = FormConfig::from_json_str(
            r#"{"confirmationPolicy":"requiredThenMismatch","messages":{"emailInvalid":"Bad email."}}"#,
        )
        .unwrap();
        assert_eq!(
            config.confirmation_policy,
            ConfirmationPolicy::RequiredThenMismatch
        );
        assert_eq!(config.messages.email_invalid, "Bad email.");
        assert_eq!(config.messages.last_name_required, "Le nom est obligatoire.");
    }

    #[test]
    fn test_zero_min_length_rejected() {
        let err = FormConfig::from_json_str(r#"{"minPasswordLength":0}"#).unwrap_err();
        assert!(matches!(err, FormError::Config(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FormConfig::from_json_str(r#"{"minLength":8}"#).unwrap_err();
        assert!(matches!(err, FormError::Json(_)));
    }

    #[test]
    fn test_too_short_message_uses_min_length() {
        let messages = Messages::default();
        assert_eq!(
            messages.password_too_short(6),
            "Le mot de passe doit contenir au moins 6 caractères."
        );
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"minPasswordLength":10,"presentation":"plain"}}"#).unwrap();

        let config = FormConfig::from_path(file.path()).unwrap();
        assert_eq!(config.min_password_length, 10);
        assert_eq!(config.presentation, Presentation::Plain);
    }

    #[test]
    fn test_from_missing_path() {
        let err = FormConfig::from_path("/nonexistent/inscription.json").unwrap_err();
        assert!(matches!(err, FormError::Io(_)));
    }
}
