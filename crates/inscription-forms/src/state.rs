//! Form state holder and event handling.
//!
//! [`FormState`] transitions are pure: they consume the old state and return
//! the new one. [`FormSession`] owns a state together with its validator and
//! sink, and is the only place where a submission leaves the form.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::FormConfig;
use crate::error::{Result, ValidationErrors};
use crate::field::Field;
use crate::form::RegistrationForm;
use crate::sink::{Submission, SubmissionSink};
use crate::validation::RegistrationValidator;

/// A UI event delivered to the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent {
    /// The user edited a field.
    FieldChanged {
        /// Edited field.
        field: Field,
        /// New value.
        value: String,
    },
    /// The user submitted the form.
    Submit,
}

impl FormEvent {
    /// Shorthand for a [`FormEvent::FieldChanged`] event.
    pub fn field_changed(field: Field, value: impl Into<String>) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

/// Current values, current messages, and whether the last submit succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Field values.
    pub form: RegistrationForm,
    /// Per-field messages from the last submit, minus fields edited since.
    pub errors: ValidationErrors,
    /// True exactly when the most recent submit found no errors.
    pub submitted: bool,
}

/// Result of applying an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The new state.
    pub state: FormState,
    /// Snapshot to forward to a sink, set only by a successful submit.
    pub submission: Option<RegistrationForm>,
}

impl FormState {
    /// Creates the initial state: empty fields, no errors, not submitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces a field's value and clears its message.
    ///
    /// No validation runs here, and `submitted` is left as is: only another
    /// submit changes it.
    #[must_use]
    pub fn set_field(mut self, field: Field, value: impl Into<String>) -> Self {
        self.form.set(field, value);
        if self.errors.clear_field(field).is_some() {
            debug!(%field, "cleared field error on edit");
        }
        self
    }

    /// Validates the current snapshot and records the outcome.
    pub fn submit(mut self, validator: &RegistrationValidator) -> Transition {
        self.errors = validator.validate(&self.form);
        self.submitted = self.errors.is_empty();

        let submission = if self.submitted {
            Some(self.form.clone())
        } else {
            debug!(invalid_fields = self.errors.len(), "submit rejected");
            None
        };

        Transition {
            state: self,
            submission,
        }
    }

    /// Applies one event.
    pub fn apply(self, event: FormEvent, validator: &RegistrationValidator) -> Transition {
        match event {
            FormEvent::FieldChanged { field, value } => Transition {
                state: self.set_field(field, value),
                submission: None,
            },
            FormEvent::Submit => self.submit(validator),
        }
    }
}

/// Exclusive owner of a form's state, validator and output sink.
#[derive(Debug)]
pub struct FormSession<S> {
    state: FormState,
    validator: RegistrationValidator,
    sink: S,
}

impl<S: SubmissionSink> FormSession<S> {
    /// Creates a session in the initial state.
    pub fn new(config: &FormConfig, sink: S) -> Self {
        Self::with_validator(RegistrationValidator::new(config), sink)
    }

    /// Creates a session with an explicit validator.
    pub fn with_validator(validator: RegistrationValidator, sink: S) -> Self {
        Self {
            state: FormState::new(),
            validator,
            sink,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the validator.
    pub fn validator(&self) -> &RegistrationValidator {
        &self.validator
    }

    /// Returns the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consumes the session, returning its state and sink.
    pub fn into_parts(self) -> (FormState, S) {
        (self.state, self.sink)
    }

    /// Applies an event, forwarding a successful submission to the sink.
    ///
    /// The new state is committed before the sink runs; a sink error is
    /// returned but does not roll the state back.
    pub fn dispatch(&mut self, event: FormEvent) -> Result<&FormState> {
        let transition = std::mem::take(&mut self.state).apply(event, &self.validator);
        self.state = transition.state;

        if let Some(form) = transition.submission {
            debug!(email = %form.email, "registration accepted");
            self.sink.accept(&Submission::new(form))?;
        }

        Ok(&self.state)
    }

    /// Dispatches a field edit.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<&FormState> {
        self.dispatch(FormEvent::field_changed(field, value))
    }

    /// Dispatches a submit.
    pub fn submit(&mut self) -> Result<&FormState> {
        self.dispatch(FormEvent::Submit)
    }
}
