//! # inscription-forms
//!
//! Registration form state, validation and rendering.
//!
//! This crate provides:
//! - The five-field registration record and its field definitions
//! - A pure validator mapping a snapshot to per-field messages
//! - An explicit state holder driven by UI events
//! - Output sinks receiving successful submissions
//! - Two presentation layers: Bootstrap 5 and hand-styled HTML
//!
//! ## Quick Start
//!
//! ```rust
//! use inscription_forms::{Field, FormConfig, FormSession, MemorySink};
//!
//! let mut session = FormSession::new(&FormConfig::default(), MemorySink::new());
//!
//! // Submitting an empty form reports every required field.
//! let state = session.submit().unwrap();
//! assert!(!state.submitted);
//! assert!(state.errors.contains(Field::Email));
//!
//! session.set_field(Field::FirstName, "Ada").unwrap();
//! session.set_field(Field::LastName, "Lovelace").unwrap();
//! session.set_field(Field::Email, "ada@example.com").unwrap();
//! session.set_field(Field::Password, "secret1").unwrap();
//! session.set_field(Field::ConfirmPassword, "secret1").unwrap();
//!
//! let state = session.submit().unwrap();
//! assert!(state.submitted);
//! assert_eq!(session.sink().submissions.len(), 1);
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use inscription_forms::{Field, RegistrationForm, RegistrationValidator};
//!
//! let form = RegistrationForm::new()
//!     .with(Field::FirstName, "A")
//!     .with(Field::LastName, "B")
//!     .with(Field::Email, "bad-email")
//!     .with(Field::Password, "123456")
//!     .with(Field::ConfirmPassword, "123456");
//!
//! let errors = RegistrationValidator::default().validate(&form);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors.get(Field::Email), Some("Adresse e-mail invalide."));
//! ```
//!
//! ## Rendering
//!
//! ```rust
//! use inscription_forms::{render_page, FormConfig, FormState, Presentation};
//!
//! let config = FormConfig::default().presentation(Presentation::Plain);
//! let html = render_page(&FormState::new(), &config);
//! assert!(html.contains("S’inscrire"));
//! ```

mod config;
mod error;
mod field;
pub mod fields;
mod form;
mod render;
mod sink;
mod state;
pub mod validation;
pub mod widgets;

pub use config::{FormConfig, Messages, DEFAULT_MIN_PASSWORD_LENGTH};
pub use error::{FormError, Result, ValidationErrors};
pub use field::Field;
pub use form::{Form, FormBuilder, FormFieldDef, MatchRule, RegistrationForm};
pub use render::{
    render_bootstrap_field, render_bootstrap_form, render_bootstrap_page, render_page,
    render_plain_field, render_plain_form, render_plain_page, Presentation,
};
pub use sink::{JsonLinesSink, MemorySink, Submission, SubmissionSink, TracingSink};
pub use state::{FormEvent, FormSession, FormState, Transition};
pub use validation::{ConfirmationPolicy, RegistrationValidator};
