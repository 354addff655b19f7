//! Output sinks receiving successfully validated submissions.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::form::RegistrationForm;

/// A validated snapshot handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// The complete form snapshot.
    pub form: RegistrationForm,
    /// When the submission was accepted.
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Wraps a snapshot, stamped with the current time.
    pub fn new(form: RegistrationForm) -> Self {
        Self {
            form,
            submitted_at: Utc::now(),
        }
    }
}

/// Destination of successful submissions.
pub trait SubmissionSink {
    /// Receives one validated submission.
    fn accept(&mut self, submission: &Submission) -> Result<()>;
}

impl<S: SubmissionSink + ?Sized> SubmissionSink for Box<S> {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        (**self).accept(submission)
    }
}

/// Logs submissions through `tracing`. Passwords are never logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        let form = &submission.form;
        info!(
            first_name = %form.first_name,
            last_name = %form.last_name,
            email = %form.email,
            submitted_at = %submission.submitted_at.to_rfc3339(),
            "Inscription réussie"
        );
        Ok(())
    }
}

/// Writes each submission as one line of JSON.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SubmissionSink for JsonLinesSink<W> {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        serde_json::to_writer(&mut self.writer, submission)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps submissions in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Accepted submissions, oldest first.
    pub submissions: Vec<Submission>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubmissionSink for MemorySink {
    fn accept(&mut self, submission: &Submission) -> Result<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}
