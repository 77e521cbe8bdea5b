use models::ContactSubmission;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkError {
    pub message: String,
}

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

impl std::error::Error for SinkError {}

impl From<serde_json::Error> for SinkError {
    fn from(e: serde_json::Error) -> Self {
        SinkError {
            message: format!("failed to serialize submission: {e}"),
        }
    }
}

/// Receives a submission that passed validation.
///
/// Today this only logs. A backend client would implement it to send the
/// entry over the network instead.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SinkError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(&self, submission: &ContactSubmission) -> Result<(), SinkError> {
        let form_data = serde_json::to_string(submission)?;
        tracing::info!(form_data = %form_data, "Form Data");
        Ok(())
    }
}
