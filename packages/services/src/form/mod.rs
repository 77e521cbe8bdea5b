pub mod sink;

pub use sink::{LoggingSink, SinkError, SubmissionSink};

use crate::validation::input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
use crate::validation::pin::format_spidr_pin;
use models::{ContactSubmission, FormField};

/// Result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Every check passed and the sink took the entry.
    Accepted(ContactSubmission),
    /// At least one field failed validation.
    Rejected(ValidationErrors),
    /// Required fields were left blank, so validation did not run.
    Incomplete(Vec<FormField>),
    /// Validation passed but the sink could not take the entry.
    Failed(SinkError),
}

/// State of one contest entry form for the lifetime of the component.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    data: ContactSubmission,
    errors: ValidationErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> &ContactSubmission {
        &self.data
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Store a new value for `field`. PIN input is reformatted before it is
    /// stored. Errors are left alone until the next submit.
    pub fn handle_change(&mut self, field: FormField, value: &str) {
        let value = match field {
            FormField::SpidrPin => format_spidr_pin(value),
            _ => value.to_string(),
        };
        tracing::debug!(field = %field, "form field changed");
        self.data.set(field, value);
    }

    pub fn handle_submit(&mut self, sink: &dyn SubmissionSink) -> SubmitOutcome {
        let missing = self.data.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(missing = ?missing, "submit blocked by required fields");
            return SubmitOutcome::Incomplete(missing);
        }

        if let Err(errors) = self.data.validate() {
            tracing::warn!(fields = ?errors.failing_fields(), "submission rejected");
            self.errors = errors;
            return SubmitOutcome::Rejected(self.errors.clone());
        }
        self.errors.clear();

        match sink.submit(&self.data) {
            Ok(()) => SubmitOutcome::Accepted(self.data.clone()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deliver submission");
                SubmitOutcome::Failed(e)
            }
        }
    }
}
