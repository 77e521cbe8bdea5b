use models::FormField;
use std::collections::HashMap;

/// Failing fields mapped to the message shown beneath them.
///
/// A field is present only while it fails validation, and carries exactly one
/// message.
pub type ValidationErrors = HashMap<FormField, String>;

pub trait InputValidator {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

// Helper trait for building and reading validation errors
pub trait ValidationErrorsExt {
    fn add_error(&mut self, field: FormField, message: &str);
    fn failing_fields(&self) -> Vec<FormField>;
}

impl ValidationErrorsExt for ValidationErrors {
    /// Records `message` for `field` unless the field already has one.
    fn add_error(&mut self, field: FormField, message: &str) {
        self.entry(field).or_insert_with(|| message.to_string());
    }

    /// Failing fields in form order.
    fn failing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.contains_key(field))
            .collect()
    }
}
