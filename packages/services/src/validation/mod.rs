pub mod field_validators;
pub mod input_validator;
pub mod pin;
pub mod submission;

// Re-export common types and functions
pub use field_validators::FieldValidator;
pub use input_validator::{InputValidator, ValidationErrors, ValidationErrorsExt};
pub use pin::format_spidr_pin;
pub use submission::validate_submission;
