use super::field_validators::FieldValidator;
use super::input_validator::{InputValidator, ValidationErrors};
use models::ContactSubmission;

/// Run every field rule against `data` and collect all failures.
///
/// The result is built from scratch on each call. Names are not checked here.
pub fn validate_submission(data: &ContactSubmission) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    FieldValidator::validate_email(&data.email, &mut errors);
    FieldValidator::validate_phone(&data.phone, &mut errors);
    FieldValidator::validate_spidr_pin(&data.spidr_pin, &mut errors);
    FieldValidator::validate_guess(&data.guess, &mut errors);

    errors
}

impl InputValidator for ContactSubmission {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let errors = validate_submission(self);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
