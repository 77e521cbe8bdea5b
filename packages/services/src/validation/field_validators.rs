use super::input_validator::{ValidationErrors, ValidationErrorsExt};
use super::pin::{digit_count, PIN_DIGITS};
use models::FormField;
use regex::Regex;
use std::sync::LazyLock;

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number (10–15 digits).";
pub const SPIDR_PIN_MESSAGE: &str = "PIN must be exactly 16 digits.";
pub const GUESS_MESSAGE: &str = "Guess must be 0 or greater.";

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 15;

/// Something, an `@`, something, a dot, something. No whitespace and no
/// second `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digit_count(phone))
}

pub fn is_valid_spidr_pin(pin: &str) -> bool {
    digit_count(pin) == PIN_DIGITS
}

/// The guess must parse as a number that is not below zero.
pub fn is_valid_guess(guess: &str) -> bool {
    match guess.trim().parse::<f64>() {
        Ok(value) => !value.is_nan() && value >= 0.0,
        Err(_) => false,
    }
}

pub struct FieldValidator;

impl FieldValidator {
    pub fn validate_email(email: &str, errors: &mut ValidationErrors) {
        if !is_valid_email(email) {
            errors.add_error(FormField::Email, EMAIL_MESSAGE);
        }
    }

    pub fn validate_phone(phone: &str, errors: &mut ValidationErrors) {
        if !is_valid_phone(phone) {
            errors.add_error(FormField::Phone, PHONE_MESSAGE);
        }
    }

    pub fn validate_spidr_pin(pin: &str, errors: &mut ValidationErrors) {
        if !is_valid_spidr_pin(pin) {
            errors.add_error(FormField::SpidrPin, SPIDR_PIN_MESSAGE);
        }
    }

    pub fn validate_guess(guess: &str, errors: &mut ValidationErrors) {
        if !is_valid_guess(guess) {
            errors.add_error(FormField::Guess, GUESS_MESSAGE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        // accepted as-is, the check is shape only
        assert!(is_valid_email("a..b@c..d"));

        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("\"quoted name\"@b.com"));
    }

    #[test]
    fn test_phone_digit_range() {
        assert!(is_valid_phone("5551234567"));
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("+44 20 7946 0958 123"));
        assert!(is_valid_phone("123456789012345"));

        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("555-123-456"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_spidr_pin_digit_count() {
        assert!(is_valid_spidr_pin("1234-5678-9012-3456"));
        assert!(is_valid_spidr_pin("1234567890123456"));

        assert!(!is_valid_spidr_pin("123"));
        assert!(!is_valid_spidr_pin("1234-5678-9012-345"));
        assert!(!is_valid_spidr_pin("12345678901234567"));
    }

    #[test]
    fn test_guess_is_non_negative_number() {
        assert!(is_valid_guess("42"));
        assert!(is_valid_guess("0"));
        assert!(is_valid_guess("-0"));
        assert!(is_valid_guess("19.99"));
        assert!(is_valid_guess(" 7 "));
        assert!(is_valid_guess("1e3"));

        assert!(!is_valid_guess("-1"));
        assert!(!is_valid_guess("-0.01"));
        assert!(!is_valid_guess("abc"));
        assert!(!is_valid_guess(""));
        assert!(!is_valid_guess("NaN"));
        assert!(!is_valid_guess("-Infinity"));
    }

    #[test]
    fn test_guess_accepts_unbounded_numbers() {
        assert!(is_valid_guess("1e400"));
        assert!(is_valid_guess("Infinity"));
        assert!(is_valid_guess("inf"));
    }

    #[test]
    fn test_field_validator_messages() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_email("bad", &mut errors);
        FieldValidator::validate_phone("12345", &mut errors);
        FieldValidator::validate_spidr_pin("123", &mut errors);
        FieldValidator::validate_guess("-1", &mut errors);

        assert_eq!(errors[&FormField::Email], "Please enter a valid email address.");
        assert_eq!(
            errors[&FormField::Phone],
            "Please enter a valid phone number (10–15 digits)."
        );
        assert_eq!(errors[&FormField::SpidrPin], "PIN must be exactly 16 digits.");
        assert_eq!(errors[&FormField::Guess], "Guess must be 0 or greater.");
    }

    #[test]
    fn test_field_validator_passes_silently() {
        let mut errors = ValidationErrors::new();
        FieldValidator::validate_email("a@b.com", &mut errors);
        FieldValidator::validate_guess("42", &mut errors);

        assert!(errors.is_empty());
    }
}
