use crate::form_field::FormField;
use serde::{Deserialize, Serialize};

/// The in-progress contest entry, one string per form input.
///
/// `spidr_pin` is always stored in its formatted, dashed form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub guess: String,
    pub spidr_pin: String,
}

impl ContactSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Phone => &self.phone,
            FormField::Email => &self.email,
            FormField::Guess => &self.guess,
            FormField::SpidrPin => &self.spidr_pin,
        }
    }

    /// Replace the stored value of `field`. No formatting is applied here.
    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Phone => &mut self.phone,
            FormField::Email => &mut self.email,
            FormField::Guess => &mut self.guess,
            FormField::SpidrPin => &mut self.spidr_pin,
        };
        *slot = value;
    }

    /// Fields with no value at all, in form order. Whitespace counts as a value.
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_empty())
            .collect()
    }
}
