use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one input of the contest entry form.
///
/// The string form is the camelCase name the form uses on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Phone,
    Email,
    Guess,
    SpidrPin,
}

impl FormField {
    /// All fields in the order they appear on the form.
    pub const ALL: [FormField; 6] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Phone,
        FormField::Email,
        FormField::Guess,
        FormField::SpidrPin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Phone => "phone",
            FormField::Email => "email",
            FormField::Guess => "guess",
            FormField::SpidrPin => "spidrPin",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a field name does not match any input on the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown form field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
