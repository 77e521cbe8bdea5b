use models::{FormField, UnknownField};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use services::form::SubmitOutcome;
use services::validation::input_validator::ValidationErrorsExt;
use std::fmt;

/// One line of the replay input as written on the wire.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawEvent {
    Input { field: String, value: String },
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum FormEvent {
    Input { field: FormField, value: String },
    Submit,
}

#[derive(Debug)]
pub(super) enum EventParseError {
    Json(serde_json::Error),
    UnknownField(UnknownField),
}

impl fmt::Display for EventParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventParseError::Json(e) => write!(f, "malformed event: {}", e),
            EventParseError::UnknownField(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EventParseError {}

impl From<serde_json::Error> for EventParseError {
    fn from(e: serde_json::Error) -> Self {
        EventParseError::Json(e)
    }
}

impl From<UnknownField> for EventParseError {
    fn from(e: UnknownField) -> Self {
        EventParseError::UnknownField(e)
    }
}

pub(super) fn parse_event(line: &str) -> Result<FormEvent, EventParseError> {
    let event = match serde_json::from_str::<RawEvent>(line)? {
        RawEvent::Input { field, value } => FormEvent::Input {
            field: field.parse()?,
            value,
        },
        RawEvent::Submit => FormEvent::Submit,
    };
    Ok(event)
}

/// JSON line reported on stdout after a submit.
pub(super) fn outcome_to_json(outcome: &SubmitOutcome) -> Value {
    match outcome {
        SubmitOutcome::Accepted(_) => json!({ "status": "accepted" }),
        SubmitOutcome::Rejected(errors) => {
            let mut map = Map::new();
            for field in errors.failing_fields() {
                if let Some(message) = errors.get(&field) {
                    map.insert(field.to_string(), Value::String(message.clone()));
                }
            }
            json!({ "status": "rejected", "errors": map })
        }
        SubmitOutcome::Incomplete(missing) => {
            let missing: Vec<&str> = missing.iter().map(FormField::as_str).collect();
            json!({ "status": "incomplete", "missing": missing })
        }
        SubmitOutcome::Failed(e) => json!({ "status": "failed", "error": e.message }),
    }
}
