pub mod contact_submission;
pub mod form_field;

pub use contact_submission::ContactSubmission;
pub use form_field::{FormField, UnknownField};
