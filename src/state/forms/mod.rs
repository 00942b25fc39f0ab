//! Contact form domain layer
//!
//! Field values, validation errors and the submission lifecycle for the
//! contact section.

mod errors;
mod field;
mod form_state;

pub use field::{ContactField, FormFields, ServiceOption};
pub use form_state::{
    ContactForm, Form, FormFocus, SubmissionLifecycle, SubmitOutcome, DEFAULT_RESET_DWELL,
};
