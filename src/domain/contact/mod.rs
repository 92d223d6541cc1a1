//! Contact module - form fields, validation rules and the simulated
//! submission lifecycle.

mod field;
mod form;
mod validator;

pub use field::{FieldError, FieldKind, FieldName};
pub use form::{
    ContactForm, FieldState, FormMessage, MessageKind, SubmissionStatus, SubmissionTicket,
    SubmitControl, SubmitRejected, SENDING_LABEL, SUBMIT_LABEL, SUCCESS_MESSAGE,
};
pub use validator::{
    is_valid_email, is_valid_phone, validate_field, FieldRule, MIN_MESSAGE_LENGTH,
};
