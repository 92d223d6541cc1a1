//! Contact form state: field values and marks, submit control, message.
//!
//! Submission is two-phase. [`ContactForm::begin_submission`] validates and
//! disables the submit control; after the simulated latency the host calls
//! [`ContactForm::complete_submission`]. Nothing is sent anywhere.

use std::collections::BTreeMap;

use crate::domain::foundation::{StateMachine, Timestamp};

use super::field::{FieldError, FieldName};
use super::validator::validate_field;

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str =
    "Thank you for contacting us! We will get back to you within 24 hours.";

/// Ephemeral per-field state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    /// Visibly marked valid by the last passing validation.
    pub marked_valid: bool,
    /// At most one error; a newer one replaces it.
    pub error: Option<FieldError>,
}

impl FieldState {
    pub fn is_marked_invalid(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
}

impl StateMachine for SubmissionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SubmissionStatus::*;
        matches!((self, target), (Idle, Sending) | (Sending, Idle))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SubmissionStatus::*;
        match self {
            Idle => vec![Sending],
            Sending => vec![Idle],
        }
    }
}

/// The submit button as the page shows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitControl {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
}

/// Status message shown above the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
    pub visible: bool,
}

/// Why a submission did not start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejected {
    /// One or more required fields failed; all marks have been updated.
    Invalid(BTreeMap<FieldName, FieldError>),
    /// A previous submission is still waiting out its delay.
    AlreadySending,
}

/// Proof that a submission started; redeemed by `complete_submission`.
#[derive(Debug)]
#[must_use = "a started submission must be completed"]
pub struct SubmissionTicket {
    original_label: String,
    started_at: Timestamp,
}

impl SubmissionTicket {
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: BTreeMap<FieldName, FieldState>,
    status: SubmissionStatus,
    submit: SubmitControl,
    message: Option<FormMessage>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled with `values`, nothing validated yet.
    pub fn with_values(values: impl IntoIterator<Item = (FieldName, String)>) -> Self {
        let mut form = Self::new();
        for (field, value) in values {
            form.field_mut(field).value = value;
        }
        form
    }

    pub fn field(&self, field: FieldName) -> Option<&FieldState> {
        self.fields.get(&field)
    }

    pub fn value(&self, field: FieldName) -> &str {
        self.fields.get(&field).map(|s| s.value.as_str()).unwrap_or_default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    /// Current errors, by field.
    pub fn errors(&self) -> BTreeMap<FieldName, FieldError> {
        self.fields
            .iter()
            .filter_map(|(name, state)| state.error.map(|e| (*name, e)))
            .collect()
    }

    /// User typed into `field`: store the value and clear its error.
    pub fn input(&mut self, field: FieldName, value: impl Into<String>) {
        let state = self.field_mut(field);
        state.value = value.into();
        state.error = None;
    }

    /// Focus left `field`: re-run its validation.
    pub fn blur(&mut self, field: FieldName) -> bool {
        self.validate(field)
    }

    /// Validates one field and updates its marks.
    pub fn validate(&mut self, field: FieldName) -> bool {
        let state = self.field_mut(field);
        state.error = None;
        match validate_field(field, &state.value) {
            Ok(()) => {
                state.marked_valid = true;
                true
            }
            Err(err) => {
                state.marked_valid = false;
                state.error = Some(err);
                false
            }
        }
    }

    /// Validates every required field, without stopping at the first
    /// failure, so every field's marks are current.
    pub fn validate_all(&mut self) -> bool {
        FieldName::REQUIRED
            .iter()
            .fold(true, |all_valid, field| self.validate(*field) && all_valid)
    }

    pub fn begin_submission(&mut self) -> Result<SubmissionTicket, SubmitRejected> {
        if self.status == SubmissionStatus::Sending {
            return Err(SubmitRejected::AlreadySending);
        }
        if !self.validate_all() {
            return Err(SubmitRejected::Invalid(self.errors()));
        }
        self.status = self
            .status
            .transition_to(SubmissionStatus::Sending)
            .map_err(|_| SubmitRejected::AlreadySending)?;

        let original_label = std::mem::replace(&mut self.submit.label, SENDING_LABEL.to_string());
        self.submit.disabled = true;
        Ok(SubmissionTicket {
            original_label,
            started_at: Timestamp::now(),
        })
    }

    /// Shows the success message, clears the form and restores the submit
    /// control.
    pub fn complete_submission(&mut self, ticket: SubmissionTicket) -> &FormMessage {
        self.reset();
        self.submit = SubmitControl {
            label: ticket.original_label,
            disabled: false,
        };
        self.status = SubmissionStatus::Idle;
        self.message.insert(FormMessage {
            text: SUCCESS_MESSAGE.to_string(),
            kind: MessageKind::Success,
            visible: true,
        })
    }

    /// Hides the status message, if any.
    pub fn hide_message(&mut self) {
        if let Some(message) = self.message.as_mut() {
            message.visible = false;
        }
    }

    /// Clears every value and every mark.
    pub fn reset(&mut self) {
        self.fields.clear();
    }

    fn field_mut(&mut self, field: FieldName) -> &mut FieldState {
        self.fields.entry(field).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm::with_values([
            (FieldName::FirstName, "Ada".to_string()),
            (FieldName::LastName, "Lovelace".to_string()),
            (FieldName::Email, "ada@example.com".to_string()),
            (FieldName::Message, "I need help with a contract.".to_string()),
        ])
    }

    #[test]
    fn blur_marks_valid_and_invalid() {
        let mut form = ContactForm::new();
        form.input(FieldName::Email, "a@b");
        assert!(!form.blur(FieldName::Email));
        let state = form.field(FieldName::Email).unwrap();
        assert_eq!(state.error, Some(FieldError::InvalidEmail));
        assert!(!state.marked_valid);

        form.input(FieldName::Email, "a@b.c");
        assert!(form.blur(FieldName::Email));
        let state = form.field(FieldName::Email).unwrap();
        assert!(state.error.is_none());
        assert!(state.marked_valid);
    }

    #[test]
    fn input_clears_error_but_keeps_valid_mark() {
        let mut form = ContactForm::new();
        form.input(FieldName::FirstName, "");
        form.blur(FieldName::FirstName);
        assert!(form.field(FieldName::FirstName).unwrap().is_marked_invalid());

        form.input(FieldName::FirstName, "A");
        assert!(!form.field(FieldName::FirstName).unwrap().is_marked_invalid());

        form.blur(FieldName::FirstName);
        form.input(FieldName::FirstName, "Ad");
        assert!(form.field(FieldName::FirstName).unwrap().marked_valid);
    }

    #[test]
    fn validate_all_does_not_short_circuit() {
        let mut form = ContactForm::new();
        assert!(!form.validate_all());

        let errors = form.errors();
        assert_eq!(errors.len(), 4);
        assert!(errors.values().all(|e| *e == FieldError::Required));
        assert!(form.field(FieldName::Phone).is_none());
    }

    #[test]
    fn validate_all_ignores_optional_fields() {
        let mut form = filled();
        form.input(FieldName::Phone, "123");
        assert!(form.validate_all());
    }

    #[test]
    fn invalid_submission_reports_errors_and_keeps_control() {
        let mut form = filled();
        form.input(FieldName::Message, "short");

        match form.begin_submission() {
            Err(SubmitRejected::Invalid(errors)) => {
                assert_eq!(errors.get(&FieldName::Message), Some(&FieldError::MessageTooShort));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(form.submit_control(), &SubmitControl::default());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn submission_lifecycle() {
        let mut form = filled();

        let ticket = form.begin_submission().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Sending);
        assert_eq!(form.submit_control().label, SENDING_LABEL);
        assert!(form.submit_control().disabled);
        assert!(matches!(
            form.begin_submission(),
            Err(SubmitRejected::AlreadySending)
        ));

        let message = form.complete_submission(ticket).clone();
        assert_eq!(message.text, SUCCESS_MESSAGE);
        assert!(message.visible);
        assert_eq!(form.submit_control(), &SubmitControl::default());
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.value(FieldName::FirstName), "");
        assert!(form.errors().is_empty());
        assert!(form.field(FieldName::Email).is_none());

        form.hide_message();
        assert!(!form.message().unwrap().visible);
    }
}
