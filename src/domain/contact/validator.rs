//! Per-field validation rules.

use once_cell::sync::Lazy;
use regex::Regex;

use super::field::{FieldError, FieldKind, FieldName};

/// Minimum message length, in UTF-16 code units as a browser counts them.
pub const MIN_MESSAGE_LENGTH: usize = 10;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s()\-]{10,}$").expect("phone pattern compiles"));

/// The checks that apply to one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub kind: FieldKind,
    pub required: bool,
    pub min_length: Option<usize>,
}

impl FieldRule {
    pub fn for_field(field: FieldName) -> Self {
        Self {
            kind: field.kind(),
            required: field.is_required(),
            min_length: (field == FieldName::Message).then_some(MIN_MESSAGE_LENGTH),
        }
    }

    /// Runs every check in order against the trimmed value. When several
    /// fail, the last failing check decides the message.
    pub fn check(&self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        let mut error = None;

        if self.required && value.is_empty() {
            error = Some(FieldError::Required);
        }
        if self.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
            error = Some(FieldError::InvalidEmail);
        }
        if self.kind == FieldKind::Tel && !value.is_empty() && !is_valid_phone(value) {
            error = Some(FieldError::InvalidPhone);
        }
        if let Some(min) = self.min_length {
            if !value.is_empty() && value.encode_utf16().count() < min {
                error = Some(FieldError::MessageTooShort);
            }
        }

        match error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Validates `raw` with the rule for `field`.
pub fn validate_field(field: FieldName, raw: &str) -> Result<(), FieldError> {
    FieldRule::for_field(field).check(raw)
}

/// `local@domain.tld`: no whitespace, an `@`, and a `.` after it.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Optional leading `+`, then ten or more digits, spaces, hyphens or
/// parentheses.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}
