//! Contact form fields and their validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Input type of a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

/// The contact form's controls, in markup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Service,
        FieldName::Message,
    ];

    /// The fields whole-form validation checks.
    pub const REQUIRED: [FieldName; 4] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Service => "service",
            FieldName::Message => "message",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FieldName::FirstName | FieldName::LastName => FieldKind::Text,
            FieldName::Email => FieldKind::Email,
            FieldName::Phone => FieldKind::Tel,
            FieldName::Service => FieldKind::Select,
            FieldName::Message => FieldKind::TextArea,
        }
    }

    pub fn is_required(&self) -> bool {
        Self::REQUIRED.contains(self)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| {
                DomainError::new(ErrorCode::UnknownField, format!("Unknown form field: {}", s))
            })
    }
}

/// The advisory message shown under a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid phone number")]
    InvalidPhone,

    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}
