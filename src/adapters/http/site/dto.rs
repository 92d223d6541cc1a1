//! HTTP DTOs for site endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::application::{SubmitContactCommand, UpdateConfigResult};
use crate::domain::contact::{FieldError, FieldName, FormMessage, MessageKind};
use crate::domain::foundation::DomainError;
use crate::domain::interaction::{ClickTarget, PageEffect, PageInteractions, ScrollBehavior};
use crate::domain::page::SectionBounds;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Contact form submission. Missing fields count as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub message: String,
}

impl From<ContactRequest> for SubmitContactCommand {
    fn from(req: ContactRequest) -> Self {
        SubmitContactCommand {
            values: BTreeMap::from([
                (FieldName::FirstName, req.first_name),
                (FieldName::LastName, req.last_name),
                (FieldName::Email, req.email),
                (FieldName::Phone, req.phone),
                (FieldName::Service, req.service),
                (FieldName::Message, req.message),
            ]),
        }
    }
}

/// Where a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickTargetDto {
    MenuPanel,
    MenuToggle,
    OverlayBackdrop,
    OverlayContent,
    OverlayCloseButton,
    OverlayFooterCloseButton,
    Elsewhere,
}

impl From<ClickTargetDto> for ClickTarget {
    fn from(dto: ClickTargetDto) -> Self {
        match dto {
            ClickTargetDto::MenuPanel => ClickTarget::MenuPanel,
            ClickTargetDto::MenuToggle => ClickTarget::MenuToggle,
            ClickTargetDto::OverlayBackdrop => ClickTarget::OverlayBackdrop,
            ClickTargetDto::OverlayContent => ClickTarget::OverlayContent,
            ClickTargetDto::OverlayCloseButton => ClickTarget::OverlayCloseButton,
            ClickTargetDto::OverlayFooterCloseButton => ClickTarget::OverlayFooterCloseButton,
            ClickTargetDto::Elsewhere => ClickTarget::Elsewhere,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionBoundsDto {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl From<SectionBoundsDto> for SectionBounds {
    fn from(dto: SectionBoundsDto) -> Self {
        SectionBounds::new(dto.id, dto.top, dto.height)
    }
}

/// A page event reported by the browser.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PageEventRequest {
    Layout {
        sections: Vec<SectionBoundsDto>,
        #[serde(default)]
        nav_height: Option<f64>,
    },
    Scrolled {
        y: f64,
    },
    Resized {
        width: f64,
    },
    MenuToggle,
    Click {
        target: ClickTargetDto,
    },
    Key {
        key: String,
    },
    NavLink {
        section: String,
    },
    HeroButton {
        href: String,
    },
    /// Click on the `index`th child of a list slot.
    Activate {
        slot: String,
        index: usize,
    },
    FieldInput {
        field: FieldName,
        value: String,
    },
    FieldBlur {
        field: FieldName,
    },
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response after merging a partial document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigResponse {
    pub revision: u64,
    pub replaced_keys: Vec<String>,
    pub slots_written: usize,
    pub slots_skipped: Vec<String>,
}

impl From<UpdateConfigResult> for UpdateConfigResponse {
    fn from(result: UpdateConfigResult) -> Self {
        Self {
            revision: result.revision,
            replaced_keys: result.replaced_keys.iter().map(|k| k.to_string()).collect(),
            slots_written: result.report.written.len(),
            slots_skipped: result
                .report
                .skipped
                .iter()
                .map(|s| s.element_id().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub message: String,
    pub kind: String,
}

impl From<FormMessage> for ContactResponse {
    fn from(message: FormMessage) -> Self {
        Self {
            message: message.text,
            kind: match message.kind {
                MessageKind::Success => "success".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollEffectDto {
    pub section: String,
    pub top: f64,
    pub behavior: String,
}

impl From<PageEffect> for ScrollEffectDto {
    fn from(effect: PageEffect) -> Self {
        match effect {
            PageEffect::ScrollTo(request) => Self {
                section: request.section.to_string(),
                top: request.top,
                behavior: match request.behavior {
                    ScrollBehavior::Smooth => "smooth".to_string(),
                },
            },
        }
    }
}

/// Interaction state after an event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageStateDto {
    pub scrolled: bool,
    pub active_link: Option<String>,
    pub menu_open: bool,
    pub overlay_open: bool,
    pub overlay_service: Option<String>,
    pub scroll_locked: bool,
}

impl From<&PageInteractions> for PageStateDto {
    fn from(page: &PageInteractions) -> Self {
        Self {
            scrolled: page.navigation().is_scrolled(),
            active_link: page.navigation().active_link().map(|s| s.to_string()),
            menu_open: page.menu().is_open(),
            overlay_open: page.overlay().is_open(),
            overlay_service: page
                .overlay()
                .service()
                .map(|s| s.title_text().to_string()),
            scroll_locked: page.is_scroll_locked(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEventResponse {
    pub effects: Vec<ScrollEffectDto>,
    pub state: PageStateDto,
    /// Field errors after a field event, keyed by field name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub field_errors: BTreeMap<FieldName, String>,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Validation failure carrying one message per failing field.
    pub fn invalid_fields(errors: &BTreeMap<FieldName, FieldError>) -> Self {
        let fields: serde_json::Map<String, serde_json::Value> = errors
            .iter()
            .map(|(field, error)| (field.to_string(), serde_json::Value::from(error.to_string())))
            .collect();
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: "Please correct the highlighted fields".to_string(),
            details: Some(serde_json::json!({ "fields": fields })),
        }
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        Self {
            code: err.code.to_string(),
            message: err.message,
            details: (!err.details.is_empty())
                .then(|| serde_json::to_value(&err.details).unwrap_or_default()),
        }
    }
}
