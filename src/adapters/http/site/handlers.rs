//! HTTP handlers for site endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use tokio::sync::Mutex;

use crate::adapters::surface::{HtmlPageRenderer, InMemorySurface, PageView};
use crate::application::{
    Site, SubmissionSettings, SubmitContactError, SubmitContactHandler,
};
use crate::domain::contact::FieldName;
use crate::domain::content::PartialContentDocument;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::interaction::{PageEffect, PageEvent};
use crate::domain::page::{SectionId, SlotId};

use super::dto::{
    ContactRequest, ContactResponse, ErrorResponse, PageEventRequest, PageEventResponse,
    PageStateDto, UpdateConfigResponse,
};

/// The single page session behind the server.
pub type SharedSite = Arc<Mutex<Site<InMemorySurface>>>;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

/// Application state for site endpoints.
#[derive(Clone)]
pub struct SiteAppState {
    pub site: SharedSite,
    pub contact_handler: Arc<SubmitContactHandler<InMemorySurface>>,
    pub renderer: HtmlPageRenderer,
}

impl SiteAppState {
    pub fn new(site: SharedSite, submission: SubmissionSettings) -> Self {
        Self {
            contact_handler: Arc::new(SubmitContactHandler::new(site.clone(), submission)),
            site,
            renderer: HtmlPageRenderer::new(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - The bound page
pub async fn render_page(State(state): State<SiteAppState>) -> Html<String> {
    let site = state.site.lock().await;
    Html(state.renderer.render(&PageView {
        surface: site.surface(),
        interactions: site.interactions(),
        form: site.form(),
        icons: site.icons(),
    }))
}

/// GET /data.json - The current content document
pub async fn get_document(State(state): State<SiteAppState>) -> Response {
    let site = state.site.lock().await;
    (StatusCode::OK, Json(site.document().clone())).into_response()
}

/// POST /api/config - Merge a partial document and re-bind
pub async fn update_config(
    State(state): State<SiteAppState>,
    Json(partial): Json<PartialContentDocument>,
) -> Response {
    let result = state.site.lock().await.update_config(partial);
    tracing::info!(revision = result.revision, "Content configuration updated");
    (StatusCode::OK, Json(UpdateConfigResponse::from(result))).into_response()
}

/// POST /api/contact - Submit the contact form
pub async fn submit_contact(
    State(state): State<SiteAppState>,
    Json(req): Json<ContactRequest>,
) -> Response {
    match state.contact_handler.handle(req.into()).await {
        Ok(result) => (StatusCode::OK, Json(ContactResponse::from(result.message))).into_response(),
        Err(e) => handle_contact_error(e),
    }
}

/// POST /api/events - Apply a page event
pub async fn page_event(
    State(state): State<SiteAppState>,
    Json(req): Json<PageEventRequest>,
) -> Response {
    let mut site = state.site.lock().await;

    match apply_event(&mut site, req) {
        Ok((effects, field_errors)) => {
            let response = PageEventResponse {
                effects: effects.into_iter().map(Into::into).collect(),
                state: PageStateDto::from(site.interactions()),
                field_errors,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_domain_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

type EventOutcome = (Vec<PageEffect>, BTreeMap<FieldName, String>);

fn apply_event(
    site: &mut Site<InMemorySurface>,
    req: PageEventRequest,
) -> Result<EventOutcome, DomainError> {
    let event = match req {
        PageEventRequest::Layout {
            sections,
            nav_height,
        } => {
            site.set_layout(sections.into_iter().map(Into::into).collect(), nav_height);
            return Ok(Default::default());
        }
        PageEventRequest::Activate { slot, index } => {
            let slot = SlotId::from_element_id(&slot).ok_or_else(|| {
                DomainError::new(ErrorCode::UnknownSlot, format!("Unknown slot: {}", slot))
                    .with_detail("slot", slot.as_str())
            })?;
            return Ok((site.activate(slot, index)?, BTreeMap::new()));
        }
        PageEventRequest::FieldInput { field, value } => {
            site.form_mut().input(field, value);
            return Ok(Default::default());
        }
        PageEventRequest::FieldBlur { field } => {
            site.form_mut().blur(field);
            let errors = site
                .form()
                .errors()
                .into_iter()
                .filter(|(name, _)| *name == field)
                .map(|(name, error)| (name, error.to_string()))
                .collect();
            return Ok((Vec::new(), errors));
        }
        PageEventRequest::Scrolled { y } => PageEvent::Scrolled { y },
        PageEventRequest::Resized { width } => PageEvent::Resized { width },
        PageEventRequest::MenuToggle => PageEvent::MenuToggleClicked,
        PageEventRequest::Click { target } => PageEvent::Clicked(target.into()),
        PageEventRequest::Key { key } => PageEvent::KeyPressed(key),
        PageEventRequest::NavLink { section } => {
            let section = SectionId::new(section);
            if !site.interactions().navigation().links().contains(&section) {
                return Err(DomainError::new(
                    ErrorCode::SectionNotFound,
                    format!("No nav link for section: {}", section),
                )
                .with_detail("section", section.as_str()));
            }
            PageEvent::NavLinkClicked(section)
        }
        PageEventRequest::HeroButton { href } => PageEvent::HeroButtonClicked { href },
    };
    Ok((site.dispatch(event), BTreeMap::new()))
}

fn handle_contact_error(error: SubmitContactError) -> Response {
    match error {
        SubmitContactError::Invalid(errors) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse::invalid_fields(&errors)),
        )
            .into_response(),
        SubmitContactError::AlreadySending => handle_domain_error(DomainError::new(
            ErrorCode::SubmissionInProgress,
            error.to_string(),
        )),
        SubmitContactError::Interrupted(_) => {
            tracing::error!(error = %error, "Contact submission failed");
            handle_domain_error(DomainError::new(ErrorCode::InternalError, error.to_string()))
        }
    }
}

fn handle_domain_error(error: DomainError) -> Response {
    let status = match error.code {
        ErrorCode::UnknownSlot | ErrorCode::FragmentNotFound | ErrorCode::SectionNotFound => {
            StatusCode::NOT_FOUND
        }
        ErrorCode::InvalidFormat | ErrorCode::UnknownField => StatusCode::BAD_REQUEST,
        ErrorCode::SubmissionInProgress => StatusCode::CONFLICT,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ErrorResponse::from(error))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::icons::FeatherIcons;
    use crate::application::SiteSettings;
    use crate::domain::content::ContentStore;

    fn site() -> Site<InMemorySurface> {
        let mut site = Site::new(
            ContentStore::fallback(),
            InMemorySurface::complete(),
            Arc::new(FeatherIcons::new()),
            SiteSettings::default(),
        );
        let _ = site.bind();
        site
    }

    #[test]
    fn unknown_slot_is_not_found() {
        let err = apply_event(
            &mut site(),
            PageEventRequest::Activate {
                slot: "nav-bogus".to_string(),
                index: 0,
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::UnknownSlot);
        assert_eq!(handle_domain_error(err).status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn blur_reports_only_the_blurred_field() {
        let mut site = site();
        site.form_mut().input(FieldName::Email, "a@b");
        site.form_mut().blur(FieldName::Message);

        let (_, errors) =
            apply_event(&mut site, PageEventRequest::FieldBlur { field: FieldName::Email }).unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FieldName::Email], "Please enter a valid email address");
    }

    #[test]
    fn activate_service_button_opens_overlay() {
        let mut site = site();

        apply_event(
            &mut site,
            PageEventRequest::Activate {
                slot: "services-grid".to_string(),
                index: 0,
            },
        )
        .unwrap();

        assert!(site.interactions().overlay().is_open());
    }

    #[test]
    fn already_sending_is_conflict() {
        let response = handle_contact_error(SubmitContactError::AlreadySending);
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn interrupted_submission_is_internal_error() {
        let response = handle_contact_error(SubmitContactError::Interrupted("panicked".into()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn nav_link_to_unknown_section_is_not_found() {
        let err = apply_event(
            &mut site(),
            PageEventRequest::NavLink {
                section: "careers".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::SectionNotFound);
        assert_eq!(err.details.get("section"), Some(&"careers".to_string()));
        assert_eq!(handle_domain_error(err).status(), StatusCode::NOT_FOUND);
    }
}
