//! Site - one page session.
//!
//! Owns the content store, the bound surface and every piece of
//! interaction state. All events for a session are applied through it.

use std::sync::Arc;

use crate::domain::contact::ContactForm;
use crate::domain::content::{ContentDocument, ContentStore, PartialContentDocument, Service};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::interaction::{
    InteractionSettings, OverlayContent, PageEffect, PageEvent, PageInteractions, ScrollRequest,
};
use crate::domain::page::{Activation, SectionBounds, SectionId, SlotId, SlotRegistry};
use crate::ports::{IconRenderer, PresentationSurface};

use super::handlers::content::{BindReport, ContentBinder, DEFAULT_FOOTER_SERVICE_LIMIT};

/// Site-level tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteSettings {
    pub interaction: InteractionSettings,
    pub footer_service_limit: usize,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            interaction: InteractionSettings::default(),
            footer_service_limit: DEFAULT_FOOTER_SERVICE_LIMIT,
        }
    }
}

/// Result of merging a partial document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateConfigResult {
    pub revision: u64,
    pub replaced_keys: Vec<&'static str>,
    pub report: BindReport,
}

pub struct Site<S: PresentationSurface> {
    store: ContentStore,
    surface: S,
    binder: ContentBinder,
    icons: Arc<dyn IconRenderer>,
    interactions: PageInteractions,
    form: ContactForm,
}

impl<S: PresentationSurface> Site<S> {
    /// Creates the session. The slot registry is resolved from `surface`
    /// once, here; nothing is bound until [`Site::bind`].
    pub fn new(
        store: ContentStore,
        surface: S,
        icons: Arc<dyn IconRenderer>,
        settings: SiteSettings,
    ) -> Self {
        let registry = SlotRegistry::detect(|slot| surface.has_slot(slot));
        let missing = registry.missing();
        if !missing.is_empty() {
            tracing::debug!(count = missing.len(), "Page is missing some content slots");
        }

        Self {
            store,
            surface,
            binder: ContentBinder::new(registry)
                .with_footer_service_limit(settings.footer_service_limit),
            icons,
            interactions: PageInteractions::new(settings.interaction),
            form: ContactForm::new(),
        }
    }

    /// Binds the current document into the surface.
    pub fn bind(&mut self) -> BindReport {
        self.binder
            .bind(self.store.document(), &mut self.surface, self.icons.as_ref())
    }

    /// Merges a partial document and re-binds the page.
    pub fn update_config(&mut self, partial: PartialContentDocument) -> UpdateConfigResult {
        let rebind = self.store.merge(partial);
        tracing::debug!(
            revision = rebind.revision,
            keys = ?rebind.replaced_keys,
            "Content merged, re-binding"
        );
        let report = self.bind();
        UpdateConfigResult {
            revision: rebind.revision,
            replaced_keys: rebind.replaced_keys,
            report,
        }
    }

    pub fn document(&self) -> &ContentDocument {
        self.store.document()
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn icons(&self) -> &dyn IconRenderer {
        self.icons.as_ref()
    }

    pub fn interactions(&self) -> &PageInteractions {
        &self.interactions
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    /// Records measured section positions and the nav bar height.
    pub fn set_layout(&mut self, sections: Vec<SectionBounds>, nav_height: Option<f64>) {
        self.interactions.set_layout(sections, nav_height);
    }

    /// Scroll request for a section id; `None` for unknown ids.
    pub fn scroll_to_section(&self, id: &str) -> Option<ScrollRequest> {
        self.interactions.scroll_to_section(&SectionId::new(id))
    }

    pub fn dispatch(&mut self, event: PageEvent) -> Vec<PageEffect> {
        self.interactions.handle(event)
    }

    /// Opens the detail overlay for a service and writes its slots.
    pub fn open_service(&mut self, service: Service) -> OverlayContent {
        let content = self.interactions.open_service(service);
        let registry = self.binder.registry();

        if registry.contains(SlotId::ModalServiceTitle) {
            self.surface.set_text(SlotId::ModalServiceTitle, &content.title);
        }
        if registry.contains(SlotId::ModalServiceDescription) {
            self.surface
                .set_rich_text(SlotId::ModalServiceDescription, &content.description_html);
        }
        if registry.contains(SlotId::ModalServiceIcon) {
            let placeholder = self
                .icons
                .placeholder(content.icon.as_deref().unwrap_or_default());
            self.surface.set_rich_text(SlotId::ModalServiceIcon, &placeholder);
        }
        self.icons.replace_icons();
        content
    }

    /// Activates the fragment at `index` in a list slot.
    pub fn activate(&mut self, slot: SlotId, index: usize) -> Result<Vec<PageEffect>, DomainError> {
        let activation = self
            .surface
            .children(slot)
            .get(index)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::FragmentNotFound,
                    format!("No fragment {} in {}", index, slot),
                )
            })?
            .activate();

        Ok(match activation {
            Some(Activation::OpenService(service)) => {
                self.open_service(service);
                Vec::new()
            }
            Some(Activation::ScrollTo(section)) => self
                .interactions
                .scroll_to_section(&section)
                .map(PageEffect::ScrollTo)
                .into_iter()
                .collect(),
            None => Vec::new(),
        })
    }
}
