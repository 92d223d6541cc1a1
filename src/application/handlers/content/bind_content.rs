//! ContentBinder - copies the content document into presentation slots.

use crate::domain::content::ContentDocument;
use crate::domain::page::{Fragment, SlotId, SlotRegistry};
use crate::ports::{IconRenderer, PresentationSurface};

/// Footer shortcuts shown when nothing else is configured.
pub const DEFAULT_FOOTER_SERVICE_LIMIT: usize = 4;

/// What a bind pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    /// Slots written, in write order.
    pub written: Vec<SlotId>,
    /// Slots that had content to write but are not on the page.
    pub skipped: Vec<SlotId>,
    /// Whether icon substitution ran.
    pub icons_refreshed: bool,
}

impl BindReport {
    fn record(&mut self, slot: SlotId, present: bool) {
        if present {
            self.written.push(slot);
        } else {
            tracing::trace!(slot = %slot, "Slot not on page, skipping");
            self.skipped.push(slot);
        }
    }
}

/// Binds documents into a surface.
///
/// Binding is idempotent and never reads the surface back: absent fields
/// leave their slots exactly as they were.
#[derive(Debug, Clone)]
pub struct ContentBinder {
    registry: SlotRegistry,
    footer_service_limit: usize,
}

impl ContentBinder {
    pub fn new(registry: SlotRegistry) -> Self {
        Self {
            registry,
            footer_service_limit: DEFAULT_FOOTER_SERVICE_LIMIT,
        }
    }

    pub fn with_footer_service_limit(mut self, limit: usize) -> Self {
        self.footer_service_limit = limit;
        self
    }

    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    pub fn bind(
        &self,
        doc: &ContentDocument,
        surface: &mut dyn PresentationSurface,
        icons: &dyn IconRenderer,
    ) -> BindReport {
        let mut report = BindReport::default();

        self.bind_scalars(doc, surface, &mut report);

        if let Some(credentials) = doc.about.as_ref().and_then(|a| a.credentials.as_ref()) {
            let items = credentials.iter().cloned().map(Fragment::ListItem).collect();
            self.replace(surface, SlotId::CredentialsList, items, &mut report);
        }

        if let Some(services) = &doc.services {
            let buttons = services.iter().map(Fragment::service_button).collect();
            let grid_bound = self.replace(surface, SlotId::ServicesGrid, buttons, &mut report);

            let shortcuts = services
                .iter()
                .take(self.footer_service_limit)
                .map(Fragment::services_shortcut)
                .collect();
            self.replace(surface, SlotId::FooterServices, shortcuts, &mut report);

            if grid_bound {
                icons.replace_icons();
                report.icons_refreshed = true;
            }
        }

        if let Some(social) = &doc.social_media {
            for (slot, url) in [
                (SlotId::SocialLinkedin, &social.linkedin),
                (SlotId::SocialTwitter, &social.twitter),
                (SlotId::SocialFacebook, &social.facebook),
            ] {
                if let Some(url) = url {
                    let present = self.registry.contains(slot);
                    if present {
                        surface.set_href(slot, url);
                    }
                    report.record(slot, present);
                }
            }
        }

        tracing::debug!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "Content bound"
        );
        report
    }

    fn bind_scalars(
        &self,
        doc: &ContentDocument,
        surface: &mut dyn PresentationSurface,
        report: &mut BindReport,
    ) {
        let about = doc.about.as_ref();
        let contact = doc.contact.as_ref();

        let scalars: [(SlotId, Option<&String>); 16] = [
            (SlotId::NavFirmName, doc.firm_name.as_ref()),
            (SlotId::HeroTitle, doc.firm_name.as_ref()),
            (SlotId::FooterFirmName, doc.firm_name.as_ref()),
            (SlotId::HeroTagline, doc.tagline.as_ref()),
            (SlotId::HeroSubtitle, doc.hero_subtitle.as_ref()),
            (SlotId::AboutTitle, about.and_then(|a| a.title.as_ref())),
            (SlotId::AboutDescription, about.and_then(|a| a.description.as_ref())),
            (SlotId::LawyerName, about.and_then(|a| a.lawyer_name.as_ref())),
            (SlotId::LawyerBio, about.and_then(|a| a.lawyer_bio.as_ref())),
            (SlotId::ContactPhone, contact.and_then(|c| c.phone.as_ref())),
            (SlotId::FooterPhone, contact.and_then(|c| c.phone.as_ref())),
            (SlotId::ContactEmail, contact.and_then(|c| c.email.as_ref())),
            (SlotId::FooterEmail, contact.and_then(|c| c.email.as_ref())),
            (SlotId::ContactAddress, contact.and_then(|c| c.address.as_ref())),
            (SlotId::ContactHours, contact.and_then(|c| c.hours.as_ref())),
            (SlotId::EmergencyContact, contact.and_then(|c| c.emergency_contact.as_ref())),
        ];

        for (slot, value) in scalars {
            let Some(value) = value else { continue };
            let present = self.registry.contains(slot);
            if present {
                surface.set_text(slot, value);
            }
            report.record(slot, present);
        }
    }

    /// Returns true when the slot was rebuilt.
    fn replace(
        &self,
        surface: &mut dyn PresentationSurface,
        slot: SlotId,
        children: Vec<Fragment>,
        report: &mut BindReport,
    ) -> bool {
        let present = self.registry.contains(slot);
        if present {
            surface.replace_children(slot, children);
        }
        report.record(slot, present);
        present
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::icons::FeatherIcons;
    use crate::adapters::surface::{InMemorySurface, LOADING_TEXT};
    use crate::domain::content::{About, Service, SocialMedia};

    fn binder() -> ContentBinder {
        ContentBinder::new(SlotRegistry::complete())
    }

    fn services(n: usize) -> Vec<Service> {
        (0..n)
            .map(|i| Service::new(format!("Service {}", i), "<p>d</p>", "briefcase"))
            .collect()
    }

    #[test]
    fn firm_name_fills_three_slots() {
        let mut surface = InMemorySurface::complete();
        let doc = ContentDocument {
            firm_name: Some("Acme Law".to_string()),
            ..Default::default()
        };

        binder().bind(&doc, &mut surface, &FeatherIcons::new());

        for slot in [SlotId::NavFirmName, SlotId::HeroTitle, SlotId::FooterFirmName] {
            assert_eq!(surface.text(slot), Some("Acme Law"));
        }
    }

    #[test]
    fn absent_field_leaves_slot_untouched() {
        let mut surface = InMemorySurface::complete();
        let icons = FeatherIcons::new();
        binder().bind(&ContentDocument::fallback(), &mut surface, &icons);
        let before = surface.text(SlotId::HeroTagline).map(str::to_string);

        binder().bind(&ContentDocument::default(), &mut surface, &icons);

        assert_eq!(surface.text(SlotId::HeroTagline).map(str::to_string), before);
        assert_ne!(before.as_deref(), Some(LOADING_TEXT));
    }

    #[test]
    fn credentials_rebuilt_in_order() {
        let mut surface = InMemorySurface::complete();
        let doc = ContentDocument {
            about: Some(About {
                credentials: Some(vec!["J.D.".to_string(), "Bar".to_string()]),
                ..Default::default()
            }),
            ..Default::default()
        };

        binder().bind(&doc, &mut surface, &FeatherIcons::new());

        assert_eq!(
            surface.children(SlotId::CredentialsList),
            &[Fragment::ListItem("J.D.".into()), Fragment::ListItem("Bar".into())]
        );
    }

    #[test]
    fn footer_takes_first_four_services() {
        let mut surface = InMemorySurface::complete();
        let doc = ContentDocument {
            services: Some(services(10)),
            ..Default::default()
        };

        binder().bind(&doc, &mut surface, &FeatherIcons::new());

        assert_eq!(surface.children(SlotId::ServicesGrid).len(), 10);
        let labels: Vec<_> = surface
            .children(SlotId::FooterServices)
            .iter()
            .map(|f| f.label().to_string())
            .collect();
        assert_eq!(labels, ["Service 0", "Service 1", "Service 2", "Service 3"]);
    }

    #[test]
    fn footer_limit_is_configurable() {
        let mut surface = InMemorySurface::complete();
        let doc = ContentDocument {
            services: Some(services(5)),
            ..Default::default()
        };

        binder()
            .with_footer_service_limit(2)
            .bind(&doc, &mut surface, &FeatherIcons::new());

        assert_eq!(surface.children(SlotId::FooterServices).len(), 2);
    }

    #[test]
    fn services_rebuild_refreshes_icons() {
        let mut surface = InMemorySurface::complete();
        let icons = FeatherIcons::new();

        let report = binder().bind(&ContentDocument::fallback(), &mut surface, &icons);
        assert!(report.icons_refreshed);
        assert_eq!(icons.refresh_count(), 1);

        let report = binder().bind(&ContentDocument::default(), &mut surface, &icons);
        assert!(!report.icons_refreshed);
        assert_eq!(icons.refresh_count(), 1);
    }

    #[test]
    fn absent_social_keys_leave_links_alone() {
        let mut surface = InMemorySurface::complete();
        surface.set_href(SlotId::SocialFacebook, "https://facebook.com/old");
        let doc = ContentDocument {
            social_media: Some(SocialMedia {
                linkedin: Some("https://linkedin.com/new".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        binder().bind(&doc, &mut surface, &FeatherIcons::new());

        assert_eq!(surface.href(SlotId::SocialLinkedin), Some("https://linkedin.com/new"));
        assert_eq!(surface.href(SlotId::SocialTwitter), None);
        assert_eq!(surface.href(SlotId::SocialFacebook), Some("https://facebook.com/old"));
    }

    #[test]
    fn missing_slots_are_reported_and_skipped() {
        let mut surface = InMemorySurface::with_slots([SlotId::HeroTitle]);
        let binder = ContentBinder::new(surface.registry());
        let doc = ContentDocument {
            firm_name: Some("Acme".to_string()),
            services: Some(services(1)),
            ..Default::default()
        };

        let report = binder.bind(&doc, &mut surface, &FeatherIcons::new());

        assert_eq!(report.written, vec![SlotId::HeroTitle]);
        assert!(report.skipped.contains(&SlotId::NavFirmName));
        assert!(report.skipped.contains(&SlotId::ServicesGrid));
        assert!(!report.icons_refreshed);
        assert_eq!(surface.text(SlotId::HeroTitle), Some("Acme"));
    }

    #[test]
    fn binding_twice_is_idempotent() {
        let mut once = InMemorySurface::complete();
        let mut twice = InMemorySurface::complete();
        let icons = FeatherIcons::new();
        let doc = ContentDocument::fallback();

        binder().bind(&doc, &mut once, &icons);
        binder().bind(&doc, &mut twice, &icons);
        binder().bind(&doc, &mut twice, &icons);

        for slot in SlotId::ALL {
            assert_eq!(once.content(slot), twice.content(slot), "slot {}", slot);
        }
    }
}
