//! Typed handles for the page's presentation slots.

use std::collections::BTreeSet;
use std::fmt;

/// What a slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Plain text content.
    Text,
    /// Markup rendered verbatim (service descriptions, icon placeholders).
    RichText,
    /// A link whose `href` is set from content.
    Link,
    /// A container whose children are rebuilt from an array field.
    List,
}

/// Every addressable region of the page bound to content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SlotId {
    NavFirmName,
    HeroTitle,
    HeroTagline,
    HeroSubtitle,
    FooterFirmName,
    AboutTitle,
    AboutDescription,
    LawyerName,
    LawyerBio,
    ContactPhone,
    ContactEmail,
    ContactAddress,
    ContactHours,
    EmergencyContact,
    FooterPhone,
    FooterEmail,
    CredentialsList,
    ServicesGrid,
    FooterServices,
    SocialLinkedin,
    SocialTwitter,
    SocialFacebook,
    ModalServiceTitle,
    ModalServiceDescription,
    ModalServiceIcon,
}

impl SlotId {
    pub const ALL: [SlotId; 25] = [
        SlotId::NavFirmName,
        SlotId::HeroTitle,
        SlotId::HeroTagline,
        SlotId::HeroSubtitle,
        SlotId::FooterFirmName,
        SlotId::AboutTitle,
        SlotId::AboutDescription,
        SlotId::LawyerName,
        SlotId::LawyerBio,
        SlotId::ContactPhone,
        SlotId::ContactEmail,
        SlotId::ContactAddress,
        SlotId::ContactHours,
        SlotId::EmergencyContact,
        SlotId::FooterPhone,
        SlotId::FooterEmail,
        SlotId::CredentialsList,
        SlotId::ServicesGrid,
        SlotId::FooterServices,
        SlotId::SocialLinkedin,
        SlotId::SocialTwitter,
        SlotId::SocialFacebook,
        SlotId::ModalServiceTitle,
        SlotId::ModalServiceDescription,
        SlotId::ModalServiceIcon,
    ];

    /// The element identifier used in the page markup.
    pub fn element_id(&self) -> &'static str {
        match self {
            SlotId::NavFirmName => "nav-firm-name",
            SlotId::HeroTitle => "hero-title",
            SlotId::HeroTagline => "hero-tagline",
            SlotId::HeroSubtitle => "hero-subtitle",
            SlotId::FooterFirmName => "footer-firm-name",
            SlotId::AboutTitle => "about-title",
            SlotId::AboutDescription => "about-description",
            SlotId::LawyerName => "lawyer-name",
            SlotId::LawyerBio => "lawyer-bio",
            SlotId::ContactPhone => "contact-phone",
            SlotId::ContactEmail => "contact-email",
            SlotId::ContactAddress => "contact-address",
            SlotId::ContactHours => "contact-hours",
            SlotId::EmergencyContact => "emergency-contact",
            SlotId::FooterPhone => "footer-phone",
            SlotId::FooterEmail => "footer-email",
            SlotId::CredentialsList => "credentials-list",
            SlotId::ServicesGrid => "services-grid",
            SlotId::FooterServices => "footer-services",
            SlotId::SocialLinkedin => "social-linkedin",
            SlotId::SocialTwitter => "social-twitter",
            SlotId::SocialFacebook => "social-facebook",
            SlotId::ModalServiceTitle => "modal-service-title",
            SlotId::ModalServiceDescription => "modal-service-description",
            SlotId::ModalServiceIcon => "modal-service-icon",
        }
    }

    /// Resolves a markup identifier into a typed handle.
    pub fn from_element_id(id: &str) -> Option<SlotId> {
        Self::ALL.iter().copied().find(|slot| slot.element_id() == id)
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            SlotId::CredentialsList | SlotId::ServicesGrid | SlotId::FooterServices => {
                SlotKind::List
            }
            SlotId::SocialLinkedin | SlotId::SocialTwitter | SlotId::SocialFacebook => {
                SlotKind::Link
            }
            SlotId::ModalServiceDescription | SlotId::ModalServiceIcon => SlotKind::RichText,
            _ => SlotKind::Text,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// The set of slots a surface actually provides, resolved once at startup.
///
/// Writes to slots outside the registry are skipped without error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRegistry {
    present: BTreeSet<SlotId>,
}

impl SlotRegistry {
    /// Registry containing every known slot.
    pub fn complete() -> Self {
        Self {
            present: SlotId::ALL.iter().copied().collect(),
        }
    }

    /// Builds the registry by checking each known slot against the surface.
    pub fn detect(mut has_slot: impl FnMut(SlotId) -> bool) -> Self {
        Self {
            present: SlotId::ALL.iter().copied().filter(|s| has_slot(*s)).collect(),
        }
    }

    /// Builds the registry from markup identifiers; unknown ids are ignored.
    pub fn from_element_ids<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            present: ids.into_iter().filter_map(SlotId::from_element_id).collect(),
        }
    }

    pub fn contains(&self, slot: SlotId) -> bool {
        self.present.contains(&slot)
    }

    pub fn len(&self) -> usize {
        self.present.len()
    }

    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
    }

    /// Known slots the surface does not provide.
    pub fn missing(&self) -> Vec<SlotId> {
        SlotId::ALL
            .iter()
            .copied()
            .filter(|s| !self.present.contains(s))
            .collect()
    }
}
