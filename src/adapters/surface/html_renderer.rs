//! HTML page renderer.
//!
//! Produces the complete page from the bound surface and the current
//! interaction and form state. Text is escaped; rich text slots and icon
//! placeholders are written verbatim.

use crate::domain::contact::{ContactForm, FieldKind, FieldName};
use crate::domain::interaction::PageInteractions;
use crate::domain::page::{Fragment, SectionId, SlotId};
use crate::ports::{IconRenderer, PresentationSurface};

use super::in_memory_surface::InMemorySurface;

/// Everything the renderer reads.
pub struct PageView<'a> {
    pub surface: &'a InMemorySurface,
    pub interactions: &'a PageInteractions,
    pub form: &'a ContactForm,
    pub icons: &'a dyn IconRenderer,
}

#[derive(Debug, Clone, Default)]
pub struct HtmlPageRenderer;

impl HtmlPageRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, view: &PageView<'_>) -> String {
        let body_style = if view.interactions.is_scroll_locked() {
            r#" style="overflow: hidden""#
        } else {
            ""
        };

        let mut page = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("<meta charset=\"utf-8\">\n");
        page.push_str(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        );
        page.push_str(&format!(
            "<title>{}</title>\n",
            escape(text(view.surface, SlotId::NavFirmName))
        ));
        page.push_str("<script src=\"https://unpkg.com/feather-icons\"></script>\n");
        page.push_str("</head>\n");
        page.push_str(&format!("<body{}>\n", body_style));

        page.push_str(&self.navbar(view));
        page.push_str(&self.hero(view));
        page.push_str(&self.about(view));
        page.push_str(&self.services(view));
        page.push_str(&self.contact(view));
        page.push_str(&self.footer(view));
        page.push_str(&self.modal(view));

        page.push_str("<script>feather.replace();</script>\n");
        page.push_str("</body>\n</html>\n");
        page
    }

    fn navbar(&self, view: &PageView<'_>) -> String {
        let navigation = view.interactions.navigation();
        let menu_open = view.interactions.menu().is_open();

        let mut nav = format!(
            "<nav class=\"{}\" id=\"navbar\">\n",
            classes("navbar", &[("scrolled", navigation.is_scrolled())])
        );
        nav.push_str(&format!(
            "<a class=\"nav-logo\" href=\"#home\" id=\"nav-firm-name\">{}</a>\n",
            escape(text(view.surface, SlotId::NavFirmName))
        ));
        nav.push_str(&format!(
            "<ul class=\"{}\" id=\"nav-menu\">\n",
            classes("nav-menu", &[("active", menu_open)])
        ));
        for link in navigation.links() {
            let active = navigation.active_link() == Some(link);
            nav.push_str(&format!(
                "<li><a class=\"{}\" href=\"{}\">{}</a></li>\n",
                classes("nav-link", &[("active", active)]),
                link.href(),
                nav_label(link)
            ));
        }
        nav.push_str("</ul>\n");
        nav.push_str(&format!(
            "<button class=\"{}\" id=\"nav-toggle\" type=\"button\">{}</button>\n",
            classes("nav-toggle", &[("active", menu_open)]),
            view.icons.placeholder("menu")
        ));
        nav.push_str("</nav>\n");
        nav
    }

    fn hero(&self, view: &PageView<'_>) -> String {
        format!(
            "<section class=\"hero\" id=\"{home}\">\n\
             <h1 id=\"hero-title\">{title}</h1>\n\
             <p class=\"hero-tagline\" id=\"hero-tagline\">{tagline}</p>\n\
             <p class=\"hero-subtitle\" id=\"hero-subtitle\">{subtitle}</p>\n\
             <div class=\"hero-buttons\">\n\
             <a class=\"btn btn-primary\" href=\"#{contact}\">Schedule Consultation</a>\n\
             <a class=\"btn btn-secondary\" href=\"#{services}\">Our Services</a>\n\
             </div>\n\
             </section>\n",
            home = SectionId::HOME,
            contact = SectionId::CONTACT,
            services = SectionId::SERVICES,
            title = escape(text(view.surface, SlotId::HeroTitle)),
            tagline = escape(text(view.surface, SlotId::HeroTagline)),
            subtitle = escape(text(view.surface, SlotId::HeroSubtitle)),
        )
    }

    fn about(&self, view: &PageView<'_>) -> String {
        let mut section = format!("<section class=\"about\" id=\"{}\">\n", SectionId::ABOUT);
        section.push_str(&text_element("h2", SlotId::AboutTitle, view.surface));
        section.push_str(&text_element("p", SlotId::AboutDescription, view.surface));
        section.push_str(&text_element("h3", SlotId::LawyerName, view.surface));
        section.push_str(&text_element("p", SlotId::LawyerBio, view.surface));
        section.push_str(&list(SlotId::CredentialsList, "ul", view));
        section.push_str("</section>\n");
        section
    }

    fn services(&self, view: &PageView<'_>) -> String {
        let mut section = format!(
            "<section class=\"services\" id=\"{}\">\n<h2>Practice Areas</h2>\n",
            SectionId::SERVICES
        );
        section.push_str(&list(SlotId::ServicesGrid, "div", view));
        section.push_str("</section>\n");
        section
    }

    fn contact(&self, view: &PageView<'_>) -> String {
        let mut section = format!(
            "<section class=\"contact\" id=\"{}\">\n<h2>Contact Us</h2>\n<div class=\"contact-info\">\n",
            SectionId::CONTACT
        );
        for slot in [
            SlotId::ContactPhone,
            SlotId::ContactEmail,
            SlotId::ContactAddress,
            SlotId::ContactHours,
            SlotId::EmergencyContact,
        ] {
            section.push_str(&text_element("p", slot, view.surface));
        }
        section.push_str("</div>\n");
        section.push_str(&self.contact_form(view));
        section.push_str("</section>\n");
        section
    }

    fn contact_form(&self, view: &PageView<'_>) -> String {
        let form = view.form;
        let mut html = String::from("<form class=\"contact-form\" id=\"contact-form\" novalidate>\n");

        if let Some(message) = form.message() {
            html.push_str(&format!(
                "<div class=\"{}\" id=\"form-message\">{}</div>\n",
                classes("form-message success", &[("hidden", !message.visible)]),
                escape(&message.text)
            ));
        }

        for field in FieldName::ALL {
            html.push_str(&self.form_field(view, field));
        }

        let submit = form.submit_control();
        html.push_str(&format!(
            "<button class=\"btn btn-primary\" type=\"submit\"{}>{}</button>\n",
            if submit.disabled { " disabled" } else { "" },
            escape(&submit.label)
        ));
        html.push_str("</form>\n");
        html
    }

    fn form_field(&self, view: &PageView<'_>, field: FieldName) -> String {
        let state = view.form.field(field);
        let value = view.form.value(field);
        let class = classes(
            "form-control",
            &[
                ("valid", state.is_some_and(|s| s.marked_valid)),
                ("invalid", state.is_some_and(|s| s.is_marked_invalid())),
            ],
        );
        let required = if field.is_required() { " required" } else { "" };
        let name = field.as_str();

        let control = match field.kind() {
            FieldKind::TextArea => format!(
                "<textarea class=\"{class}\" id=\"{name}\" name=\"{name}\" rows=\"5\"{required}>{}</textarea>",
                escape(value)
            ),
            FieldKind::Select => {
                let mut select =
                    format!("<select class=\"{class}\" id=\"{name}\" name=\"{name}\"{required}>");
                select.push_str("<option value=\"\">Select a service</option>");
                for option in view.surface.children(SlotId::ServicesGrid) {
                    let label = escape(option.label());
                    let selected = if option.label() == value { " selected" } else { "" };
                    select.push_str(&format!(
                        "<option value=\"{label}\"{selected}>{label}</option>"
                    ));
                }
                select.push_str("</select>");
                select
            }
            kind => format!(
                "<input class=\"{class}\" id=\"{name}\" name=\"{name}\" type=\"{}\" value=\"{}\"{required}>",
                input_type(kind),
                escape(value)
            ),
        };

        let error = state
            .and_then(|s| s.error)
            .map(|e| format!("<span class=\"error-message\">{}</span>", escape(&e.to_string())))
            .unwrap_or_default();

        format!("<div class=\"form-group\">{}{}</div>\n", control, error)
    }

    fn footer(&self, view: &PageView<'_>) -> String {
        let mut footer = String::from("<footer class=\"footer\">\n");
        footer.push_str(&text_element("h3", SlotId::FooterFirmName, view.surface));
        footer.push_str(&text_element("p", SlotId::FooterPhone, view.surface));
        footer.push_str(&text_element("p", SlotId::FooterEmail, view.surface));
        footer.push_str(&list(SlotId::FooterServices, "ul", view));
        footer.push_str("<div class=\"social-links\">\n");
        for (slot, icon) in [
            (SlotId::SocialLinkedin, "linkedin"),
            (SlotId::SocialTwitter, "twitter"),
            (SlotId::SocialFacebook, "facebook"),
        ] {
            if view.surface.has_slot(slot) {
                footer.push_str(&format!(
                    "<a id=\"{}\" href=\"{}\">{}</a>\n",
                    slot.element_id(),
                    escape(view.surface.href(slot).unwrap_or("#")),
                    view.icons.placeholder(icon)
                ));
            }
        }
        footer.push_str("</div>\n</footer>\n");
        footer
    }

    fn modal(&self, view: &PageView<'_>) -> String {
        let open = view.interactions.overlay().is_open();
        format!(
            "<div class=\"{class}\" id=\"service-modal\">\n\
             <div class=\"modal-content\">\n\
             <button class=\"modal-close\" id=\"modal-close-btn\" type=\"button\">&times;</button>\n\
             <div class=\"modal-icon\" id=\"modal-service-icon\">{icon}</div>\n\
             <h2 id=\"modal-service-title\">{title}</h2>\n\
             <div class=\"modal-description\" id=\"modal-service-description\">{description}</div>\n\
             <button class=\"btn btn-secondary\" id=\"modal-close-btn-footer\" type=\"button\">Close</button>\n\
             </div>\n\
             </div>\n",
            class = classes("modal", &[("show", open)]),
            icon = text(view.surface, SlotId::ModalServiceIcon),
            title = escape(text(view.surface, SlotId::ModalServiceTitle)),
            description = text(view.surface, SlotId::ModalServiceDescription),
        )
    }
}

fn text(surface: &InMemorySurface, slot: SlotId) -> &str {
    surface.text(slot).unwrap_or_default()
}

/// `<tag id="slot">text</tag>`, or nothing when the surface lacks the slot.
fn text_element(tag: &str, slot: SlotId, surface: &InMemorySurface) -> String {
    if !surface.has_slot(slot) {
        return String::new();
    }
    format!(
        "<{tag} id=\"{}\">{}</{tag}>\n",
        slot.element_id(),
        escape(text(surface, slot))
    )
}

fn list(slot: SlotId, tag: &str, view: &PageView<'_>) -> String {
    if !view.surface.has_slot(slot) {
        return String::new();
    }
    let mut html = format!("<{tag} id=\"{}\">\n", slot.element_id());
    for (index, fragment) in view.surface.children(slot).iter().enumerate() {
        html.push_str(&fragment_html(fragment, index, view.icons));
    }
    html.push_str(&format!("</{tag}>\n"));
    html
}

fn fragment_html(fragment: &Fragment, index: usize, icons: &dyn IconRenderer) -> String {
    match fragment {
        Fragment::ListItem(text) => format!("<li>{}</li>\n", escape(text)),
        Fragment::ServiceButton(service) => format!(
            "<button class=\"service-btn\" type=\"button\" data-service-index=\"{}\">\
             <div class=\"service-icon\">{}</div><h3>{}</h3></button>\n",
            index,
            icons.placeholder(service.icon.as_deref().unwrap_or_default()),
            escape(service.title_text())
        ),
        Fragment::SectionShortcut { label, section } => format!(
            "<li><a href=\"{}\" data-scroll-to=\"{}\">{}</a></li>\n",
            section.href(),
            section,
            escape(label)
        ),
    }
}

fn nav_label(section: &SectionId) -> String {
    let mut chars = section.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn input_type(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Email => "email",
        FieldKind::Tel => "tel",
        FieldKind::Text | FieldKind::Select | FieldKind::TextArea => "text",
    }
}

fn classes(base: &str, toggles: &[(&str, bool)]) -> String {
    toggles
        .iter()
        .filter(|(_, on)| *on)
        .fold(base.to_string(), |mut acc, (name, _)| {
            acc.push(' ');
            acc.push_str(name);
            acc
        })
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
