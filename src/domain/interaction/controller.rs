//! Page interactions - routes page events to the small controllers.

use crate::domain::content::Service;
use crate::domain::page::{SectionBounds, SectionId};

use super::menu::{ClickTarget, MobileMenu};
use super::navigation::{NavigationController, NavigationSettings, ScrollRequest};
use super::overlay::{OverlayContent, OverlayTrigger, ServiceOverlay};
use super::scroll_lock::ScrollLock;

/// Tunables for the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    pub navigation: NavigationSettings,
    /// Viewport widths above this force the mobile menu closed.
    pub mobile_breakpoint: f64,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            navigation: NavigationSettings::default(),
            mobile_breakpoint: 768.0,
        }
    }
}

/// User or window events the page reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scrolled { y: f64 },
    Resized { width: f64 },
    MenuToggleClicked,
    Clicked(ClickTarget),
    KeyPressed(String),
    NavLinkClicked(SectionId),
    HeroButtonClicked { href: String },
}

/// Side effects the host must carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEffect {
    ScrollTo(ScrollRequest),
}

#[derive(Debug, Clone)]
pub struct PageInteractions {
    settings: InteractionSettings,
    navigation: NavigationController,
    menu: MobileMenu,
    overlay: ServiceOverlay,
    scroll_lock: ScrollLock,
}

impl PageInteractions {
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            settings,
            navigation: NavigationController::with_default_links(settings.navigation),
            menu: MobileMenu::default(),
            overlay: ServiceOverlay::default(),
            scroll_lock: ScrollLock::default(),
        }
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    pub fn overlay(&self) -> &ServiceOverlay {
        &self.overlay
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn set_layout(&mut self, sections: Vec<SectionBounds>, nav_height: Option<f64>) {
        self.navigation.set_layout(sections, nav_height);
    }

    /// Opens the overlay for `service`.
    pub fn open_service(&mut self, service: Service) -> OverlayContent {
        self.overlay.open(service, &mut self.scroll_lock)
    }

    pub fn scroll_to_section(&self, section: &SectionId) -> Option<ScrollRequest> {
        self.navigation.scroll_target(section)
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<PageEffect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::Scrolled { y } => {
                self.navigation.on_scroll(y);
            }
            PageEvent::Resized { width } => {
                self.menu
                    .on_resize(width, self.settings.mobile_breakpoint, &mut self.scroll_lock);
            }
            PageEvent::MenuToggleClicked => self.menu.toggle(&mut self.scroll_lock),
            PageEvent::Clicked(target) => {
                self.menu.on_document_click(target, &mut self.scroll_lock);
                if let Some(trigger) = overlay_trigger(target) {
                    self.overlay.handle(&trigger, &mut self.scroll_lock);
                }
            }
            PageEvent::KeyPressed(key) => {
                self.overlay
                    .handle(&OverlayTrigger::Key(key), &mut self.scroll_lock);
            }
            PageEvent::NavLinkClicked(section) => {
                effects.extend(self.scroll_to_section(&section).map(PageEffect::ScrollTo));
                self.navigation.mark_active(&section);
                self.menu.close(&mut self.scroll_lock);
            }
            PageEvent::HeroButtonClicked { href } => {
                if let Some(section) = SectionId::from_href(&href) {
                    effects.extend(self.scroll_to_section(&section).map(PageEffect::ScrollTo));
                    self.navigation.mark_active(&section);
                }
            }
        }
        effects
    }
}

fn overlay_trigger(target: ClickTarget) -> Option<OverlayTrigger> {
    match target {
        ClickTarget::OverlayBackdrop => Some(OverlayTrigger::BackdropClick),
        ClickTarget::OverlayContent => Some(OverlayTrigger::ContentClick),
        ClickTarget::OverlayCloseButton => Some(OverlayTrigger::CloseButton),
        ClickTarget::OverlayFooterCloseButton => Some(OverlayTrigger::FooterCloseButton),
        ClickTarget::MenuPanel | ClickTarget::MenuToggle | ClickTarget::Elsewhere => None,
    }
}
