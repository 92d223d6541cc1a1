//! Page behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::{SiteSettings, SubmissionSettings};
use crate::domain::interaction::{InteractionSettings, NavigationSettings};

use super::error::ValidationError;

/// Page behaviour tunables
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Scroll offset above which the nav bar is marked scrolled
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: f64,

    /// Added to the scroll offset when finding the active section
    #[serde(default = "default_active_section_offset")]
    pub active_section_offset: f64,

    /// Viewport width above which the mobile menu is forced closed
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: f64,

    /// Nav bar height used when it has not been measured
    #[serde(default = "default_nav_height")]
    pub default_nav_height: f64,

    /// Simulated send time for the contact form, in milliseconds
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,

    /// How long the success message stays visible, in milliseconds
    #[serde(default = "default_message_visible")]
    pub form_message_visible_ms: u64,

    /// Number of services linked from the footer
    #[serde(default = "default_footer_service_limit")]
    pub footer_service_limit: usize,
}

impl SiteConfig {
    pub fn interaction_settings(&self) -> InteractionSettings {
        InteractionSettings {
            navigation: NavigationSettings {
                scrolled_threshold: self.scrolled_threshold,
                active_section_offset: self.active_section_offset,
                default_nav_height: self.default_nav_height,
            },
            mobile_breakpoint: self.mobile_breakpoint,
        }
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            interaction: self.interaction_settings(),
            footer_service_limit: self.footer_service_limit,
        }
    }

    pub fn submission_settings(&self) -> SubmissionSettings {
        SubmissionSettings {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            message_visible: Duration::from_millis(self.form_message_visible_ms),
        }
    }

    /// Validate site configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let non_negative = [
            (self.scrolled_threshold, "scrolled_threshold"),
            (self.active_section_offset, "active_section_offset"),
            (self.default_nav_height, "default_nav_height"),
        ];
        for (value, name) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidSiteSetting(name));
            }
        }
        if !self.mobile_breakpoint.is_finite() || self.mobile_breakpoint <= 0.0 {
            return Err(ValidationError::InvalidSiteSetting("mobile_breakpoint"));
        }
        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
            active_section_offset: default_active_section_offset(),
            mobile_breakpoint: default_mobile_breakpoint(),
            default_nav_height: default_nav_height(),
            submit_delay_ms: default_submit_delay(),
            form_message_visible_ms: default_message_visible(),
            footer_service_limit: default_footer_service_limit(),
        }
    }
}

fn default_scrolled_threshold() -> f64 {
    50.0
}

fn default_active_section_offset() -> f64 {
    120.0
}

fn default_mobile_breakpoint() -> f64 {
    768.0
}

fn default_nav_height() -> f64 {
    80.0
}

fn default_submit_delay() -> u64 {
    1500
}

fn default_message_visible() -> u64 {
    5000
}

fn default_footer_service_limit() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_domain_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site_settings(), SiteSettings::default());
        assert_eq!(config.submission_settings(), SubmissionSettings::default());
    }

    #[test]
    fn test_interaction_settings_carry_values() {
        let config = SiteConfig {
            mobile_breakpoint: 1024.0,
            default_nav_height: 64.0,
            ..Default::default()
        };
        let settings = config.interaction_settings();
        assert_eq!(settings.mobile_breakpoint, 1024.0);
        assert_eq!(settings.navigation.default_nav_height, 64.0);
    }

    #[test]
    fn test_validation_rejects_negative_offsets() {
        let config = SiteConfig {
            active_section_offset: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_breakpoint() {
        let config = SiteConfig {
            mobile_breakpoint: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
