//! Built-in fallback document used when the configured source is unavailable.

use super::document::{About, ContactInfo, ContentDocument, Service, SocialMedia};

impl ContentDocument {
    /// The fully populated default document compiled into the binary.
    pub fn fallback() -> Self {
        Self {
            firm_name: Some("Legal O Flex".to_string()),
            tagline: Some("Expert Legal Solutions for the Digital Age".to_string()),
            hero_subtitle: Some(
                "Professional virtual law firm providing comprehensive legal services with \
                 modern technology and personalized attention."
                    .to_string(),
            ),
            about: Some(About {
                title: Some("About Our Firm".to_string()),
                description: Some(
                    "Legal O Flex is a forward-thinking virtual law firm committed to providing \
                     exceptional legal representation and counsel. We leverage modern technology \
                     to deliver efficient, cost-effective legal solutions while maintaining the \
                     highest standards of professional service."
                        .to_string(),
                ),
                lawyer_name: Some("Our Legal Team".to_string()),
                lawyer_bio: Some(
                    "With extensive experience in various areas of law, Legal O Flex brings a \
                     client-focused approach to legal practice. Specializing in modern legal \
                     challenges, we provide strategic counsel and representation tailored to \
                     each client's unique needs."
                        .to_string(),
                ),
                credentials: Some(vec![
                    "Licensed Legal Practitioners".to_string(),
                    "Member of Bar Council".to_string(),
                    "10+ Years of Legal Experience".to_string(),
                    "Virtual Law Practice Pioneer".to_string(),
                ]),
            }),
            services: Some(vec![
                Service::new(
                    "Corporate Law",
                    "<p>Comprehensive corporate legal services including business formation, \
                     contracts, compliance, and corporate governance.</p>",
                    "briefcase",
                ),
                Service::new(
                    "Contract Law",
                    "<p>Expert contract drafting, review, negotiation, and dispute resolution \
                     for businesses and individuals.</p>",
                    "file-text",
                ),
                Service::new(
                    "Intellectual Property",
                    "<p>Protection and enforcement of intellectual property rights including \
                     trademarks, copyrights, and patents.</p>",
                    "shield",
                ),
                Service::new(
                    "Employment Law",
                    "<p>Comprehensive employment legal services for both employers and \
                     employees, including policy development and dispute resolution.</p>",
                    "users",
                ),
                Service::new(
                    "Dispute Resolution",
                    "<p>Expert representation in litigation, arbitration, and mediation for \
                     commercial and civil disputes.</p>",
                    "scale",
                ),
                Service::new(
                    "Legal Consultation",
                    "<p>Strategic legal advice and consultation for businesses and individuals \
                     on various legal matters.</p>",
                    "message-circle",
                ),
            ]),
            contact: Some(ContactInfo {
                phone: Some("+91 98765 43210".to_string()),
                email: Some("contact@legaloflex.com".to_string()),
                address: Some("Virtual Office - Serving Clients Nationwide".to_string()),
                hours: Some("Monday - Friday: 9:00 AM - 6:00 PM".to_string()),
                emergency_contact: Some("Available 24/7 for urgent matters".to_string()),
            }),
            social_media: Some(SocialMedia {
                linkedin: Some("https://linkedin.com/company/legal-o-flex".to_string()),
                twitter: Some("https://twitter.com/legaloflex".to_string()),
                facebook: Some("https://facebook.com/legaloflex".to_string()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_fully_populated() {
        let doc = ContentDocument::fallback();
        assert!(doc.firm_name.is_some());
        assert!(doc.tagline.is_some());
        assert!(doc.hero_subtitle.is_some());

        let about = doc.about.as_ref().unwrap();
        assert!(about.title.is_some() && about.description.is_some());
        assert!(about.lawyer_name.is_some() && about.lawyer_bio.is_some());
        assert_eq!(about.credentials.as_ref().unwrap().len(), 4);

        assert_eq!(doc.services().len(), 6);
        assert!(doc
            .services()
            .iter()
            .all(|s| s.title.is_some() && s.description.is_some() && s.icon.is_some()));

        let contact = doc.contact.as_ref().unwrap();
        assert!(contact.phone.is_some() && contact.email.is_some());
        assert!(contact.address.is_some() && contact.hours.is_some());
        assert!(contact.emergency_contact.is_some());

        let social = doc.social_media.as_ref().unwrap();
        assert!(social.linkedin.is_some() && social.twitter.is_some() && social.facebook.is_some());
    }

    #[test]
    fn fallback_survives_a_json_round_trip() {
        let doc = ContentDocument::fallback();
        let json = serde_json::to_string(&doc).unwrap();
        assert_eq!(ContentDocument::from_json(&json).unwrap(), doc);
    }
}
