//! Content document - the JSON shape the page is populated from.
//!
//! Every field is optional. Empty strings are folded into `None` while
//! deserializing, so downstream code only ever sees one "absent" case.

use serde::{Deserialize, Deserializer, Serialize};

/// A partial document used for merges. Same shape as the full document;
/// a present top-level key replaces the whole value under that key.
pub type PartialContentDocument = ContentDocument;

/// The firm's page content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub firm_name: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<About>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Service>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<ContactInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
}

/// The "about" section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub lawyer_name: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub lawyer_bio: Option<String>,

    /// Ordered credentials. `Some(vec![])` still clears the rendered list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<String>>,
}

/// One offered legal service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Rich-text fragment (may contain several paragraphs of markup).
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Icon-set key, e.g. `briefcase`.
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Service {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            icon: Some(icon.into()),
        }
    }

    /// Title text, or an empty string for untitled entries.
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    #[serde(default, deserialize_with = "non_empty", skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
}

impl ContentDocument {
    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Shallow merge: every top-level key present in `partial` replaces the
    /// current value. A key sent as `null` or `""` parses as absent and keeps
    /// the current value. Returns the names of the replaced keys.
    pub fn merge(&mut self, partial: PartialContentDocument) -> Vec<&'static str> {
        let mut replaced = Vec::new();
        replace_if_present(&mut self.firm_name, partial.firm_name, "firmName", &mut replaced);
        replace_if_present(&mut self.tagline, partial.tagline, "tagline", &mut replaced);
        replace_if_present(
            &mut self.hero_subtitle,
            partial.hero_subtitle,
            "heroSubtitle",
            &mut replaced,
        );
        replace_if_present(&mut self.about, partial.about, "about", &mut replaced);
        replace_if_present(&mut self.services, partial.services, "services", &mut replaced);
        replace_if_present(&mut self.contact, partial.contact, "contact", &mut replaced);
        replace_if_present(
            &mut self.social_media,
            partial.social_media,
            "socialMedia",
            &mut replaced,
        );
        replaced
    }

    /// Services list, empty when absent.
    pub fn services(&self) -> &[Service] {
        self.services.as_deref().unwrap_or_default()
    }

    /// Finds a service by exact title.
    pub fn find_service(&self, title: &str) -> Option<&Service> {
        self.services().iter().find(|s| s.title.as_deref() == Some(title))
    }
}

fn replace_if_present<T>(
    current: &mut Option<T>,
    incoming: Option<T>,
    key: &'static str,
    replaced: &mut Vec<&'static str>,
) {
    if incoming.is_some() {
        *current = incoming;
        replaced.push(key);
    }
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_camel_case_document() {
        let doc = ContentDocument::from_json(
            r#"{
                "firmName": "Acme Law",
                "heroSubtitle": "We argue so you don't have to",
                "about": { "lawyerName": "J. Doe", "credentials": ["Bar Member"] },
                "contact": { "emergencyContact": "24/7" },
                "socialMedia": { "linkedin": "https://linkedin.com/acme" }
            }"#,
        )
        .unwrap();

        assert_eq!(doc.firm_name.as_deref(), Some("Acme Law"));
        assert_eq!(doc.hero_subtitle.as_deref(), Some("We argue so you don't have to"));
        let about = doc.about.as_ref().unwrap();
        assert_eq!(about.lawyer_name.as_deref(), Some("J. Doe"));
        assert_eq!(about.credentials.as_ref().unwrap(), &vec!["Bar Member".to_string()]);
        assert_eq!(
            doc.contact.as_ref().unwrap().emergency_contact.as_deref(),
            Some("24/7")
        );
        assert!(doc.social_media.as_ref().unwrap().twitter.is_none());
    }

    #[test]
    fn empty_strings_and_nulls_become_absent() {
        let doc = ContentDocument::from_json(r#"{"firmName": "", "tagline": null}"#).unwrap();
        assert!(doc.firm_name.is_none());
        assert!(doc.tagline.is_none());
    }

    #[test]
    fn empty_credentials_array_stays_present() {
        let doc = ContentDocument::from_json(r#"{"about": {"credentials": []}}"#).unwrap();
        assert_eq!(doc.about.unwrap().credentials, Some(vec![]));
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(ContentDocument::from_json(r#"{"services": "none"}"#).is_err());
        assert!(ContentDocument::from_json("not json").is_err());
    }

    #[test]
    fn serializes_without_absent_keys() {
        let doc = ContentDocument {
            firm_name: Some("Acme".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&doc).unwrap(), json!({"firmName": "Acme"}));
    }

    #[test]
    fn merge_replaces_only_present_top_level_keys() {
        let mut doc = ContentDocument {
            firm_name: Some("Old".to_string()),
            tagline: Some("Keep me".to_string()),
            about: Some(About {
                title: Some("About".to_string()),
                lawyer_name: Some("Jane".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let partial = ContentDocument {
            firm_name: Some("New".to_string()),
            about: Some(About {
                title: Some("Who we are".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let replaced = doc.merge(partial);

        assert_eq!(replaced, vec!["firmName", "about"]);
        assert_eq!(doc.firm_name.as_deref(), Some("New"));
        assert_eq!(doc.tagline.as_deref(), Some("Keep me"));
        // Shallow: the nested lawyer name is gone with the old `about`.
        let about = doc.about.unwrap();
        assert_eq!(about.title.as_deref(), Some("Who we are"));
        assert!(about.lawyer_name.is_none());
    }

    #[test]
    fn merge_with_null_keeps_current_value() {
        let mut doc = ContentDocument::fallback();
        let partial = ContentDocument::from_json(r#"{"firmName": null, "tagline": ""}"#).unwrap();

        let replaced = doc.merge(partial);

        assert!(replaced.is_empty());
        assert_eq!(doc, ContentDocument::fallback());
    }

    #[test]
    fn find_service_matches_title() {
        let doc = ContentDocument {
            services: Some(vec![
                Service::new("Tax", "<p>Tax</p>", "percent"),
                Service::new("Family", "<p>Family</p>", "home"),
            ]),
            ..Default::default()
        };
        assert_eq!(doc.find_service("Family").unwrap().icon.as_deref(), Some("home"));
        assert!(doc.find_service("Maritime").is_none());
    }
}
