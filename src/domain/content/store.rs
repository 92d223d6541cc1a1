//! Content store - owns the current document for a page session.

use crate::domain::foundation::Timestamp;

use super::document::{ContentDocument, PartialContentDocument};

/// Where the current document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Loaded from the configured source (description of the source).
    Source(String),
    /// The configured source failed; the compiled-in document is in use.
    Fallback,
}

/// Marker returned by [`ContentStore::merge`]. The holder must re-bind the
/// page so the presentation matches the merged document.
#[must_use = "merged content is not visible until the page is re-bound"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebindRequired {
    pub revision: u64,
    pub replaced_keys: Vec<&'static str>,
}

/// Holds the loaded (or fallback) content document.
///
/// # Invariants
///
/// - `revision` starts at 0 and increases by one per merge
/// - the document is only replaced through [`ContentStore::merge`]
#[derive(Debug, Clone)]
pub struct ContentStore {
    document: ContentDocument,
    origin: ContentOrigin,
    revision: u64,
    loaded_at: Timestamp,
}

impl ContentStore {
    pub fn new(document: ContentDocument, origin: ContentOrigin) -> Self {
        Self {
            document,
            origin,
            revision: 0,
            loaded_at: Timestamp::now(),
        }
    }

    /// Store holding the compiled-in default document.
    pub fn fallback() -> Self {
        Self::new(ContentDocument::fallback(), ContentOrigin::Fallback)
    }

    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    pub fn origin(&self) -> &ContentOrigin {
        &self.origin
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn loaded_at(&self) -> &Timestamp {
        &self.loaded_at
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == ContentOrigin::Fallback
    }

    /// Shallow-merges `partial` into the current document.
    pub fn merge(&mut self, partial: PartialContentDocument) -> RebindRequired {
        let replaced_keys = self.document.merge(partial);
        self.revision += 1;
        RebindRequired {
            revision: self.revision,
            replaced_keys,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_store_reports_origin() {
        let store = ContentStore::fallback();
        assert!(store.is_fallback());
        assert_eq!(store.revision(), 0);
        assert_eq!(store.document().firm_name.as_deref(), Some("Legal O Flex"));
    }

    #[test]
    fn merge_bumps_revision_and_reports_keys() {
        let mut store = ContentStore::new(
            ContentDocument::default(),
            ContentOrigin::Source("data.json".to_string()),
        );

        let rebind = store.merge(ContentDocument {
            tagline: Some("New tagline".to_string()),
            ..Default::default()
        });

        assert_eq!(rebind.revision, 1);
        assert_eq!(rebind.replaced_keys, vec!["tagline"]);
        assert_eq!(store.document().tagline.as_deref(), Some("New tagline"));
        assert!(!store.is_fallback());
    }

    #[test]
    fn empty_merge_still_requires_rebind() {
        let mut store = ContentStore::fallback();
        let before = store.document().clone();
        let rebind = store.merge(ContentDocument::default());
        assert!(rebind.replaced_keys.is_empty());
        assert_eq!(store.document(), &before);
    }
}
