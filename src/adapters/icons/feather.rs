//! Feather icon set adapter.
//!
//! Placeholders are `<i data-feather="key">` elements; the page script
//! swaps them for SVGs when `feather.replace()` runs. Server-side the
//! adapter only counts refresh requests so the renderer knows to emit the
//! replace call.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ports::IconRenderer;

#[derive(Debug, Default)]
pub struct FeatherIcons {
    refreshes: AtomicU64,
}

impl FeatherIcons {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times substitution has been requested.
    pub fn refresh_count(&self) -> u64 {
        self.refreshes.load(Ordering::Relaxed)
    }
}

impl IconRenderer for FeatherIcons {
    fn placeholder(&self, icon: &str) -> String {
        format!(
            r#"<i data-feather="{}"></i>"#,
            icon.replace('&', "&amp;").replace('"', "&quot;")
        )
    }

    fn replace_icons(&self) {
        let count = self.refreshes.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(refresh = count, "Icon substitution requested");
    }
}
