//! Icon Renderer Port - placeholder markup and the substitution routine.

/// Port for the icon set.
///
/// Structural changes insert placeholders produced by `placeholder`; the
/// caller then runs `replace_icons` so the placeholders become icons.
pub trait IconRenderer: Send + Sync {
    /// Markup for an icon placeholder.
    fn placeholder(&self, icon: &str) -> String;

    /// Substitutes every pending placeholder on the page.
    fn replace_icons(&self);
}
