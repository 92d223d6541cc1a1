//! Presentation surface adapters.
//!
//! - `InMemorySurface` - slot contents held in memory
//! - `HtmlPageRenderer` - renders a surface plus page state as HTML

mod html_renderer;
mod in_memory_surface;

pub use html_renderer::{HtmlPageRenderer, PageView};
pub use in_memory_surface::{InMemorySurface, SlotContent, LOADING_TEXT};
