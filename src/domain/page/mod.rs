//! Page module - the vocabulary shared by the binder and its surfaces.
//!
//! - `slot` - typed slot handles and the startup registry
//! - `fragment` - repeated children of list slots
//! - `section` - in-page sections and their layout

mod fragment;
mod section;
mod slot;

pub use fragment::{Activation, Fragment};
pub use section::{SectionBounds, SectionId};
pub use slot::{SlotId, SlotKind, SlotRegistry};
