//! Content module - the firm's page content and the store that owns it.

mod defaults;
mod document;
mod store;

pub use document::{
    About, ContactInfo, ContentDocument, PartialContentDocument, Service, SocialMedia,
};
pub use store::{ContentOrigin, ContentStore, RebindRequired};
