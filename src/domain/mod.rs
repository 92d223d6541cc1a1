//! Domain layer containing the page's content model and interaction logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, state machine trait, timestamps)
//! - `content` - Content document, fallback document and the content store
//! - `page` - Slot handles, fragments and sections the binder writes to
//! - `interaction` - Navigation, mobile menu and service overlay controllers
//! - `contact` - Contact form validation and simulated submission

pub mod contact;
pub mod content;
pub mod foundation;
pub mod interaction;
pub mod page;
