//! Icon renderer adapters.

mod feather;

pub use feather::FeatherIcons;
