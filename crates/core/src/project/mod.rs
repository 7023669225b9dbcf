//! Project root discovery

pub mod locator;

pub use locator::{ProjectMarkers, ProjectRoot, ProjectRootLocator};
