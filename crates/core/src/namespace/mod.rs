//! Dotted namespaces derived from the folder hierarchy

pub mod builder;

pub use builder::{NamespaceBuilder, NamespacePair};
