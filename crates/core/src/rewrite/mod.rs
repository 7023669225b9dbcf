//! Marker-based source rewriting
//!
//! Generated files are edited with literal substring search, not a parser.
//! A missing marker is always an error, never a guessed offset.

pub mod declaration;
pub mod inheritance;
pub mod markers;
pub mod region;

pub use declaration::{
    NamespaceDeclaration, declaration_namespace, declared_class_name, find_namespace_declaration,
};
pub use inheritance::{
    BaseClassInheritanceInjector, InjectedSource, InjectionOutcome, inject_base_class,
};
pub use markers::NamespaceToken;
pub use region::{SubstitutionRegion, replace_region, rewrite_file};
