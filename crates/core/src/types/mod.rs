pub mod component;

pub use component::{ComponentKind, GeneratedFile, is_valid_component_name};
