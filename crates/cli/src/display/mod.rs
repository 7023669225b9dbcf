pub mod formatter;

pub use formatter::{describe_injection, print_namespaces, print_plan, print_report};
