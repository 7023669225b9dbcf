pub mod dotnet_generator;

pub use dotnet_generator::{DotnetGenerator, needs_forced_retry};
