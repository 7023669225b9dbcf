pub mod generator_command;

pub use generator_command::GeneratorCommand;
