//! Capabilities the scaffold pipeline receives from its host

pub mod generator;
pub mod logger;

pub use generator::{GeneratorOutput, ScaffoldGenerator};
pub use logger::{LogRecord, Logger, NullLogger, RecordingLogger, TracingLogger};
