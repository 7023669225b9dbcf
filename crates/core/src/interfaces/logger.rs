//! Logging interface
//!
//! Scaffold operations never log through a process-wide handle. Each one
//! receives a `&dyn Logger` from its caller, so the host decides where the
//! records end up and tests can inspect them.

use std::sync::Mutex;
use tracing::Level;

/// Structured diagnostic sink
pub trait Logger: Send + Sync {
    /// Emit one record with a level, a message and key/value fields
    fn log(&self, level: Level, message: &str, fields: &[(&str, &str)]);

    fn debug(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(Level::DEBUG, message, fields);
    }

    fn info(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(Level::INFO, message, fields);
    }

    fn warn(&self, message: &str, fields: &[(&str, &str)]) {
        self.log(Level::WARN, message, fields);
    }
}

/// Forwards records to `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str, fields: &[(&str, &str)]) {
        let fields = render_fields(fields);
        if level == Level::ERROR {
            tracing::error!(fields = %fields, "{message}");
        } else if level == Level::WARN {
            tracing::warn!(fields = %fields, "{message}");
        } else if level == Level::INFO {
            tracing::info!(fields = %fields, "{message}");
        } else if level == Level::DEBUG {
            tracing::debug!(fields = %fields, "{message}");
        } else {
            tracing::trace!(fields = %fields, "{message}");
        }
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&self, _level: Level, _message: &str, _fields: &[(&str, &str)]) {}
}

/// One record captured by [`RecordingLogger`]
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Keeps every record in memory
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Records whose message contains `needle`
    pub fn find(&self, needle: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.message.contains(needle))
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str, fields: &[(&str, &str)]) {
        let record = LogRecord {
            level,
            message: message.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        };
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(record);
    }
}

fn render_fields(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(" ")
}
