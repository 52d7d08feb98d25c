//! Panel logging collaborator
//!
//! Panels report what they do through a [`PanelLogger`] handed to them at
//! construction instead of reaching for a process-wide logger. The production
//! implementation forwards to `tracing`; [`MemoryLogger`] keeps entries in
//! memory so callers can inspect them.

use std::cell::RefCell;

/// Log message level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERR"),
        }
    }
}

/// Sink for panel log messages.
pub trait PanelLogger {
    fn log(&self, level: LogLevel, message: &str);

    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Forwards panel messages to `tracing`, tagged with the panel name.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    panel: &'static str,
}

impl TracingLogger {
    pub fn new(panel: &'static str) -> Self {
        Self { panel }
    }

    pub fn panel(&self) -> &'static str {
        self.panel
    }
}

impl PanelLogger for TracingLogger {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => tracing::info!(panel = self.panel, "{}", message),
            LogLevel::Warning => tracing::warn!(panel = self.panel, "{}", message),
            LogLevel::Error => tracing::error!(panel = self.panel, "{}", message),
        }
    }
}

/// A recorded log message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Keeps every message in memory, oldest first.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RefCell<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.borrow().clone()
    }

    pub fn count(&self, level: LogLevel) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|e| e.level == level)
            .count()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl PanelLogger for MemoryLogger {
    fn log(&self, level: LogLevel, message: &str) {
        self.entries.borrow_mut().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}
