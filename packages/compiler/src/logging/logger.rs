//! Logger Interface
//!
//! The `Logger` trait shared by the emitters and the resolver, plus the
//! in-memory logger used to collect warnings.

use std::sync::Mutex;

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

/// Logger trait.
pub trait Logger {
    fn level(&self) -> LogLevel;
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn level(&self) -> LogLevel {
        (**self).level()
    }
    fn debug(&self, msg: &str) {
        (**self).debug(msg)
    }
    fn info(&self, msg: &str) {
        (**self).info(msg)
    }
    fn warn(&self, msg: &str) {
        (**self).warn(msg)
    }
    fn error(&self, msg: &str) {
        (**self).error(msg)
    }
}

/// Null logger (logs nothing).
pub struct NullLogger;

impl NullLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn warn(&self, _msg: &str) {}
    fn error(&self, _msg: &str) {}
}

/// Forwards warnings and errors to a single-argument callback.
pub struct CallbackLogger<F: Fn(&str)> {
    callback: F,
}

impl<F: Fn(&str)> CallbackLogger<F> {
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F: Fn(&str)> Logger for CallbackLogger<F> {
    fn level(&self) -> LogLevel {
        LogLevel::Warn
    }
    fn debug(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn warn(&self, msg: &str) {
        (self.callback)(msg);
    }
    fn error(&self, msg: &str) {
        (self.callback)(msg);
    }
}

/// Keeps every message at or above its level, in order.
pub struct MemoryLogger {
    level: LogLevel,
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl MemoryLogger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            entries: Mutex::new(Vec::new()),
        }
    }

    /// Recorded messages at exactly `level`.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn record(&self, level: LogLevel, msg: &str) {
        if self.is_enabled(level) {
            self.lock().push((level, msg.to_string()));
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(LogLevel, String)>> {
        // A poisoned log is still a readable log.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MemoryLogger {
    fn default() -> Self {
        Self::new(LogLevel::Debug)
    }
}

impl Logger for MemoryLogger {
    fn level(&self) -> LogLevel {
        self.level
    }
    fn debug(&self, msg: &str) {
        self.record(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.record(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.record(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.record(LogLevel::Error, msg);
    }
}
