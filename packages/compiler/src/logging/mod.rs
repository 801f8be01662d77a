//! Logging Module
//!
//! Diagnostics sink shared by the compiler and the locale resolver.

pub mod console_logger;
pub mod logger;

pub use console_logger::ConsoleLogger;
pub use logger::{CallbackLogger, LogLevel, Logger, MemoryLogger, NullLogger};
