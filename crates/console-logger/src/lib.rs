//! Console Logger
//!
//! `log` backend for WASM frontends. Records go to the browser console and the
//! most recent lines are kept in a circular buffer so they can be inspected
//! after the fact.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept by the global logger
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity,
            buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        buffer.iter().cloned().collect()
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        while buffer.len() >= self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

/// Install the global logger with the default buffer size
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    init_with(level, DEFAULT_CAPACITY)
}

/// Install the global logger. Fails if another logger is already set.
pub fn init_with(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Lines buffered by the global logger, empty if it was never installed
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

fn format_record(record: &Record) -> String {
    format!("{:<5} {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, message: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target("guard")
                .build(),
        );
    }

    #[test]
    fn test_filters_below_level() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 8);

        emit(&logger, Level::Debug, "hidden");
        emit(&logger, Level::Warn, "shown");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
        assert!(lines[0].starts_with("WARN"));
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 2);

        emit(&logger, Level::Info, "first");
        emit(&logger, Level::Info, "second");
        emit(&logger, Level::Info, "third");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("second"));
        assert!(lines[1].ends_with("third"));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let logger = ConsoleLogger::new(LevelFilter::Trace, 0);
        emit(&logger, Level::Error, "gone");
        assert!(logger.recent().is_empty());
    }

    #[test]
    fn test_line_carries_target() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 4);
        emit(&logger, Level::Info, "bound 3 triggers");
        assert_eq!(logger.recent()[0], "INFO  guard: bound 3 triggers");
    }
}
