//! Tag-based console logging
//!
//! Standard levels (Error/Warning/Info/Debug) with per-module debug gating:
//! debug output for a tag is only shown when the matching `--debug-<module>`
//! flag is present on the command line.
//!
//! ```text
//! logger::info(LogTag::System, "starting up");
//! logger::debug(LogTag::Api, "request details");  // only with --debug-api
//! ```

use chrono::Utc;
use colored::*;

use crate::arguments;

/// Source module of a log line, used for display and debug gating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    System,
    Api,
    Quotes,
    Cache,
    Webserver,
}

impl LogTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Api => "API",
            LogTag::Quotes => "QUOTES",
            LogTag::Cache => "CACHE",
            LogTag::Webserver => "WEBSERVER",
        }
    }

    /// Whether `--debug-<module>` was passed for this tag
    fn debug_enabled(&self) -> bool {
        match self {
            LogTag::System => true,
            LogTag::Api => arguments::is_debug_api_enabled(),
            LogTag::Quotes => arguments::is_debug_quotes_enabled(),
            LogTag::Cache => arguments::is_debug_cache_enabled(),
            LogTag::Webserver => arguments::is_debug_webserver_enabled(),
        }
    }

    fn colored(&self) -> ColoredString {
        match self {
            LogTag::System => self.as_str().green().bold(),
            LogTag::Api => self.as_str().cyan().bold(),
            LogTag::Quotes => self.as_str().yellow().bold(),
            LogTag::Cache => self.as_str().magenta().bold(),
            LogTag::Webserver => self.as_str().bright_green().bold(),
        }
    }
}

/// Levels ordered by severity; Debug is gated per-tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }
}

fn should_log(tag: LogTag, level: LogLevel) -> bool {
    match level {
        // Errors always log
        LogLevel::Error | LogLevel::Warning | LogLevel::Info => true,
        LogLevel::Debug => tag.debug_enabled(),
    }
}

fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(tag, level) {
        return;
    }

    let timestamp = Utc::now().format("%H:%M:%S").to_string();
    let level_str = match level {
        LogLevel::Error => level.as_str().red().bold(),
        LogLevel::Warning => level.as_str().yellow().bold(),
        LogLevel::Info => level.as_str().normal(),
        LogLevel::Debug => level.as_str().dimmed(),
    };

    println!(
        "{} {} {} {}",
        format!("[{}]", timestamp).dimmed(),
        level_str,
        tag.colored(),
        message
    );
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level
pub fn info(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level, only shown with the tag's `--debug-<module>` flag
pub fn debug(tag: LogTag, message: &str) {
    log_internal(tag, LogLevel::Debug, message);
}
