use std::fmt;
use std::str::FromStr;

use sentry_core::Level;
use thiserror::Error;

/// The severity of a log record, ordered from least to most important.
///
/// Thresholds are compared by ordinal, so `Severity::Warning` lets through
/// `Warning`, `Error` and `Fatal`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Verbose debugging output.
    Debug,
    /// Informational messages.
    Info,
    /// Something looks wrong but the application can carry on.
    Warning,
    /// An error.
    Error,
    /// A failure that usually ends the process.
    Fatal,
}

impl Severity {
    /// Returns the lowercase name of this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }

    /// Converts into the Sentry protocol [`Level`].
    pub fn as_level(self) -> Level {
        match self {
            Severity::Debug => Level::Debug,
            Severity::Info => Level::Info,
            Severity::Warning => Level::Warning,
            Severity::Error => Level::Error,
            Severity::Fatal => Level::Fatal,
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Level {
        severity.as_level()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error used when parsing [`Severity`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid severity {0:?}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(string: &str) -> Result<Severity, Self::Err> {
        Ok(match string.trim().to_ascii_lowercase().as_str() {
            "debug" | "verbose" => Severity::Debug,
            "info" => Severity::Info,
            "warning" | "warn" => Severity::Warning,
            "error" => Severity::Error,
            "fatal" | "assert" => Severity::Fatal,
            _ => return Err(ParseSeverityError(string.to_owned())),
        })
    }
}

/// A platform log priority code.
///
/// The named constants carry the platform's numeric values. Any other value
/// is still a valid priority; it just maps to [`Severity::Debug`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Priority(pub i32);

impl Priority {
    /// Verbose output.
    pub const VERBOSE: Priority = Priority(2);
    /// Debug output.
    pub const DEBUG: Priority = Priority(3);
    /// Informational output.
    pub const INFO: Priority = Priority(4);
    /// Warnings.
    pub const WARN: Priority = Priority(5);
    /// Errors.
    pub const ERROR: Priority = Priority(6);
    /// Assertion failures ("what a terrible failure").
    pub const ASSERT: Priority = Priority(7);
}

impl From<i32> for Priority {
    fn from(code: i32) -> Priority {
        Priority(code)
    }
}

impl From<log::Level> for Priority {
    fn from(level: log::Level) -> Priority {
        match level {
            log::Level::Error => Priority::ERROR,
            log::Level::Warn => Priority::WARN,
            log::Level::Info => Priority::INFO,
            log::Level::Debug => Priority::DEBUG,
            log::Level::Trace => Priority::VERBOSE,
        }
    }
}

/// Maps a platform [`Priority`] to a [`Severity`].
///
/// Unknown codes map to [`Severity::Debug`].
pub fn map_severity(priority: Priority) -> Severity {
    match priority {
        Priority::ASSERT => Severity::Fatal,
        Priority::ERROR => Severity::Error,
        Priority::WARN => Severity::Warning,
        Priority::INFO => Severity::Info,
        Priority::DEBUG | Priority::VERBOSE => Severity::Debug,
        _ => Severity::Debug,
    }
}
