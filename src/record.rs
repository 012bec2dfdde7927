use std::error::Error;
use std::fmt;

use crate::severity::{map_severity, Priority, Severity};

/// A single log call, borrowed from the caller.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    /// The caller supplied tag, possibly empty.
    pub tag: &'a str,
    /// The platform priority code.
    pub priority: Priority,
    /// The log message, possibly empty.
    pub message: &'a str,
    /// An error that accompanies the message.
    pub exception: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record without an exception.
    pub fn new(tag: &'a str, priority: Priority, message: &'a str) -> Self {
        LogRecord {
            tag,
            priority,
            message,
            exception: None,
        }
    }

    /// Attaches an exception to the record.
    #[must_use]
    pub fn with_exception(mut self, exception: &'a (dyn Error + 'static)) -> Self {
        self.exception = Some(exception);
        self
    }

    /// The [`Severity`] this record's priority maps to.
    pub fn severity(&self) -> Severity {
        map_severity(self.priority)
    }

    /// Returns `true` if there is neither a message nor an exception.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.exception.is_none()
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("tag", &self.tag)
            .field("priority", &self.priority)
            .field("message", &self.message)
            .field("exception", &self.exception.map(ToString::to_string))
            .finish()
    }
}
