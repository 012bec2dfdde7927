use std::borrow::Cow;
use std::env;

use thiserror::Error;

use crate::severity::{ParseSeverityError, Severity};

/// The logger name set on every captured event.
pub const DEFAULT_LOGGER: &str = "logsink";

/// The tag under which a record's tag is stored on events.
pub const DEFAULT_TAG_KEY: &str = "logsink.tag";

/// Environment variable overriding [`SinkOptions::min_event_severity`].
pub const EVENT_LEVEL_ENV: &str = "SENTRY_LOGSINK_EVENT_LEVEL";

/// Environment variable overriding [`SinkOptions::min_breadcrumb_severity`].
pub const BREADCRUMB_LEVEL_ENV: &str = "SENTRY_LOGSINK_BREADCRUMB_LEVEL";

/// An error raised while reading [`SinkOptions`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held something that is not a severity.
    #[error("{var} is set to an invalid severity {value:?}")]
    InvalidSeverity {
        /// The offending variable.
        var: &'static str,
        /// The value the variable held.
        value: String,
        /// Why the value was rejected.
        #[source]
        source: ParseSeverityError,
    },
}

/// Configuration of a [`SentrySink`](crate::SentrySink).
///
/// The options are captured when the sink is created and never change
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkOptions {
    /// Records at or above this severity are captured as events.
    /// (defaults to `Error`)
    pub min_event_severity: Severity,
    /// Records at or above this severity are recorded as breadcrumbs.
    /// (defaults to `Info`)
    pub min_breadcrumb_severity: Severity,
    /// If set to `true`, the current stacktrace is attached to events that
    /// carry an exception. (expensive, defaults to `true`)
    pub attach_stacktraces: bool,
    /// The `logger` of captured events.
    pub logger_name: Cow<'static, str>,
    /// The tag key used for a record's tag.
    pub tag_key: Cow<'static, str>,
}

impl Default for SinkOptions {
    fn default() -> Self {
        SinkOptions::new(Severity::Error, Severity::Info)
    }
}

impl SinkOptions {
    /// Creates options with the given thresholds.
    pub fn new(min_event_severity: Severity, min_breadcrumb_severity: Severity) -> Self {
        SinkOptions {
            min_event_severity,
            min_breadcrumb_severity,
            attach_stacktraces: true,
            logger_name: Cow::Borrowed(DEFAULT_LOGGER),
            tag_key: Cow::Borrowed(DEFAULT_TAG_KEY),
        }
    }

    /// Creates default options, overridden by the environment.
    ///
    /// Reads `SENTRY_LOGSINK_EVENT_LEVEL` and `SENTRY_LOGSINK_BREADCRUMB_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Applies the environment overrides on top of these options.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_vars(|var| env::var(var).ok())
    }

    fn apply_vars<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let parse = |var: &'static str| -> Result<Option<Severity>, ConfigError> {
            match lookup(var) {
                Some(value) => match value.parse::<Severity>() {
                    Ok(severity) => Ok(Some(severity)),
                    Err(source) => Err(ConfigError::InvalidSeverity { var, value, source }),
                },
                None => Ok(None),
            }
        };
        if let Some(severity) = parse(EVENT_LEVEL_ENV)? {
            self.min_event_severity = severity;
        }
        if let Some(severity) = parse(BREADCRUMB_LEVEL_ENV)? {
            self.min_breadcrumb_severity = severity;
        }
        Ok(self)
    }

    /// Sets the minimum severity for events.
    #[must_use]
    pub fn min_event_severity(mut self, severity: Severity) -> Self {
        self.min_event_severity = severity;
        self
    }

    /// Sets the minimum severity for breadcrumbs.
    #[must_use]
    pub fn min_breadcrumb_severity(mut self, severity: Severity) -> Self {
        self.min_breadcrumb_severity = severity;
        self
    }

    /// Enables or disables stacktraces on exception events.
    #[must_use]
    pub fn attach_stacktraces(mut self, attach: bool) -> Self {
        self.attach_stacktraces = attach;
        self
    }

    /// Overrides the logger name of captured events.
    #[must_use]
    pub fn logger_name<N: Into<Cow<'static, str>>>(mut self, name: N) -> Self {
        self.logger_name = name.into();
        self
    }

    /// Overrides the tag key used for a record's tag.
    #[must_use]
    pub fn tag_key<K: Into<Cow<'static, str>>>(mut self, key: K) -> Self {
        self.tag_key = key.into();
        self
    }

    /// Returns `true` if a record of this severity becomes an event.
    #[inline(always)]
    pub(crate) fn creates_event(&self, severity: Severity) -> bool {
        severity >= self.min_event_severity
    }

    /// Returns `true` if a record of this severity becomes a breadcrumb.
    #[inline(always)]
    pub(crate) fn creates_breadcrumb(&self, severity: Severity) -> bool {
        severity >= self.min_breadcrumb_severity
    }
}
