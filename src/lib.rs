//! Reports tagged, priority-based application logs to Sentry.
//!
//! Many applications log through a small front end that hands every call
//! (a tag, a platform priority code, a message and an optional error) to a
//! set of sinks. This crate provides [`SentrySink`], a [`LogSink`] that turns
//! those calls into Sentry events and breadcrumbs.
//!
//! Each record is mapped to a [`Severity`] and checked against two
//! independent thresholds. Records at or above
//! [`SinkOptions::min_event_severity`] are captured as events, and records at
//! or above [`SinkOptions::min_breadcrumb_severity`] are added as breadcrumbs
//! to be sent along with the next event. By default anything from `Info` up
//! becomes a breadcrumb and anything from `Error` up becomes an event.
//!
//! # Examples
//!
//! ```
//! use sentry_logsink::{LogSink, Priority, SentrySink, SinkOptions};
//!
//! let sink = SentrySink::new(SinkOptions::default());
//! let _sentry = sentry::init(sentry::ClientOptions::default());
//!
//! sink.process("Startup", Priority::INFO, "Generates a breadcrumb", None);
//! sink.process("Startup", Priority::ERROR, "Generates an event", None);
//! ```
//!
//! Errors are passed along with the record and end up as the exception of
//! the event:
//!
//! ```
//! use sentry_logsink::{LogSink, Priority, SentrySink, Severity, SinkOptions};
//!
//! let sink = SentrySink::new(SinkOptions::new(Severity::Warning, Severity::Info));
//! let err = "NaN".parse::<u32>().unwrap_err();
//!
//! # let events = sentry::test::with_captured_events(|| {
//! sink.process("Parser", Priority::WARN, "", Some(&err));
//! # });
//! # let event = events.into_iter().next().unwrap();
//!
//! assert_eq!(event.level, sentry::Level::Warning);
//! assert_eq!(event.exception[0].ty, "ParseIntError");
//! ```
//!
//! The sink can also be installed as the global [`log`] logger:
//!
//! ```
//! use sentry_logsink::{SentrySink, SinkOptions};
//!
//! sentry_logsink::init(SentrySink::new(SinkOptions::default()), log::LevelFilter::Info).ok();
//!
//! log::info!("Generates a breadcrumb");
//! ```
//!
//! # Configuration
//!
//! Besides the builder methods on [`SinkOptions`], the thresholds can be
//! read from the `SENTRY_LOGSINK_EVENT_LEVEL` and
//! `SENTRY_LOGSINK_BREADCRUMB_LEVEL` environment variables through
//! [`SinkOptions::from_env`].

#![doc(html_favicon_url = "https://sentry-brand.storage.googleapis.com/favicon.ico")]
#![doc(html_logo_url = "https://sentry-brand.storage.googleapis.com/sentry-glyph-black.png")]
#![warn(missing_docs)]
#![deny(unsafe_code)]

mod converters;
mod logger;
mod options;
mod record;
mod reporter;
mod severity;
mod sink;

pub use converters::{breadcrumb_from_record, event_from_record};
pub use logger::{init, Logger};
pub use options::{
    ConfigError, SinkOptions, BREADCRUMB_LEVEL_ENV, DEFAULT_LOGGER, DEFAULT_TAG_KEY,
    EVENT_LEVEL_ENV,
};
pub use record::LogRecord;
pub use reporter::{CurrentHub, Reporter};
pub use severity::{map_severity, ParseSeverityError, Priority, Severity};
pub use sink::{LogSink, SentrySink};
