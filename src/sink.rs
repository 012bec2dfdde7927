use std::error::Error;

use sentry_core::sentry_debug;

use crate::converters::{breadcrumb_from_record, event_from_record};
use crate::options::SinkOptions;
use crate::record::LogRecord;
use crate::reporter::{CurrentHub, Reporter};
use crate::severity::Priority;

/// A destination for log records.
///
/// A logging front end fans each call out to the sinks registered with it.
pub trait LogSink: Send + Sync {
    /// Processes a single log call.
    fn process(
        &self,
        tag: &str,
        priority: Priority,
        message: &str,
        exception: Option<&(dyn Error + 'static)>,
    );

    /// Processes a [`LogRecord`].
    fn process_record(&self, record: &LogRecord<'_>) {
        self.process(record.tag, record.priority, record.message, record.exception)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn process(
        &self,
        tag: &str,
        priority: Priority,
        message: &str,
        exception: Option<&(dyn Error + 'static)>,
    ) {
        (**self).process(tag, priority, message, exception)
    }
}

impl<S: LogSink + ?Sized> LogSink for std::sync::Arc<S> {
    fn process(
        &self,
        tag: &str,
        priority: Priority,
        message: &str,
        exception: Option<&(dyn Error + 'static)>,
    ) {
        (**self).process(tag, priority, message, exception)
    }
}

/// A [`LogSink`] that reports to Sentry.
///
/// Records at or above [`SinkOptions::min_event_severity`] are captured as
/// events, records at or above [`SinkOptions::min_breadcrumb_severity`] are
/// added as breadcrumbs. The two decisions are independent, so a record may
/// produce both, either, or nothing. Records with neither a message nor an
/// exception are dropped.
///
/// # Examples
///
/// ```
/// use sentry_logsink::{LogSink, Priority, SentrySink, Severity, SinkOptions};
///
/// let sink = SentrySink::new(SinkOptions::new(Severity::Warning, Severity::Info));
///
/// # let events = sentry::test::with_captured_events(|| {
/// sink.process("Net", Priority::INFO, "connecting", None);
/// sink.process("Net", Priority::ERROR, "connection refused", None);
/// # });
/// # let event = events.into_iter().next().unwrap();
///
/// assert_eq!(event.message.as_deref(), Some("connection refused"));
/// assert_eq!(event.tags["logsink.tag"], "Net");
/// assert_eq!(
///     event.breadcrumbs[0].message.as_deref(),
///     Some("connecting")
/// );
/// ```
#[derive(Debug)]
pub struct SentrySink<R = CurrentHub> {
    reporter: R,
    options: SinkOptions,
}

impl Default for SentrySink<CurrentHub> {
    fn default() -> Self {
        SentrySink::new(SinkOptions::default())
    }
}

impl SentrySink<CurrentHub> {
    /// Creates a sink that reports to the thread's active hub.
    ///
    /// The hub is looked up on every call, so records follow whichever hub
    /// is bound with [`Hub::run`](sentry_core::Hub::run) at the time. To pin
    /// the sink to one hub for its whole lifetime, use
    /// `SentrySink::with_reporter(Hub::current(), options)`.
    pub fn new(options: SinkOptions) -> Self {
        SentrySink::with_reporter(CurrentHub, options)
    }
}

impl<R: Reporter> SentrySink<R> {
    /// Creates a sink that reports to the given [`Reporter`].
    pub fn with_reporter(reporter: R, options: SinkOptions) -> Self {
        SentrySink { reporter, options }
    }

    /// The options this sink was created with.
    pub fn options(&self) -> &SinkOptions {
        &self.options
    }

    /// The reporter this sink dispatches to.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}

impl<R: Reporter> LogSink for SentrySink<R> {
    fn process(
        &self,
        tag: &str,
        priority: Priority,
        message: &str,
        exception: Option<&(dyn Error + 'static)>,
    ) {
        let record = LogRecord {
            tag,
            priority,
            message,
            exception,
        };
        if record.is_empty() {
            sentry_debug!("[LogSink] Dropping empty record with tag {:?}", tag);
            return;
        }

        let severity = record.severity();

        if self.options.creates_event(severity) {
            let event = event_from_record(&record, &self.options);
            sentry_debug!("[LogSink] Capturing {} event {}", severity, event.event_id);
            self.reporter.capture_event(event);
        }

        if self.options.creates_breadcrumb(severity) {
            if let Some(breadcrumb) = breadcrumb_from_record(&record, severity) {
                sentry_debug!("[LogSink] Adding {} breadcrumb", severity);
                self.reporter.add_breadcrumb(breadcrumb);
            }
        }
    }
}
