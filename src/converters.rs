use sentry_backtrace::current_stacktrace;
use sentry_core::protocol::{Breadcrumb, Event, Level};

use crate::options::SinkOptions;
use crate::record::LogRecord;
use crate::severity::Severity;

/// Creates an [`Event`] from a given [`LogRecord`].
///
/// If the record carries an exception, the event is built from it and its
/// chain of sources. The message is always set, even when it is empty.
pub fn event_from_record(record: &LogRecord<'_>, options: &SinkOptions) -> Event<'static> {
    let mut event = match record.exception {
        Some(exception) => {
            let mut event = sentry_core::event_from_error(exception);
            if options.attach_stacktraces {
                // exception records are sorted in reverse
                if let Some(exc) = event.exception.iter_mut().last() {
                    exc.stacktrace = current_stacktrace();
                }
            }
            event
        }
        None => Event::default(),
    };

    event.level = record.severity().as_level();
    if !record.tag.is_empty() {
        event
            .tags
            .insert(options.tag_key.to_string(), record.tag.to_owned());
    }
    event.message = Some(record.message.to_owned());
    event.logger = Some(options.logger_name.to_string());
    event
}

/// Creates a [`Breadcrumb`] from a given [`LogRecord`].
///
/// A non-empty message becomes a `log` breadcrumb at the given severity.
/// Otherwise the exception's message becomes an `exception` breadcrumb at
/// error level. Returns `None` if there is nothing to record.
pub fn breadcrumb_from_record(record: &LogRecord<'_>, severity: Severity) -> Option<Breadcrumb> {
    if !record.message.is_empty() {
        return Some(Breadcrumb {
            ty: "log".into(),
            category: Some("log".into()),
            level: severity.as_level(),
            message: Some(record.message.to_owned()),
            ..Default::default()
        });
    }

    let message = record.exception?.to_string();
    if message.is_empty() {
        return None;
    }
    Some(Breadcrumb {
        ty: "error".into(),
        category: Some("exception".into()),
        level: Level::Error,
        message: Some(message),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use thiserror::Error;

    use super::*;
    use crate::severity::Priority;

    #[derive(Debug, Error)]
    #[error("disk unplugged")]
    struct RootCause;

    #[derive(Debug, Error)]
    #[error("oops")]
    struct Oops(#[source] RootCause);

    #[derive(Debug, Error)]
    #[error("")]
    struct Silent;

    #[test]
    fn test_event_from_message() {
        let record = LogRecord::new("T", Priority::ERROR, "boom");
        let event = event_from_record(&record, &SinkOptions::default());

        assert_eq!(event.level, Level::Error);
        assert_eq!(event.message.as_deref(), Some("boom"));
        assert_eq!(event.logger.as_deref(), Some("logsink"));
        assert_eq!(event.tags["logsink.tag"], "T");
        assert!(event.exception.is_empty());
    }

    #[test]
    fn test_event_without_tag() {
        let record = LogRecord::new("", Priority::WARN, "careful");
        let event = event_from_record(&record, &SinkOptions::default());

        assert_eq!(event.level, Level::Warning);
        assert!(event.tags.is_empty());
    }

    #[test]
    fn test_event_from_exception() {
        let error = Oops(RootCause);
        let record = LogRecord::new("T", Priority::ASSERT, "").with_exception(&error);
        let options = SinkOptions::default().attach_stacktraces(false);
        let event = event_from_record(&record, &options);

        assert_eq!(event.level, Level::Fatal);
        assert_eq!(event.message.as_deref(), Some(""));
        assert_eq!(event.exception.len(), 2);
        assert_eq!(&event.exception[0].ty, "RootCause");
        assert_eq!(event.exception[1].value.as_deref(), Some("oops"));
        assert!(event.exception[1].stacktrace.is_none());
    }

    #[test]
    fn test_event_custom_names() {
        let record = LogRecord::new("net", Priority::ERROR, "timeout");
        let options = SinkOptions::default()
            .logger_name("app")
            .tag_key("component");
        let event = event_from_record(&record, &options);

        assert_eq!(event.logger.as_deref(), Some("app"));
        assert_eq!(event.tags["component"], "net");
    }

    #[test]
    fn test_breadcrumb_from_message() {
        let error = Oops(RootCause);
        let record = LogRecord::new("T", Priority::INFO, "hi").with_exception(&error);
        let breadcrumb = breadcrumb_from_record(&record, Severity::Info).unwrap();

        assert_eq!(breadcrumb.ty, "log");
        assert_eq!(breadcrumb.category.as_deref(), Some("log"));
        assert_eq!(breadcrumb.level, Level::Info);
        assert_eq!(breadcrumb.message.as_deref(), Some("hi"));
    }

    #[test]
    fn test_breadcrumb_from_exception() {
        let error = Oops(RootCause);
        let record = LogRecord::new("T", Priority::WARN, "").with_exception(&error);
        let breadcrumb = breadcrumb_from_record(&record, Severity::Warning).unwrap();

        assert_eq!(breadcrumb.ty, "error");
        assert_eq!(breadcrumb.category.as_deref(), Some("exception"));
        assert_eq!(breadcrumb.level, Level::Error);
        assert_eq!(breadcrumb.message.as_deref(), Some("oops"));
    }

    #[test]
    fn test_no_breadcrumb() {
        let record = LogRecord::new("T", Priority::ERROR, "");
        assert!(breadcrumb_from_record(&record, Severity::Error).is_none());

        let record = LogRecord::new("T", Priority::ERROR, "").with_exception(&Silent);
        assert!(breadcrumb_from_record(&record, Severity::Error).is_none());
    }
}
