use log::{LevelFilter, SetLoggerError};

use crate::record::LogRecord;
use crate::severity::Priority;
use crate::sink::LogSink;

/// Forwards [`log`] records to a [`LogSink`].
///
/// The record's target becomes the tag, its level the priority and its
/// formatted arguments the message.
#[derive(Debug)]
pub struct Logger<S> {
    sink: S,
    filter: LevelFilter,
}

impl<S: LogSink> Logger<S> {
    /// Creates a logger that lets through `Info` and above.
    pub fn new(sink: S) -> Self {
        Logger {
            sink,
            filter: LevelFilter::Info,
        }
    }

    /// Sets the maximum level forwarded to the sink.
    #[must_use]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The sink records are forwarded to.
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: LogSink> log::Log for Logger<S> {
    fn enabled(&self, md: &log::Metadata<'_>) -> bool {
        md.level() <= self.filter
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = record.args().to_string();
        self.sink.process_record(&LogRecord::new(
            record.target(),
            Priority::from(record.level()),
            &message,
        ));
    }

    fn flush(&self) {}
}

/// Installs a [`Logger`] around `sink` as the global `log` logger.
///
/// This can only succeed once per process.
pub fn init<S: LogSink + 'static>(sink: S, filter: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger::new(sink).filter(filter)))?;
    if filter > log::max_level() {
        log::set_max_level(filter);
    }
    Ok(())
}
