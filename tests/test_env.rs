use std::env;

use sentry_logsink::{
    ConfigError, SentrySink, Severity, SinkOptions, BREADCRUMB_LEVEL_ENV, EVENT_LEVEL_ENV,
};

// The environment is process-wide; all mutation stays in this one test.
#[test]
fn test_options_from_env() {
    env::remove_var(EVENT_LEVEL_ENV);
    env::remove_var(BREADCRUMB_LEVEL_ENV);
    assert_eq!(SinkOptions::from_env().unwrap(), SinkOptions::default());

    env::set_var(EVENT_LEVEL_ENV, "warning");
    env::set_var(BREADCRUMB_LEVEL_ENV, "Debug");
    let sink = SentrySink::new(SinkOptions::from_env().unwrap());
    assert_eq!(sink.options().min_event_severity, Severity::Warning);
    assert_eq!(sink.options().min_breadcrumb_severity, Severity::Debug);

    let options = SinkOptions::new(Severity::Fatal, Severity::Fatal)
        .attach_stacktraces(false)
        .apply_env()
        .unwrap();
    assert_eq!(options.min_event_severity, Severity::Warning);
    assert!(!options.attach_stacktraces);

    env::set_var(EVENT_LEVEL_ENV, "loud");
    match SinkOptions::from_env() {
        Err(ConfigError::InvalidSeverity { var, value, .. }) => {
            assert_eq!(var, EVENT_LEVEL_ENV);
            assert_eq!(value, "loud");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    env::remove_var(EVENT_LEVEL_ENV);
    env::remove_var(BREADCRUMB_LEVEL_ENV);
}
