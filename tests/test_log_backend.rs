use log::*;
use sinklog::{sinks::BufferSink, Dispatcher, LoggerError, Severity};

#[test]
fn test_log_facade_reaches_the_sinks() {
    let buffer = BufferSink::new(Severity::Warning).format(sinklog::console_format);
    let buffer_handle = buffer.handle();
    let _logger = Dispatcher::new()
        .with_sink(buffer)
        .start_as_log_backend()
        .unwrap_or_else(|e| panic!("Dispatcher initialization failed with {e}"));

    error!("This is an error message - you must not see it!");
    warn!("This is a warning");
    info!("This is an info message");
    debug!("This is a debug message");
    trace!("This is a trace message with {} args", 1);

    // the macros of this crate and of the log facade write to the same sinks
    sinklog::log_warning!("and a warning through sinklog");

    assert_eq!(
        buffer_handle.lines().unwrap(),
        vec![
            "[WARNING]: This is a warning",
            "[INFO]: This is an info message",
            "[DEBUG]: This is a debug message",
            "[VERBOSE]: This is a trace message with 1 args",
            "[WARNING]: and a warning through sinklog",
        ]
    );

    assert!(matches!(
        Dispatcher::new().start_as_log_backend(),
        Err(LoggerError::AlreadyInitialized)
    ));
}
