use sinklog::{
    log_debug, log_error, log_fatal, log_info, log_verbose, log_warning,
    sinks::{BufferSink, FileSink},
    Dispatcher, LoggerError, Severity,
};

// The process-wide instance can be started only once per process,
// so everything happens in a single test.
#[test]
fn test_global_instance_lifecycle() {
    // before the start
    assert!(matches!(sinklog::dispatcher(), Err(LoggerError::NotInitialized)));
    assert!(matches!(
        sinklog::message(Severity::Info),
        Err(LoggerError::NotInitialized)
    ));
    log_info!("this is dropped, with a diagnostic on stderr");

    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("global.log");
    let buffer = BufferSink::new(Severity::Error).format(sinklog::console_format);
    let buffer_handle = buffer.handle();

    let logger = Dispatcher::new()
        .with_sink(buffer)
        .with_sink(FileSink::new(Severity::Error, &path))
        .start()
        .unwrap_or_else(|e| panic!("Dispatcher initialization failed with {e}"));
    assert_eq!(logger.dispatcher().len(), 2);

    // a second start fails
    assert!(matches!(
        Dispatcher::new().start(),
        Err(LoggerError::AlreadyInitialized)
    ));

    log_fatal!("fatal is below the threshold");
    log_error!("error {}", 1);
    log_warning!("warning {}", 2);
    log_info!("info");
    log_debug!("debug");
    log_verbose!("verbose");

    let x = 4.5;
    sinklog::message(Severity::Info)
        .unwrap()
        .append("x = ")
        .append(x)
        .append(", done");

    assert_eq!(
        buffer_handle.lines().unwrap(),
        vec![
            "[ERROR]: error 1",
            "[WARNING]: warning 2",
            "[INFO]: info",
            "[DEBUG]: debug",
            "[VERBOSE]: verbose",
            "[INFO]: x = 4.5, done",
        ]
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 6);
    assert!(content.lines().next().unwrap().ends_with("] Error:   error 1"));

    // dropping the handle closes the file; later messages reach only the buffer
    drop(logger);
    log_info!("after shutdown");
    assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 6);
    assert_eq!(buffer_handle.len(), 7);
}
