/// Writes a message with the given severity, in `format!` syntax.
///
/// Without target, the message goes to the process-wide dispatcher
/// (see [`Dispatcher::start`](crate::Dispatcher::start)).
/// If that is not started yet, a diagnostic is printed to stderr and the message is dropped.
///
/// With `to: <dispatcher>`, the message goes to the given dispatcher.
///
/// ```rust
/// use sinklog::{log_at, sinks::ConsoleSink, Dispatcher, Severity};
///
/// let dispatcher = Dispatcher::new().with_sink(ConsoleSink::new(Severity::None));
/// let retries = 3;
/// log_at!(to: &dispatcher, Severity::Warning, "giving up after {retries} retries");
/// ```
#[macro_export]
macro_rules! log_at {
    (to: $dispatcher:expr, $level:expr, $($arg:tt)+) => {
        $crate::MessageBuilder::new($dispatcher, $level)
            .append(::std::format_args!($($arg)+))
            .finish()
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::dispatch_global($level, ::std::format_args!($($arg)+))
    };
}

/// Writes a `FATAL` message, see [`log_at!`].
#[macro_export]
macro_rules! log_fatal {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Fatal, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Fatal, $($arg)+)
    };
}

/// Writes an `ERROR` message, see [`log_at!`].
#[macro_export]
macro_rules! log_error {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Error, $($arg)+)
    };
}

/// Writes a `WARNING` message, see [`log_at!`].
#[macro_export]
macro_rules! log_warning {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Warning, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Warning, $($arg)+)
    };
}

/// Writes an `INFO` message, see [`log_at!`].
#[macro_export]
macro_rules! log_info {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Info, $($arg)+)
    };
}

/// Writes a `DEBUG` message, see [`log_at!`].
#[macro_export]
macro_rules! log_debug {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Debug, $($arg)+)
    };
}

/// Writes a `VERBOSE` message, see [`log_at!`].
#[macro_export]
macro_rules! log_verbose {
    (to: $dispatcher:expr, $($arg:tt)+) => {
        $crate::log_at!(to: $dispatcher, $crate::Severity::Verbose, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::Severity::Verbose, $($arg)+)
    };
}

#[cfg(test)]
mod test {
    use crate::{sinks::BufferSink, Dispatcher, Severity};

    #[test]
    fn test_macros_with_explicit_dispatcher() {
        let buffer = BufferSink::new(Severity::Error).format(crate::console_format);
        let handle = buffer.handle();
        let dispatcher = Dispatcher::new().with_sink(buffer);

        let n = 5;
        crate::log_fatal!(to: &dispatcher, "fatal {}", n);
        crate::log_error!(to: &dispatcher, "error {n}");
        crate::log_warning!(to: &dispatcher, "warning");
        crate::log_info!(to: &dispatcher, "info");
        crate::log_debug!(to: &dispatcher, "debug");
        crate::log_verbose!(to: &dispatcher, "verbose");
        crate::log_at!(to: &dispatcher, Severity::Info, "{}-{}", "a", 1);

        assert_eq!(
            handle.lines().unwrap(),
            vec![
                "[ERROR]: error 5",
                "[WARNING]: warning",
                "[INFO]: info",
                "[DEBUG]: debug",
                "[VERBOSE]: verbose",
                "[INFO]: a-1",
            ]
        );
    }

    #[test]
    fn test_macro_without_started_dispatcher_does_not_panic() {
        // unit tests never start the process-wide dispatcher
        crate::log_info!("dropped with a diagnostic");
        assert!(crate::dispatcher().is_err());
    }
}
