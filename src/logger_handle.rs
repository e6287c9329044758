use crate::{
    util::{eprint_msg, ErrorCode},
    Dispatcher, LoggerError, MessageBuilder, Severity,
};
use std::{fmt, sync::OnceLock};

static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

pub(crate) fn install(dispatcher: Dispatcher) -> Result<&'static Dispatcher, LoggerError> {
    DISPATCHER
        .set(dispatcher)
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    DISPATCHER.get().ok_or(LoggerError::NotInitialized)
}

/// Returns the process-wide dispatcher.
///
/// # Errors
///
/// [`LoggerError::NotInitialized`] if [`Dispatcher::start`] was not yet called.
pub fn dispatcher() -> Result<&'static Dispatcher, LoggerError> {
    DISPATCHER.get().ok_or(LoggerError::NotInitialized)
}

/// Starts a message on the process-wide dispatcher.
///
/// # Errors
///
/// [`LoggerError::NotInitialized`] if [`Dispatcher::start`] was not yet called.
pub fn message(level: Severity) -> Result<MessageBuilder<'static>, LoggerError> {
    Ok(dispatcher()?.message(level))
}

// Used by the level macros.
#[doc(hidden)]
pub fn dispatch_global(level: Severity, args: fmt::Arguments) {
    match dispatcher() {
        Ok(dispatcher) => dispatcher.message(level).append(args).finish(),
        Err(_) => eprint_msg(
            ErrorCode::NotInitialized,
            "log statement before the process-wide dispatcher was started, message dropped",
        ),
    }
}

/// Shuts down the process-wide dispatcher when it is dropped.
///
/// A `LoggerHandle` is returned from [`Dispatcher::start`] and
/// [`Dispatcher::start_as_log_backend`].
///
/// Keep it alive until the very end of your program, because it flushes all sinks and
/// closes the log files when it is dropped.
///
/// ```rust
/// use sinklog::{log_info, sinks::FileSink, Dispatcher, Severity};
/// use std::error::Error;
///
/// fn main() -> Result<(), Box<dyn Error>> {
///     let _logger = Dispatcher::new()
///         .with_sink(FileSink::try_new(Severity::None, "app.log")?)
///         .start()?;
///     log_info!("started");
///     // do work
///     Ok(())
/// }
/// ```
pub struct LoggerHandle {
    dispatcher: &'static Dispatcher,
}

impl LoggerHandle {
    pub(crate) fn new(dispatcher: &'static Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// The process-wide dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &'static Dispatcher {
        self.dispatcher
    }

    /// Flushes all sinks.
    pub fn flush(&self) {
        self.dispatcher.flush();
    }

    /// Flushes all sinks and closes the log files.
    ///
    /// Is called automatically when the handle is dropped.
    pub fn shutdown(&self) {
        self.dispatcher.shutdown();
    }
}

impl Drop for LoggerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for LoggerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHandle")
            .field("sinks", &self.dispatcher.len())
            .finish()
    }
}
