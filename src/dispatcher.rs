use crate::{
    logger_handle::{self, LoggerHandle},
    sinks::Sink,
    util::{eprint_err, ErrorCode},
    DeferredNow, LoggerError, MessageBuilder, Severity,
};

/// Owns an ordered list of sinks and hands every message to each of them.
///
/// The dispatcher itself does not filter: each sink decides with its own threshold
/// whether it renders a message. Sinks are called in the order in which they were added.
///
/// A `Dispatcher` can be used as an explicit context object that is passed to the code
/// that logs, or it can be installed once as the process-wide instance with
/// [`Dispatcher::start`], which is then used by the level macros like
/// [`log_info!`](crate::log_info).
///
/// ```rust
/// use sinklog::{sinks::ConsoleSink, sinks::FileSink, Dispatcher, Severity};
///
/// let dispatcher = Dispatcher::new()
///     .with_sink(ConsoleSink::new(Severity::Info))
///     .with_sink(FileSink::new(Severity::Error, "out.log"));
///
/// dispatcher.write(Severity::Warning, "disk low");
/// dispatcher.message(Severity::Debug).append("retry #").append(3);
/// ```
///
/// Dropping the dispatcher drops its sinks, which closes the files of file sinks.
#[derive(Debug, Default)]
pub struct Dispatcher {
    sinks: Vec<Sink>,
}

impl Dispatcher {
    /// Creates a dispatcher without sinks.
    #[must_use]
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Takes ownership of the sink and adds it at the end of the list.
    pub fn add_sink<S: Into<Sink>>(&mut self, sink: S) {
        self.sinks.push(sink.into());
    }

    /// Like [`Dispatcher::add_sink`], for use in a builder chain.
    #[must_use]
    pub fn with_sink<S: Into<Sink>>(mut self, sink: S) -> Self {
        self.add_sink(sink);
        self
    }

    /// The sinks, in dispatch order.
    #[must_use]
    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    /// The number of sinks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Whether there is no sink.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Whether some sink would render a message with the given severity.
    #[must_use]
    pub fn enabled(&self, level: Severity) -> bool {
        self.sinks.iter().any(|sink| sink.accepts(level))
    }

    /// Hands the text to every sink, in insertion order.
    ///
    /// Never fails; every sink filters and handles its errors on its own.
    /// All sinks see the same timestamp, which is taken when the first sink asks for it.
    pub fn write(&self, level: Severity, text: &str) {
        let mut now = DeferredNow::new();
        for sink in &self.sinks {
            sink.write(&mut now, level, text);
        }
    }

    /// Starts a message with the given severity.
    ///
    /// The message is dispatched exactly once, when the returned builder is finished
    /// or dropped.
    #[allow(clippy::must_use_candidate)]
    pub fn message(&self, level: Severity) -> MessageBuilder<'_> {
        MessageBuilder::new(self, level)
    }

    /// Flushes all sinks.
    pub fn flush(&self) {
        for sink in &self.sinks {
            sink.flush()
                .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
        }
    }

    /// Flushes all sinks and closes their files.
    ///
    /// Messages that are written afterwards reach only the console and buffer sinks.
    pub fn shutdown(&self) {
        for sink in &self.sinks {
            sink.shutdown();
        }
    }

    /// Installs the dispatcher as the process-wide instance.
    ///
    /// Keep the returned handle alive until the end of the program:
    /// dropping it shuts the dispatcher down.
    ///
    /// # Errors
    ///
    /// [`LoggerError::AlreadyInitialized`] if a process-wide instance exists already.
    pub fn start(self) -> Result<LoggerHandle, LoggerError> {
        let dispatcher = logger_handle::install(self)?;
        Ok(LoggerHandle::new(dispatcher))
    }

    /// Installs the dispatcher as the process-wide instance, and registers it as the logger
    /// of the `log` facade, so that `log::info!` etc. reach the sinks as well.
    ///
    /// # Errors
    ///
    /// [`LoggerError::AlreadyInitialized`] if a process-wide instance exists already,
    /// [`LoggerError::Log`] if the `log` facade has a logger already
    /// (the process-wide instance is then installed nevertheless).
    pub fn start_as_log_backend(self) -> Result<LoggerHandle, LoggerError> {
        let dispatcher = logger_handle::install(self)?;
        log::set_logger(dispatcher)?;
        log::set_max_level(log::LevelFilter::Trace);
        Ok(LoggerHandle::new(dispatcher))
    }
}

impl log::Log for Dispatcher {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        Dispatcher::enabled(self, Severity::from(metadata.level()))
    }

    fn log(&self, record: &log::Record) {
        let level = Severity::from(record.level());
        if !Dispatcher::enabled(self, level) {
            return;
        }
        match record.args().as_str() {
            Some(text) => self.write(level, text),
            None => self.write(level, &record.args().to_string()),
        }
    }

    fn flush(&self) {
        Dispatcher::flush(self);
    }
}
