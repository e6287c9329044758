use crate::{Dispatcher, Severity};
use std::fmt::{self, Display, Write};

/// Collects the parts of one message and dispatches it exactly once.
///
/// A builder is bound to a [`Dispatcher`] and a severity. Appended values are rendered
/// with their `Display` implementation and concatenated without separators.
/// The message is handed to [`Dispatcher::write`] when [`MessageBuilder::finish`] is called,
/// or when the builder is dropped, whatever happens first.
/// Used as a temporary, the builder thus dispatches at the end of the statement:
///
/// ```rust
/// # use sinklog::{sinks::ConsoleSink, Dispatcher, Severity};
/// # let dispatcher = Dispatcher::new().with_sink(ConsoleSink::new(Severity::None));
/// dispatcher
///     .message(Severity::Info)
///     .append("loaded ")
///     .append(17)
///     .append(" entries");
/// ```
///
/// If no sink accepts the severity, appending does not render anything.
pub struct MessageBuilder<'a> {
    dispatcher: &'a Dispatcher,
    level: Severity,
    buffer: String,
    enabled: bool,
    dispatched: bool,
}

impl<'a> MessageBuilder<'a> {
    /// Starts a message for the given dispatcher.
    #[allow(clippy::must_use_candidate)]
    pub fn new(dispatcher: &'a Dispatcher, level: Severity) -> Self {
        Self {
            dispatcher,
            level,
            buffer: String::new(),
            enabled: dispatcher.enabled(level),
            dispatched: false,
        }
    }

    /// Appends the textual representation of the value; for use in a single chained expression.
    #[allow(clippy::return_self_not_must_use)]
    pub fn append<T: Display>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends the textual representation of the value; for use with a builder in a binding.
    pub fn push<T: Display>(&mut self, value: T) -> &mut Self {
        if self.enabled {
            write!(self.buffer, "{value}").ok();
        }
        self
    }

    /// The severity of the message.
    #[must_use]
    pub fn level(&self) -> Severity {
        self.level
    }

    /// The text collected so far.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Dispatches the message now.
    pub fn finish(mut self) {
        self.dispatch();
    }

    fn dispatch(&mut self) {
        if !self.dispatched {
            self.dispatched = true;
            self.dispatcher.write(self.level, &self.buffer);
        }
    }
}

impl Write for MessageBuilder<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.enabled {
            self.buffer.push_str(s);
        }
        Ok(())
    }
}

impl Drop for MessageBuilder<'_> {
    fn drop(&mut self) {
        self.dispatch();
    }
}

impl fmt::Debug for MessageBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBuilder")
            .field("level", &self.level)
            .field("buffer", &self.buffer)
            .field("dispatched", &self.dispatched)
            .finish_non_exhaustive()
    }
}
