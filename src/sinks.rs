//! The sinks, i.e. the output destinations of a [`Dispatcher`](crate::Dispatcher).
//!
//! Each sink has its own threshold (see [`Severity::passes`]) and its own
//! [`FormatFunction`](crate::FormatFunction):
//!
//! * [`ConsoleSink`] writes to stdout, and `ERROR` messages to stderr,
//! * [`FileSink`] writes to a file and flushes after every line,
//! * [`BufferSink`] keeps the lines in memory.
//!
//! The dispatcher owns its sinks as values of the closed enum [`Sink`].
//! Adding a new kind of sink means adding a variant, and the compiler points to
//! every place that has to handle it.

mod buffer_sink;
mod console_sink;
mod file_sink;
mod std_stream;

pub use self::buffer_sink::{BufferHandle, BufferSink};
pub use self::console_sink::ConsoleSink;
pub use self::file_sink::{FileSink, FileSinkBuilder};

use crate::{
    util::{eprint_err, ErrorCode},
    DeferredNow, Severity,
};

/// An output destination, owned by a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug)]
pub enum Sink {
    /// Writes to stdout or stderr.
    Console(ConsoleSink),
    /// Writes to a file.
    File(FileSink),
    /// Writes to memory.
    Buffer(BufferSink),
}

impl Sink {
    /// The threshold of this sink.
    #[must_use]
    pub fn min_level(&self) -> Severity {
        match self {
            Self::Console(s) => s.min_level(),
            Self::File(s) => s.min_level(),
            Self::Buffer(s) => s.min_level(),
        }
    }

    /// Whether this sink renders messages with the given severity.
    #[must_use]
    pub fn accepts(&self, level: Severity) -> bool {
        level.passes(self.min_level())
    }

    /// Renders and writes the text, unless the severity is below the threshold.
    ///
    /// Never fails; write errors are dropped.
    pub fn write(&self, now: &mut DeferredNow, level: Severity, text: &str) {
        let result = match self {
            Self::Console(s) => s.write(now, level, text),
            Self::File(s) => s.write(now, level, text),
            Self::Buffer(s) => s.write(now, level, text),
        };
        result.ok();
    }

    /// Flushes the output.
    ///
    /// # Errors
    ///
    /// `std::io::Error` from the underlying stream or file.
    pub fn flush(&self) -> std::io::Result<()> {
        match self {
            Self::Console(s) => s.flush(),
            Self::File(s) => s.flush(),
            Self::Buffer(_) => Ok(()),
        }
    }

    /// Flushes and releases the output; a file sink closes its file.
    pub fn shutdown(&self) {
        self.flush()
            .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
        if let Self::File(s) = self {
            s.shutdown();
        }
    }
}

impl From<ConsoleSink> for Sink {
    fn from(sink: ConsoleSink) -> Self {
        Self::Console(sink)
    }
}
impl From<FileSink> for Sink {
    fn from(sink: FileSink) -> Self {
        Self::File(sink)
    }
}
impl From<BufferSink> for Sink {
    fn from(sink: BufferSink) -> Self {
        Self::Buffer(sink)
    }
}
