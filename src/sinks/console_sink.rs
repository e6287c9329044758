use super::std_stream::StdStream;
use crate::{
    formats::console_format,
    util::{eprint_err, write_buffered, ErrorCode},
    DeferredNow, FormatFunction, Severity,
};
use std::io::Write;

/// A sink that writes to the console.
///
/// `ERROR` messages go to stderr, all others to stdout.
/// By default, lines are rendered with [`console_format`], i.e. a short bracketed tag
/// and the message text, without timestamp.
#[derive(Debug)]
pub struct ConsoleSink {
    min_level: Severity,
    format: FormatFunction,
    support_capture: bool,
}

impl ConsoleSink {
    /// Creates a console sink that writes messages with at least the given severity,
    /// see [`Severity::passes`].
    #[must_use]
    pub fn new(min_level: Severity) -> Self {
        Self {
            min_level,
            format: console_format,
            support_capture: false,
        }
    }

    /// Makes the sink use the given format function instead of [`console_format`].
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Makes the sink write with `println!` and `eprintln!`,
    /// so that `cargo test` can capture the output.
    ///
    /// This is a bit slower than writing directly to the locked streams.
    #[must_use]
    pub fn support_capture(mut self) -> Self {
        self.support_capture = true;
        self
    }

    /// The threshold of this sink.
    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    pub(crate) fn write(
        &self,
        now: &mut DeferredNow,
        level: Severity,
        text: &str,
    ) -> std::io::Result<()> {
        if !level.passes(self.min_level) {
            return Ok(());
        }
        let stream = StdStream::for_level(level);
        if self.support_capture {
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            (self.format)(&mut tmp_buf, now, level, text)
                .unwrap_or_else(|e| eprint_err(ErrorCode::Format, "formatting failed", &e));
            if stream.is_err() {
                eprintln!("{}", String::from_utf8_lossy(&tmp_buf));
            } else {
                println!("{}", String::from_utf8_lossy(&tmp_buf));
            }
            Ok(())
        } else {
            let mut w = stream.lock();
            write_buffered(self.format, now, level, text, &mut w)?;
            w.flush()
        }
    }

    pub(crate) fn flush(&self) -> std::io::Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()
    }
}
