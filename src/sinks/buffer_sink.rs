use crate::{
    formats::message_format,
    util::{eprint_err, io_err, ErrorCode},
    DeferredNow, FormatFunction, LoggerError, Severity,
};
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard},
};

/// A sink that keeps the formatted lines in memory.
///
/// With [`BufferSink::with_max_size`] the buffer holds at most the given number of bytes,
/// the oldest lines are evicted first.
/// The content can be read through a [`BufferHandle`], which stays usable after the sink
/// was handed over to a [`Dispatcher`](crate::Dispatcher).
#[derive(Debug)]
pub struct BufferSink {
    min_level: Severity,
    state: Arc<Mutex<State>>,
}

#[derive(Debug)]
struct State {
    lines: VecDeque<String>,
    size: usize,
    max_size: Option<usize>,
    format: FormatFunction,
}

impl BufferSink {
    /// Creates an unbounded buffer sink that uses [`message_format`].
    #[must_use]
    pub fn new(min_level: Severity) -> Self {
        Self {
            min_level,
            state: Arc::new(Mutex::new(State {
                lines: VecDeque::new(),
                size: 0,
                max_size: None,
                format: message_format,
            })),
        }
    }

    /// Limits the buffer to the given number of bytes.
    #[must_use]
    pub fn with_max_size(self, max_size: usize) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.max_size = Some(max_size);
        }
        self
    }

    /// Makes the sink use the given format function instead of [`message_format`].
    #[must_use]
    pub fn format(self, format: FormatFunction) -> Self {
        if let Ok(mut state) = self.state.lock() {
            state.format = format;
        }
        self
    }

    /// The threshold of this sink.
    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    /// Returns a handle for reading the buffer.
    #[must_use]
    pub fn handle(&self) -> BufferHandle {
        BufferHandle(Arc::clone(&self.state))
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
        let mut state = self.state.lock().map_err(|_e| io_err("Poison"))?;

        let mut line = Vec::<u8>::with_capacity(80);
        (state.format)(&mut line, now, level, text).inspect_err(|e| {
            eprint_err(ErrorCode::Format, "formatting failed", e);
        })?;
        let line = String::from_utf8_lossy(&line).into_owned();

        if let Some(max_size) = state.max_size {
            if line.len() > max_size {
                state.lines.clear();
                state.size = 0;
                return Ok(());
            }
            while state.size + line.len() > max_size {
                match state.lines.pop_front() {
                    Some(old) => state.size -= old.len(),
                    None => break,
                }
            }
        }
        state.size += line.len();
        state.lines.push_back(line);
        Ok(())
    }
}

/// Gives access to the content of a [`BufferSink`].
#[derive(Clone, Debug)]
pub struct BufferHandle(Arc<Mutex<State>>);

impl BufferHandle {
    fn lock(&self) -> Result<MutexGuard<'_, State>, LoggerError> {
        self.0.lock().map_err(|_| LoggerError::Poison)
    }

    /// A copy of the buffered lines, oldest first, without line breaks.
    ///
    /// # Errors
    ///
    /// `LoggerError::Poison` if the buffer's mutex is poisoned.
    pub fn lines(&self) -> Result<Vec<String>, LoggerError> {
        Ok(self.lock()?.lines.iter().cloned().collect())
    }

    /// The buffered lines as one text, each line terminated with a line break.
    ///
    /// # Errors
    ///
    /// `LoggerError::Poison` if the buffer's mutex is poisoned.
    pub fn text(&self) -> Result<String, LoggerError> {
        let state = self.lock()?;
        let mut text = String::with_capacity(state.size + state.lines.len());
        for line in &state.lines {
            text.push_str(line);
            text.push('\n');
        }
        Ok(text)
    }

    /// The number of buffered lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map_or(0, |state| state.lines.len())
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all buffered lines.
    pub fn clear(&self) {
        match self.lock() {
            Ok(mut state) => {
                state.lines.clear();
                state.size = 0;
            }
            Err(e) => eprint_err(ErrorCode::Poison, "buffer sink is poisoned", &e),
        }
    }
}
