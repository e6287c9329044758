mod builder;

pub use self::builder::FileSinkBuilder;

use crate::{
    util::{eprint_err, io_err, write_buffered, ErrorCode},
    DeferredNow, FormatFunction, LoggerError, Severity,
};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

/// A sink that writes to a file.
///
/// The file is opened when the sink is created; existing content is truncated,
/// unless [`FileSinkBuilder::append`] is used.
/// By default, lines are rendered with [`file_format`](crate::file_format), i.e. like
///
/// ```text
/// [2024-01-13 15:25:01] Warning: disk low
/// ```
///
/// Every line is flushed right after it was written, so it survives a crash of the program.
///
/// If the file cannot be opened, [`FileSink::new`] prints a diagnostic to stderr once
/// and returns a sink that silently drops everything.
/// Use [`FileSink::try_new`] if you prefer to see the error.
///
/// The file is closed when the sink is dropped or shut down.
#[derive(Debug)]
pub struct FileSink {
    min_level: Severity,
    format: FormatFunction,
    path: PathBuf,
    // None if opening failed, or after shutdown
    o_file: Mutex<Option<File>>,
}

impl FileSink {
    /// Creates a file sink, and opens (and truncates) the file.
    ///
    /// A failure to open the file is printed to stderr, and leaves the sink in a degraded
    /// state where all writes are silently dropped.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(min_level: Severity, path: P) -> Self {
        FileSinkBuilder::new(min_level, path).build()
    }

    /// Creates a file sink, and opens (and truncates) the file.
    ///
    /// # Errors
    ///
    /// [`LoggerError::OpenFile`] if the file cannot be opened.
    pub fn try_new<P: Into<PathBuf>>(min_level: Severity, path: P) -> Result<Self, LoggerError> {
        FileSinkBuilder::new(min_level, path).try_build()
    }

    /// Returns a builder that allows influencing how the file is opened and written.
    #[must_use]
    pub fn builder<P: Into<PathBuf>>(min_level: Severity, path: P) -> FileSinkBuilder {
        FileSinkBuilder::new(min_level, path)
    }

    pub(crate) fn from_parts(
        min_level: Severity,
        format: FormatFunction,
        path: PathBuf,
        o_file: Option<File>,
    ) -> Self {
        Self {
            min_level,
            format,
            path,
            o_file: Mutex::new(o_file),
        }
    }

    /// The threshold of this sink.
    #[must_use]
    pub fn min_level(&self) -> Severity {
        self.min_level
    }

    /// The path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the file is open, i.e. whether writes can reach it.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lock_file().is_ok_and(|o_file| o_file.is_some())
    }

    fn lock_file(&self) -> Result<MutexGuard<'_, Option<File>>, std::io::Error> {
        self.o_file.lock().map_err(|_e| io_err("Poison"))
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
        let mut o_file = self.lock_file()?;
        match *o_file {
            Some(ref mut file) => {
                write_buffered(self.format, now, level, text, file)?;
                file.flush()
            }
            None => Ok(()),
        }
    }

    pub(crate) fn flush(&self) -> std::io::Result<()> {
        let mut o_file = self.lock_file()?;
        match *o_file {
            Some(ref mut file) => file.flush(),
            None => Ok(()),
        }
    }

    // Closes the file; later writes are dropped.
    pub(crate) fn shutdown(&self) {
        match self.lock_file() {
            Ok(mut o_file) => {
                if let Some(mut file) = o_file.take() {
                    file.flush()
                        .unwrap_or_else(|e| eprint_err(ErrorCode::Flush, "flushing failed", &e));
                }
            }
            Err(e) => eprint_err(ErrorCode::Poison, "file sink is poisoned", &e),
        }
    }
}

#[cfg(test)]
mod test {
    use super::FileSink;
    use crate::{DeferredNow, Severity};

    #[test]
    fn test_write_and_filter() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("sink.log");
        let sink = FileSink::new(Severity::Debug, &path);
        assert!(sink.is_open());
        assert_eq!(sink.path(), path.as_path());

        sink.write(&mut DeferredNow::new(), Severity::Debug, "first")
            .unwrap();
        sink.write(&mut DeferredNow::new(), Severity::Error, "dropped")
            .unwrap();
        sink.write(&mut DeferredNow::new(), Severity::Verbose, "second")
            .unwrap();

        // no flush needed, every line is flushed when written
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] Debug:   first"));
        assert!(lines[1].ends_with("] second"));
    }

    #[test]
    fn test_truncates_existing_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("old.log");
        std::fs::write(&path, "old content\n").unwrap();

        let sink = FileSink::new(Severity::None, &path);
        sink.write(&mut DeferredNow::new(), Severity::Info, "new")
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
        assert!(content.contains("Info:    new"));
    }

    #[test]
    fn test_shutdown_closes_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("closed.log");
        let sink = FileSink::new(Severity::None, &path);
        sink.write(&mut DeferredNow::new(), Severity::Info, "before")
            .unwrap();
        sink.shutdown();
        assert!(!sink.is_open());
        sink.write(&mut DeferredNow::new(), Severity::Info, "after")
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("before"));
        assert!(!content.contains("after"));
    }

    #[test]
    fn test_unwritable_path_degrades_silently() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("no_such_dir").join("x.log");
        let sink = FileSink::new(Severity::None, &path);
        assert!(!sink.is_open());
        sink.write(&mut DeferredNow::new(), Severity::Error, "lost")
            .unwrap();
        assert!(!path.exists());

        assert!(FileSink::try_new(Severity::None, &path).is_err());
    }
}
