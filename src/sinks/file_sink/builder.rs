use super::FileSink;
use crate::{
    formats::file_format,
    util::{eprint_err, ErrorCode},
    FormatFunction, LoggerError, Severity,
};
use std::{
    fs::{File, OpenOptions},
    path::PathBuf,
};

/// Builder for [`FileSink`].
///
/// Methods for influencing the behavior of the `FileSink`.
#[derive(Debug)]
pub struct FileSinkBuilder {
    min_level: Severity,
    path: PathBuf,
    append: bool,
    create_dirs: bool,
    format: FormatFunction,
}

impl FileSinkBuilder {
    pub(super) fn new<P: Into<PathBuf>>(min_level: Severity, path: P) -> Self {
        Self {
            min_level,
            path: path.into(),
            append: false,
            create_dirs: false,
            format: file_format,
        }
    }

    /// Makes the sink append to the file, if it exists; by default, the file is truncated.
    #[must_use]
    pub fn append(mut self) -> Self {
        self.append = true;
        self
    }

    /// Makes the sink create missing parent directories of the file.
    ///
    /// By default, a missing directory lets opening the file fail.
    #[must_use]
    pub fn create_dirs(mut self) -> Self {
        self.create_dirs = true;
        self
    }

    /// Makes the sink use the given format function
    /// instead of [`file_format`](crate::file_format).
    #[must_use]
    pub fn format(mut self, format: FormatFunction) -> Self {
        self.format = format;
        self
    }

    /// Produces the `FileSink`, and reports a failure to open the file
    /// on stderr.
    ///
    /// A sink whose file could not be opened drops all writes silently.
    #[must_use]
    pub fn build(self) -> FileSink {
        match self.open() {
            Ok(file) => FileSink::from_parts(self.min_level, self.format, self.path, Some(file)),
            Err(e) => {
                eprint_err(
                    ErrorCode::FileOpen,
                    &format!("failed to open file {}", self.path.display()),
                    &e,
                );
                FileSink::from_parts(self.min_level, self.format, self.path, None)
            }
        }
    }

    /// Produces the `FileSink`.
    ///
    /// # Errors
    ///
    /// [`LoggerError::OpenFile`] if the file cannot be opened.
    pub fn try_build(self) -> Result<FileSink, LoggerError> {
        match self.open() {
            Ok(file) => Ok(FileSink::from_parts(
                self.min_level,
                self.format,
                self.path,
                Some(file),
            )),
            Err(source) => Err(LoggerError::OpenFile {
                path: self.path,
                source,
            }),
        }
    }

    fn open(&self) -> Result<File, std::io::Error> {
        if self.create_dirs {
            if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        options.open(&self.path)
    }
}
