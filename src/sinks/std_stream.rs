use crate::Severity;
use std::io::{Error as IoError, Stderr, StderrLock, Stdout, StdoutLock, Write};

// Abstraction over stdout and stderr
pub(crate) enum StdStream {
    Out(Stdout),
    Err(Stderr),
}
impl<'a> StdStream {
    // errors go to stderr, everything else to stdout
    pub(crate) fn for_level(level: Severity) -> Self {
        if level == Severity::Error {
            StdStream::Err(std::io::stderr())
        } else {
            StdStream::Out(std::io::stdout())
        }
    }
    pub(crate) fn lock(&'a self) -> StdstreamLock<'a> {
        match self {
            StdStream::Out(ref s) => StdstreamLock::Out(s.lock()),
            StdStream::Err(ref s) => StdstreamLock::Err(s.lock()),
        }
    }
    pub(crate) fn is_err(&self) -> bool {
        matches!(self, StdStream::Err(_))
    }
}

pub(crate) enum StdstreamLock<'a> {
    Out(StdoutLock<'a>),
    Err(StderrLock<'a>),
}
impl Write for StdstreamLock<'_> {
    fn write(&mut self, buffer: &[u8]) -> std::result::Result<usize, IoError> {
        match self {
            StdstreamLock::Out(l) => l.write(buffer),
            StdstreamLock::Err(l) => l.write(buffer),
        }
    }
    fn flush(&mut self) -> std::result::Result<(), IoError> {
        match self {
            StdstreamLock::Out(l) => l.flush(),
            StdstreamLock::Err(l) => l.flush(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::StdStream;
    use crate::Severity;

    #[test]
    fn test_only_errors_go_to_stderr() {
        for level in Severity::ALL {
            assert_eq!(StdStream::for_level(level).is_err(), level == Severity::Error);
        }
    }
}
