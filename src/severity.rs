use crate::LoggerError;
use std::{fmt, str::FromStr};

/// The severity of a log message, and the threshold of a sink.
///
/// Lower values are more important, higher values are more verbose.
/// A message passes a sink if its severity is at least the sink's threshold,
/// see [`Severity::passes`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Nothing.
    None = 0,
    /// The program cannot continue.
    Fatal = 1,
    /// Something failed.
    Error = 2,
    /// Something looks wrong, but the program can handle it.
    Warning = 3,
    /// Coarse-grained progress information.
    Info = 4,
    /// Information that helps when debugging.
    Debug = 5,
    /// Everything.
    Verbose = 6,
}

impl Severity {
    /// All severities, in ascending numeric order.
    pub const ALL: [Severity; 7] = [
        Severity::None,
        Severity::Fatal,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
        Severity::Debug,
        Severity::Verbose,
    ];

    /// The numeric value (0 for `None` to 6 for `Verbose`).
    #[must_use]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether a message with this severity passes a sink with the given threshold.
    ///
    /// This is the only filter rule in the crate: `self >= threshold`.
    /// A sink with threshold `Debug` thus also receives `Verbose` messages,
    /// but no `Info` messages.
    #[must_use]
    pub fn passes(self, threshold: Severity) -> bool {
        self >= threshold
    }

    /// The upper-case name, e.g. `WARNING`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Verbose => "VERBOSE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl TryFrom<u8> for Severity {
    type Error = LoggerError;
    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| LoggerError::Parse(value.to_string()))
    }
}

impl FromStr for Severity {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, LoggerError> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        match s.to_ascii_lowercase().as_str() {
            "none" | "off" => Ok(Self::None),
            "fatal" => Ok(Self::Fatal),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "verbose" | "trace" => Ok(Self::Verbose),
            _ => Err(LoggerError::Parse(s.to_string())),
        }
    }
}

impl From<log::Level> for Severity {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warning,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Verbose,
        }
    }
}
