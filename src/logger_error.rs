use std::path::PathBuf;
use thiserror::Error;

/// Describes errors in the setup and use of `sinklog`.
///
/// Note that writing a log line never produces one of these:
/// sinks absorb their write failures.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LoggerError {
    /// A log file could not be opened.
    #[error("log file {} cannot be opened", path.display())]
    OpenFile {
        /// The path that was tried.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The process-wide dispatcher is used before [`Dispatcher::start`](crate::Dispatcher::start)
    /// was called.
    #[error("the process-wide dispatcher is not initialized")]
    NotInitialized,

    /// [`Dispatcher::start`](crate::Dispatcher::start) was called a second time.
    #[error("the process-wide dispatcher is already initialized")]
    AlreadyInitialized,

    /// Registering with the `log` facade failed,
    /// most likely because some other logger was registered before.
    #[error("registration with the log facade failed")]
    Log(#[from] log::SetLoggerError),

    /// A severity could not be parsed.
    #[error("invalid severity: {0}")]
    Parse(String),

    /// Some mutex inside a sink is poisoned.
    #[error("some mutex is poisoned")]
    Poison,
}
