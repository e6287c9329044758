//! Error codes of `sinklog`.
//!
//! Logging never fails visibly: sinks and the dispatcher absorb their problems.
//! What cannot be absorbed silently is printed once to stderr, in the form
//!
//! ```text
//! [sinklog][ERRCODE::<Code>] <description>, caused by <error>
//! ```
//!
//! The following codes are used.
//!
//! ## `FileOpen`
//!
//! A [`FileSink`](crate::sinks::FileSink) could not open its file, e.g. because the
//! directory does not exist or is not writable.
//!
//! ```text
//! [sinklog][ERRCODE::FileOpen] failed to open file log/out.log, caused by No such file or directory (os error 2)
//! ```
//!
//! This is reported once, when the sink is created. The sink then stays usable,
//! but drops all messages silently.
//! Use [`FileSink::try_new`](crate::sinks::FileSink::try_new) to get the error instead,
//! or [`FileSinkBuilder::create_dirs`](crate::sinks::FileSinkBuilder::create_dirs)
//! to let the sink create the missing directory.
//!
//! ## `Flush`
//!
//! Explicit flushing, or flushing during shutdown, failed.
//!
//! ## `Format`
//!
//! The chosen format function had produced an error.
//! If this happens with one of the provided format functions, please open an issue.
//!
//! ## `Poison`
//!
//! Messages can be written from all threads. Sinks with mutable state keep it in a `Mutex`.
//! If a thread panics while holding the lock, the lock is considered "poisoned",
//! and the sink cannot be used anymore.
//!
//! Most likely the root cause for this is a panic in a `Display` implementation
//! of a logged value.
//!
//! ## `NotInitialized`
//!
//! One of the level macros, like [`log_info!`](crate::log_info), was used without target
//! before [`Dispatcher::start`](crate::Dispatcher::start) was called.
//! The message is dropped.
//! Start the dispatcher early in `main`, before the first log statement.
