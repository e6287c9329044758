// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! A small, synchronous logger that fans leveled messages out to a list of sinks.
//!
//! A [`Dispatcher`] owns an ordered list of [`sinks`]: a [`ConsoleSink`](sinks::ConsoleSink),
//! one or more [`FileSink`](sinks::FileSink)s, a [`BufferSink`](sinks::BufferSink).
//! Each message is handed to every sink, and each sink decides with its own threshold
//! whether it renders the message, and how.
//!
//! ```rust
//! use sinklog::{log_info, log_warning, sinks::{ConsoleSink, FileSink}, Dispatcher, Severity};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let _logger = Dispatcher::new()
//!         .with_sink(ConsoleSink::new(Severity::Info))
//!         .with_sink(FileSink::new(Severity::Error, "out.log"))
//!         .start()?;
//!
//!     log_warning!("disk low");
//!     log_info!("{} files cleaned up", 17);
//!
//!     // compose a message piece by piece; it is dispatched at the end of the statement
//!     sinklog::message(Severity::Debug)?.append("cache size: ").append(1024);
//!     Ok(())
//! }
//! ```
//!
//! [`Severity`] is ordered from `None` (0) to `Verbose` (6); a message passes a sink if its
//! severity is at least the sink's threshold (see [`Severity::passes`]).
//!
//! Everything is synchronous: a log statement returns after every sink has written
//! (and, for file sinks, flushed) the line.
//! The sinks serialize their writes internally, so a dispatcher can be shared
//! between threads.
//!
//! Problems of the logger itself are printed to stderr, see [`error_info`].

mod deferred_now;
mod dispatcher;
mod formats;
mod logger_error;
mod logger_handle;
mod macros;
mod message_builder;
mod severity;
mod util;

pub mod error_info;
pub mod sinks;

pub use crate::deferred_now::DeferredNow;
pub use crate::dispatcher::Dispatcher;
pub use crate::formats::*;
pub use crate::logger_error::LoggerError;
#[doc(hidden)]
pub use crate::logger_handle::dispatch_global;
pub use crate::logger_handle::{dispatcher, message, LoggerHandle};
pub use crate::message_builder::MessageBuilder;
pub use crate::severity::Severity;
