use chrono::{
    format::{DelayedFormat, StrftimeItems},
    DateTime, Local,
};

/// Deferred timestamp creation.
///
/// Is used to ensure that a message that is sent to multiple sinks
/// (in maybe different formats) always uses the same timestamp,
/// and that the timestamp is taken when the message is written,
/// not when it was started.
#[derive(Debug, Default)]
pub struct DeferredNow(Option<DateTime<Local>>);

impl DeferredNow {
    /// Constructs a new instance, but does not generate the timestamp.
    #[must_use]
    pub fn new() -> Self {
        Self(None)
    }

    /// Retrieve the timestamp.
    ///
    /// Requires mutability because the first caller will generate the timestamp.
    pub fn now(&mut self) -> &DateTime<Local> {
        self.0.get_or_insert_with(Local::now)
    }

    /// Produces a preformatted object suitable for printing.
    ///
    /// See [`chrono::format::strftime`] for the supported specifiers.
    pub fn format<'f>(&mut self, fmt: &'f str) -> DelayedFormat<StrftimeItems<'f>> {
        self.now().format(fmt)
    }
}
