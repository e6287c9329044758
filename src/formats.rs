use crate::{DeferredNow, Severity};
#[cfg(feature = "colors")]
use nu_ansi_term::{Color, Style};

/// Function type for format functions.
///
/// A format function renders one message for one sink. The sink adds the line break.
///
/// You can use one of the provided format functions, or write your own,
/// and pass it to the constructor of a sink, e.g. with [`ConsoleSink::format`].
///
/// [`ConsoleSink::format`]: crate::sinks::ConsoleSink::format
pub type FormatFunction = fn(
    write: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    level: Severity,
    text: &str,
) -> Result<(), std::io::Error>;

/// Timestamp format used by [`file_format`].
pub const TS_DASHES_BLANK_COLONS: &str = "%Y-%m-%d %H:%M:%S";

/// The short bracketed tag the console shows for a severity, if any.
#[must_use]
pub fn console_tag(level: Severity) -> Option<&'static str> {
    match level {
        Severity::Error => Some("[ERROR]: "),
        Severity::Warning => Some("[WARNING]: "),
        Severity::Info => Some("[INFO]: "),
        Severity::Debug => Some("[DEBUG]: "),
        Severity::Verbose => Some("[VERBOSE]: "),
        Severity::None | Severity::Fatal => None,
    }
}

/// The fixed-width label a log file shows for a severity; empty if there is none.
#[must_use]
pub fn file_label(level: Severity) -> &'static str {
    match level {
        Severity::Debug => "Debug:   ",
        Severity::Info => "Info:    ",
        Severity::Warning => "Warning: ",
        Severity::Error => "Error:   ",
        Severity::None | Severity::Fatal | Severity::Verbose => "",
    }
}

/// A format function that writes the text only.
///
/// # Errors
///
/// See `std::write`
pub fn message_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    _level: Severity,
    text: &str,
) -> Result<(), std::io::Error> {
    w.write_all(text.as_bytes())
}

/// The default format of the [`ConsoleSink`](crate::sinks::ConsoleSink).
///
/// Produces log lines like
/// <br>
/// ```[WARNING]: disk low```
/// <br>
/// `FATAL` messages have no tag.
///
/// # Errors
///
/// See `std::write`
pub fn console_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    level: Severity,
    text: &str,
) -> Result<(), std::io::Error> {
    if let Some(tag) = console_tag(level) {
        w.write_all(tag.as_bytes())?;
    }
    w.write_all(text.as_bytes())
}

/// Like [`console_format`], with a colored tag.
///
/// # Errors
///
/// See `std::write`
#[cfg(feature = "colors")]
#[cfg_attr(docsrs, doc(cfg(feature = "colors")))]
pub fn colored_console_format(
    w: &mut dyn std::io::Write,
    _now: &mut DeferredNow,
    level: Severity,
    text: &str,
) -> Result<(), std::io::Error> {
    if let Some(tag) = console_tag(level) {
        write!(w, "{}", style(level).paint(tag))?;
    }
    w.write_all(text.as_bytes())
}

#[cfg(feature = "colors")]
fn style(level: Severity) -> Style {
    match level {
        Severity::Fatal | Severity::Error => Color::Red.bold(),
        Severity::Warning => Color::Yellow.bold(),
        Severity::Info => Style::new(),
        Severity::Debug => Color::Fixed(28).normal(),
        Severity::None | Severity::Verbose => Color::Fixed(7).normal(),
    }
}

/// The default format of the [`FileSink`](crate::sinks::FileSink).
///
/// Produces log lines like
/// <br>
/// ```[2024-01-13 15:25:01] Warning: disk low```
/// <br>
/// with the wall-clock local time. `FATAL` and `VERBOSE` messages have no label.
///
/// # Errors
///
/// See `std::write`
pub fn file_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    level: Severity,
    text: &str,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] {}{}",
        now.format(TS_DASHES_BLANK_COLONS),
        file_label(level),
        text
    )
}

#[cfg(test)]
mod test {
    use crate::{DeferredNow, FormatFunction, Severity};

    fn render(format: FormatFunction, level: Severity, text: &str) -> String {
        let mut buf = Vec::<u8>::new();
        format(&mut buf, &mut DeferredNow::new(), level, text).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_console_format() {
        use super::console_format;
        assert_eq!(render(console_format, Severity::Warning, "disk low"), "[WARNING]: disk low");
        assert_eq!(render(console_format, Severity::Info, "x"), "[INFO]: x");
        assert_eq!(render(console_format, Severity::Error, "x"), "[ERROR]: x");
        assert_eq!(render(console_format, Severity::Debug, "x"), "[DEBUG]: x");
        assert_eq!(render(console_format, Severity::Verbose, "x"), "[VERBOSE]: x");
        assert_eq!(render(console_format, Severity::Fatal, "x"), "x");
    }

    #[test]
    fn test_file_format() {
        use super::file_format;
        let line = render(file_format, Severity::Debug, "some text");
        // [YYYY-MM-DD HH:MM:SS] = 21 chars, then a blank
        assert_eq!(&line[0..1], "[");
        assert_eq!(&line[20..22], "] ");
        assert_eq!(&line[22..], "Debug:   some text");

        let line = render(file_format, Severity::Warning, "disk low");
        assert_eq!(&line[22..], "Warning: disk low");
        let line = render(file_format, Severity::Fatal, "boom");
        assert_eq!(&line[22..], "boom");
    }

    #[test]
    fn test_labels_have_fixed_width() {
        for level in [Severity::Debug, Severity::Info, Severity::Warning, Severity::Error] {
            assert_eq!(super::file_label(level).len(), 9);
        }
    }
}
