use crate::{DeferredNow, FormatFunction, Severity};
use std::{cell::RefCell, io::Write};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    FileOpen,
    Flush,
    Format,
    Poison,
    NotInitialized,
}
impl ErrorCode {
    fn as_index(self) -> &'static str {
        match self {
            Self::FileOpen => "fileopen",
            Self::Flush => "flush",
            Self::Format => "format",
            Self::Poison => "poison",
            Self::NotInitialized => "notinitialized",
        }
    }
}

// The logger cannot report its own problems through itself, so they go to stderr.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    let s = format!(
        "[sinklog][ERRCODE::{code:?}] {msg}, caused by {err}\n    \
         See https://docs.rs/sinklog/latest/sinklog/error_info/index.html#{code_lc}",
        code = error_code,
        code_lc = error_code.as_index(),
    );
    try_to_write(&s);
}

pub(crate) fn eprint_msg(error_code: ErrorCode, msg: &str) {
    let s = format!(
        "[sinklog][ERRCODE::{code:?}] {msg}\n    \
         See https://docs.rs/sinklog/latest/sinklog/error_info/index.html#{code_lc}",
        code = error_code,
        code_lc = error_code.as_index(),
    );
    try_to_write(&s);
}

// eprintln! panics if stderr is gone
fn try_to_write(s: &str) {
    let mut w = std::io::stderr().lock();
    writeln!(w, "{s}").ok();
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Formats the line into the thread-local buffer, appends the line break,
// and writes the result with a single call into the given writer.
pub(crate) fn write_buffered(
    format_function: FormatFunction,
    now: &mut DeferredNow,
    level: Severity,
    text: &str,
    w: &mut dyn Write,
) -> Result<(), std::io::Error> {
    let mut result: Result<(), std::io::Error> = Ok(());

    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            result = format_and_write(format_function, now, level, text, &mut buffer, w);
            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging
            // (e.g. log calls in Display implementations of values that are written by a sink)
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            result = format_and_write(format_function, now, level, text, &mut tmp_buf, w);
        }
    });
    result
}

fn format_and_write(
    format_function: FormatFunction,
    now: &mut DeferredNow,
    level: Severity,
    text: &str,
    buffer: &mut Vec<u8>,
    w: &mut dyn Write,
) -> Result<(), std::io::Error> {
    (format_function)(&mut *buffer, now, level, text)
        .unwrap_or_else(|e| eprint_err(ErrorCode::Format, "formatting failed", &e));
    buffer.push(b'\n');
    w.write_all(buffer)
}

#[cfg(test)]
mod test {
    use crate::{console_format, DeferredNow, Severity};

    #[test]
    fn test_write_buffered_adds_line_break() {
        let mut out = Vec::<u8>::new();
        super::write_buffered(
            console_format,
            &mut DeferredNow::new(),
            Severity::Info,
            "first",
            &mut out,
        )
        .unwrap();
        super::write_buffered(
            console_format,
            &mut DeferredNow::new(),
            Severity::Fatal,
            "second",
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[INFO]: first\nsecond\n");
    }
}
