//! Reporting sinks for verdicts.

use std::io::Write;

/// Receives the human-readable lines of a verdict, one call per line.
pub trait Reporter {
    /// Reports a single line.
    fn report(&mut self, line: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: &str) {
        (**self).report(line)
    }
}

/// Collects reported lines in memory.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    lines: Vec<String>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines reported so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the collector, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

/// Writes each line to an `io::Write`, such as stdout.
///
/// Write failures do not interrupt analysis; the first one is kept and can
/// be inspected with [`take_error`](Self::take_error).
#[derive(Debug)]
pub struct WriterReporter<W: Write> {
    writer: W,
    error: Option<std::io::Error>,
}

impl<W: Write> WriterReporter<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Returns the first write error, if any, and clears it.
    pub fn take_error(&mut self) -> Option<std::io::Error> {
        self.error.take()
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Reporter for WriterReporter<W> {
    fn report(&mut self, line: &str) {
        if let Err(e) = writeln!(self.writer, "{}", line) {
            self.error.get_or_insert(e);
        }
    }
}

/// Forwards lines to the `log` facade at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, line: &str) {
        log::info!("{}", line);
    }
}
