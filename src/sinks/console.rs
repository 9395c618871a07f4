//! Console sink implementation

use crate::core::{LoggerError, Result, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

/// Writes lines to standard output or standard error.
///
/// The stream lock is taken for each line, so lines never mix with other
/// writers on the same stream mid-line.
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    pub fn new(stream: ConsoleStream) -> Self {
        Self { stream }
    }

    pub fn stdout() -> Self {
        Self::new(ConsoleStream::Stdout)
    }

    pub fn stderr() -> Self {
        Self::new(ConsoleStream::Stderr)
    }

    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            ConsoleStream::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, line: &str) -> Result<()> {
        self.write_line(line)
            .map_err(|e| LoggerError::io_operation("writing log line", self.name(), e))
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().flush()?,
            ConsoleStream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdout() {
        assert_eq!(ConsoleSink::default().stream(), ConsoleStream::Stdout);
        assert_eq!(ConsoleSink::stderr().stream(), ConsoleStream::Stderr);
    }

    #[test]
    fn test_append_and_flush() {
        let mut sink = ConsoleSink::stderr();
        sink.append("console sink test line\n").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.name(), "console");
    }
}
