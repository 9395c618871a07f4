//! Sink over any `std::io::Write`

use crate::core::{LoggerError, Result, Sink};
use std::io::Write;

/// Adapts any writer (a socket, a pipe, a `Vec<u8>`) into a [`Sink`].
///
/// Each line is handed to the writer with a single `write_all`; wrap the
/// writer in a `BufWriter` yourself if buffering is wanted.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    name: String,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "writer")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn append(&mut self, line: &str) -> Result<()> {
        self.writer
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log line", &self.name, e))
    }

    fn flush(&mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing", &self.name, e))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_lines_verbatim() {
        let mut sink = WriterSink::new(Vec::new());
        sink.append("first\n").unwrap();
        sink.append("second\n").unwrap();
        assert_eq!(sink.get_ref().as_slice(), b"first\nsecond\n");
        assert_eq!(sink.into_inner(), b"first\nsecond\n".to_vec());
    }

    #[test]
    fn test_write_error_names_sink() {
        let mut sink = WriterSink::with_name(FullDisk, "disk");
        let err = sink.append("line\n").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { ref sink, .. } if sink == "disk"));
        assert!(err.to_string().contains("no space left on device"));
    }
}
