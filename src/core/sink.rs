//! Sink trait for formatted log lines

use super::error::Result;

/// Destination for fully formatted log lines.
///
/// The logger serializes access to its sink, so implementations only need
/// to be `Send`. Writes should go straight through: the logger expects each
/// accepted line to be visible to the underlying target once `append`
/// returns.
pub trait Sink: Send {
    /// Write one newline-terminated line
    fn append(&mut self, line: &str) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn append(&mut self, line: &str) -> Result<()> {
        (**self).append(line)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
