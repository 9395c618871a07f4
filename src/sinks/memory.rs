//! In-memory sink

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines in a shared buffer.
///
/// Clones share the same buffer: hand one clone to the logger and keep
/// another to read what was written.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, newlines included
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Written lines without their terminators
    pub fn lines(&self) -> Vec<String> {
        self.buffer.lock().lines().map(String::from).collect()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }
}

impl Sink for MemorySink {
    fn append(&mut self, line: &str) -> Result<()> {
        self.buffer.lock().push_str(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_buffer() {
        let reader = MemorySink::new();
        let mut writer = reader.clone();

        writer.append("a\n").unwrap();
        writer.append("b\n").unwrap();

        assert_eq!(reader.contents(), "a\nb\n");
        assert_eq!(reader.lines(), vec!["a", "b"]);

        reader.clear();
        assert!(writer.is_empty());
    }
}
