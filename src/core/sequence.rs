//! Per-logger sequence numbers

use parking_lot::Mutex;

/// Monotonic counter handing out 1, 2, 3, ... under a lock.
///
/// The only mutation is [`SequenceCounter::next`]; there is no way to reset
/// or set the value from outside.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    value: Mutex<u64>,
}

impl SequenceCounter {
    pub const fn new() -> Self {
        Self {
            value: Mutex::new(0),
        }
    }

    /// Increment and return the new value
    #[inline]
    pub fn next(&self) -> u64 {
        let mut value = self.value.lock();
        *value += 1;
        *value
    }

    /// Number of values handed out so far
    #[inline]
    pub fn current(&self) -> u64 {
        *self.value.lock()
    }
}
