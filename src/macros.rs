//! Logging macros using Rust formatting syntax.
//!
//! The severity methods on [`StructuredLogger`](crate::StructuredLogger)
//! take `%`-style format strings. These macros are the `format!`-style
//! alternative; both end up in the same emission path. Each macro evaluates
//! to the emission `Result`.
//!
//! # Examples
//!
//! ```
//! use logorithm::prelude::*;
//! use logorithm::info;
//!
//! let sink = MemorySink::new();
//! let logger = StructuredLogger::new(sink.clone(), false, "death-ray", "1.0.0", "energy-pump", 1234);
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port).unwrap();
//!
//! assert!(sink.contents().ends_with("] listening on port 8080\n"));
//! ```

/// Log a message at an explicit severity.
///
/// ```
/// # use logorithm::prelude::*;
/// # let logger = StructuredLogger::new(MemorySink::new(), false, "s", "1", "p", 1);
/// use logorithm::log;
/// log!(logger, Severity::Notice, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_args($severity, format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emerg, $($arg)+)
    };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug message; a no-op unless the logger is verbose.
///
/// ```
/// # use logorithm::prelude::*;
/// let sink = MemorySink::new();
/// let logger = StructuredLogger::new(sink.clone(), false, "s", "1", "p", 1);
/// use logorithm::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// assert!(sink.is_empty());
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Severity, StructuredLogger};
    use crate::sinks::MemorySink;

    fn logger(verbose: bool) -> (StructuredLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger = StructuredLogger::new(sink.clone(), verbose, "svc", "1.0", "macro-test", 1);
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger(false);
        log!(logger, Severity::Info, "Test message").unwrap();
        log!(logger, Severity::Info, "Formatted: {}", 42).unwrap();

        let lines = sink.lines();
        assert!(lines[0].ends_with("] Test message"));
        assert!(lines[1].ends_with("] Formatted: 42"));
    }

    #[test]
    fn test_severity_macros() {
        let (logger, sink) = logger(true);
        emerg!(logger, "e {}", 0).unwrap();
        alert!(logger, "a {}", 1).unwrap();
        critical!(logger, "c {}", 2).unwrap();
        error!(logger, "e {}", 3).unwrap();
        warning!(logger, "w {}", 4).unwrap();
        notice!(logger, "n {}", 5).unwrap();
        info!(logger, "i {}", 6).unwrap();
        debug!(logger, "d {}", 7).unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 8);
        for (line, severity) in lines.iter().zip(Severity::ALL) {
            assert!(line.starts_with(severity.token()));
            assert!(line.ends_with(&format!(" {}", severity.code())));
        }
    }

    #[test]
    fn test_debug_macro_respects_verbose() {
        let (logger, sink) = logger(false);
        debug!(logger, "Count: {}", 5).unwrap();
        assert!(sink.is_empty());
        assert_eq!(logger.sequence_number(), 0);
    }

    #[test]
    fn test_percent_is_not_interpolated() {
        let (logger, sink) = logger(false);
        info!(logger, "{}% done", 50).unwrap();
        assert!(sink.contents().ends_with("] 50% done\n"));
    }
}
