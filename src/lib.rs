//! # Logorithm
//!
//! A small structured logger that wraps a line-oriented sink and prefixes
//! every message with a syslog-style structured-data header:
//!
//! ```text
//! INFO[origin software="death-ray" swVersion="1.0.0" x-program="energy-pump" x-sequence="1" x-pid="1234" x-severity="INFO" x-timestamp="2021-01-02T15:04:05.999999999-07:00"] pump started
//! ```
//!
//! ## Features
//!
//! - **Syslog severities**: Emerg, Alert, Critical, Error, Warning, Notice, Info, Debug
//! - **Sequence numbers**: unique and gap-free per logger, even across threads
//! - **Ordered output**: lines reach the sink in sequence order, never interleaved
//! - **Custom headers**: alternate templates substituted once at construction

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{MemorySink, WriterSink};
    pub use crate::core::{
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result, Severity, Sink,
        StructuredLogger, TimestampZone,
    };
}

#[cfg(feature = "console")]
pub use sinks::{ConsoleSink, ConsoleStream};
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{MemorySink, WriterSink};
pub use self::core::{
    interpolate, HeaderTemplate, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Result,
    Severity, Sink, StructuredLogger, TimestampZone, DEFAULT_TEMPLATE,
};
