//! Core logger types and traits

pub mod config;
pub mod error;
pub mod interpolate;
pub mod logger;
pub mod metrics;
pub mod sequence;
pub mod severity;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use interpolate::{escape, interpolate, Pattern};
pub use logger::{LoggerBuilder, StructuredLogger};
pub use metrics::LoggerMetrics;
pub use sequence::SequenceCounter;
pub use severity::Severity;
pub use sink::Sink;
pub use template::{HeaderTemplate, DEFAULT_TEMPLATE};
pub use timestamp::{format_rfc3339_nanos, TimestampZone};
