//! Structured logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    interpolate::interpolate,
    metrics::LoggerMetrics,
    sequence::SequenceCounter,
    severity::Severity,
    sink::Sink,
    template::HeaderTemplate,
    timestamp::TimestampZone,
};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logger that prefixes each message with a syslog-style structured-data
/// header and writes it to a single sink.
///
/// Every emitted line gets the next sequence number of this instance. The
/// whole allocate-format-write step runs under the sink lock, so lines reach
/// the sink in sequence order and never interleave, even when the logger is
/// shared across threads behind an `Arc`.
///
/// # Example
///
/// ```
/// use logorithm::{MemorySink, StructuredLogger};
///
/// let sink = MemorySink::new();
/// let logger = StructuredLogger::new(sink.clone(), false, "death-ray", "1.0.0", "energy-pump", 1234);
///
/// logger.info("pump at %d%%", &[&80]).unwrap();
/// logger.debug("not shown", &[]).unwrap();
///
/// let lines = sink.lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].starts_with("INFO[origin software=\"death-ray\""));
/// assert!(lines[0].contains("x-sequence=\"1\""));
/// assert!(lines[0].ends_with("] pump at 80%"));
/// ```
pub struct StructuredLogger {
    sink: Mutex<Box<dyn Sink>>,
    sequence: SequenceCounter,
    verbose: AtomicBool,
    template: HeaderTemplate,
    timezone: TimestampZone,
    metrics: LoggerMetrics,
}

impl StructuredLogger {
    /// Create a logger using the default header template
    #[must_use]
    pub fn new<S: Sink + 'static>(
        sink: S,
        verbose: bool,
        software: &str,
        version: &str,
        program: &str,
        pid: u32,
    ) -> Self {
        Self::with_template(sink, verbose, software, version, program, pid, "")
    }

    /// Create a logger with an alternate header template.
    ///
    /// The template is substituted once with software, version, program and
    /// pid (`%s %s %s %d`); its remaining escaped verbs (`%%s %%d %%s %%s %%s`)
    /// receive severity, sequence, severity, timestamp and message on every
    /// call. An empty template selects
    /// [`DEFAULT_TEMPLATE`](super::template::DEFAULT_TEMPLATE).
    #[must_use]
    pub fn with_template<S: Sink + 'static>(
        sink: S,
        verbose: bool,
        software: &str,
        version: &str,
        program: &str,
        pid: u32,
        template: &str,
    ) -> Self {
        Self::from_boxed(Box::new(sink), verbose, software, version, program, pid, template)
    }

    fn from_boxed(
        sink: Box<dyn Sink>,
        verbose: bool,
        software: &str,
        version: &str,
        program: &str,
        pid: u32,
        template: &str,
    ) -> Self {
        Self {
            sink: Mutex::new(sink),
            sequence: SequenceCounter::new(),
            verbose: AtomicBool::new(verbose),
            template: HeaderTemplate::compile(template, software, version, program, pid),
            timezone: TimestampZone::default(),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Create a logger from a validated configuration
    pub fn from_config<S: Sink + 'static>(sink: S, config: &LoggerConfig) -> Result<Self> {
        Self::from_config_boxed(Box::new(sink), config)
    }

    fn from_config_boxed(sink: Box<dyn Sink>, config: &LoggerConfig) -> Result<Self> {
        config.validate()?;
        let mut logger = Self::from_boxed(
            sink,
            config.verbose,
            &config.software,
            &config.version,
            &config.program,
            config.pid,
            config.template_str(),
        );
        logger.timezone = config.timezone;
        Ok(logger)
    }

    /// Log `message` at `severity`, interpolating `args` into its `%` verbs.
    ///
    /// Debug messages are dropped without consuming a sequence number unless
    /// the logger is verbose. A sink failure is returned as-is; the sequence
    /// number it consumed is not given back.
    pub fn log(&self, severity: Severity, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        if self.is_suppressed(severity) {
            return Ok(());
        }
        self.emit(severity, &interpolate(message, args))
    }

    /// Log a message built with Rust formatting (`format_args!`)
    pub fn log_args(&self, severity: Severity, args: fmt::Arguments<'_>) -> Result<()> {
        if self.is_suppressed(severity) {
            return Ok(());
        }
        self.emit(severity, &args.to_string())
    }

    fn is_suppressed(&self, severity: Severity) -> bool {
        if severity == Severity::Debug && !self.is_verbose() {
            self.metrics.record_suppressed();
            return true;
        }
        false
    }

    fn emit(&self, severity: Severity, message: &str) -> Result<()> {
        let mut sink = self.sink.lock();

        let sequence = self.sequence.next();
        let timestamp = self.timezone.now();
        let mut line = self.template.render(severity, sequence, &timestamp, message);
        if !line.ends_with('\n') {
            line.push('\n');
        }

        match sink.append(&line) {
            Ok(()) => {
                self.metrics.record_written();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failure();
                Err(e)
            }
        }
    }

    #[inline]
    pub fn emerg(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Emerg, message, args)
    }

    #[inline]
    pub fn alert(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Alert, message, args)
    }

    #[inline]
    pub fn critical(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Critical, message, args)
    }

    #[inline]
    pub fn error(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Error, message, args)
    }

    #[inline]
    pub fn warning(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Warning, message, args)
    }

    #[inline]
    pub fn notice(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Notice, message, args)
    }

    #[inline]
    pub fn info(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Info, message, args)
    }

    /// Log at Debug; a no-op unless the logger is verbose
    #[inline]
    pub fn debug(&self, message: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.log(Severity::Debug, message, args)
    }

    pub fn set_verbose(&self, verbose: bool) {
        self.verbose.store(verbose, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Last sequence number handed out (0 before the first line)
    pub fn sequence_number(&self) -> u64 {
        self.sequence.current()
    }

    /// Compiled header template
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn timezone(&self) -> TimestampZone {
        self.timezone
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    /// Name of the sink lines are written to
    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// Create a builder for StructuredLogger
    ///
    /// # Example
    /// ```
    /// use logorithm::prelude::*;
    ///
    /// let logger = StructuredLogger::builder("death-ray", "1.0.0", "energy-pump")
    ///     .pid(1234)
    ///     .verbose(true)
    ///     .timezone(TimestampZone::Utc)
    ///     .sink(MemorySink::new())
    ///     .build()
    ///     .unwrap();
    /// assert!(logger.is_verbose());
    /// ```
    #[must_use]
    pub fn builder(
        software: impl Into<String>,
        version: impl Into<String>,
        program: impl Into<String>,
    ) -> LoggerBuilder {
        LoggerBuilder::new(software, version, program)
    }
}

impl fmt::Debug for StructuredLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuredLogger")
            .field("template", &self.template.as_str())
            .field("sequence", &self.sequence.current())
            .field("verbose", &self.is_verbose())
            .field("timezone", &self.timezone)
            .finish_non_exhaustive()
    }
}

/// Builder for [`StructuredLogger`]
///
/// Without an explicit sink, lines go to standard output.
pub struct LoggerBuilder {
    config: LoggerConfig,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new(
        software: impl Into<String>,
        version: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self::from_config(LoggerConfig::new(software, version, program))
    }

    /// Start from an existing configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self { config, sink: None }
    }

    /// Set the `x-pid` value (defaults to the current process id)
    #[must_use = "builder methods return a new value"]
    pub fn pid(mut self, pid: u32) -> Self {
        self.config.pid = pid;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    /// Use an alternate header template
    #[must_use = "builder methods return a new value"]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.template = Some(template.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timezone(mut self, timezone: TimestampZone) -> Self {
        self.config.timezone = timezone;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Validate the configuration and build the logger
    pub fn build(self) -> Result<StructuredLogger> {
        let sink = match self.sink {
            Some(sink) => sink,
            None => default_sink()?,
        };
        StructuredLogger::from_config_boxed(sink, &self.config)
    }
}

#[cfg(feature = "console")]
fn default_sink() -> Result<Box<dyn Sink>> {
    Ok(Box::new(crate::sinks::ConsoleSink::stdout()))
}

#[cfg(not(feature = "console"))]
fn default_sink() -> Result<Box<dyn Sink>> {
    Err(super::error::LoggerError::config(
        "LoggerBuilder",
        "no sink configured and the console sink is disabled",
    ))
}
