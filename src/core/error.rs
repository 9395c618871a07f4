//! Error types for the structured logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error raised by a sink while writing or flushing
    #[error("IO error while {operation} to sink '{sink}': {source}")]
    IoOperation {
        operation: String,
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// File sink error with path
    #[error("File sink error for '{path}': {message}")]
    FileSinkError { path: String, message: String },

    /// Sink error (generic)
    #[error("Sink error: {0}")]
    SinkError(String),
}

impl LoggerError {
    /// Create an IO operation error naming the sink that failed
    pub fn io_operation(
        operation: impl Into<String>,
        sink: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            sink: sink.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a file sink error
    pub fn file_sink(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileSinkError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::SinkError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerConfig", "software must not be empty");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerError::file_sink("/var/log/app.log", "Permission denied");
        assert!(matches!(err, LoggerError::FileSinkError { .. }));

        let err = LoggerError::sink("closed");
        assert!(matches!(err, LoggerError::SinkError(_)));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::config("LoggerConfig", "program must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for LoggerConfig: program must not be empty"
        );

        let err = LoggerError::file_sink("/var/log/app.log", "Disk full");
        assert_eq!(err.to_string(), "File sink error for '/var/log/app.log': Disk full");

        let err = LoggerError::sink("memory sink rejected line");
        assert_eq!(err.to_string(), "Sink error: memory sink rejected line");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing log line", "console", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        let text = err.to_string();
        assert!(text.contains("writing log line"));
        assert!(text.contains("'console'"));
        assert!(text.contains("pipe closed"));
    }
}
