//! Logger configuration
//!
//! Identity and behaviour settings that can be built in code or loaded from
//! JSON:
//!
//! ```
//! use logorithm::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(
//!     r#"{"software": "death-ray", "version": "1.0.0", "program": "energy-pump", "pid": 1234}"#,
//! )
//! .unwrap();
//! assert!(!config.verbose);
//! ```

use super::error::{LoggerError, Result};
use super::timestamp::TimestampZone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// `origin software` attribute
    pub software: String,
    /// `swVersion` attribute
    pub version: String,
    /// `x-program` attribute
    pub program: String,
    /// `x-pid` attribute, defaults to the current process id
    #[serde(default = "current_pid")]
    pub pid: u32,
    /// Emit Debug lines
    #[serde(default)]
    pub verbose: bool,
    /// Alternate header template; empty or absent means the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(default)]
    pub timezone: TimestampZone,
}

fn current_pid() -> u32 {
    std::process::id()
}

impl LoggerConfig {
    pub fn new(
        software: impl Into<String>,
        version: impl Into<String>,
        program: impl Into<String>,
    ) -> Self {
        Self {
            software: software.into(),
            version: version.into(),
            program: program.into(),
            pid: current_pid(),
            verbose: false,
            template: None,
            timezone: TimestampZone::default(),
        }
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty identity fields
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("software", &self.software),
            ("version", &self.version),
            ("program", &self.program),
        ] {
            if value.trim().is_empty() {
                return Err(LoggerError::config(
                    "LoggerConfig",
                    format!("{} must not be empty", field),
                ));
            }
        }
        Ok(())
    }

    /// Template text to compile, empty meaning the default
    pub fn template_str(&self) -> &str {
        self.template.as_deref().unwrap_or("")
    }
}
