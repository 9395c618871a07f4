//! Syslog severity levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Message importance, ordered per syslog convention.
///
/// The discriminant is the syslog numeric level, so `Emerg < Debug`:
/// a smaller value means a more severe message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "EMERG")]
    Emerg = 0,
    #[serde(rename = "ALERT")]
    Alert = 1,
    #[serde(rename = "CRIT")]
    Critical = 2,
    #[serde(rename = "ERR")]
    Error = 3,
    #[serde(rename = "WARN")]
    Warning = 4,
    #[serde(rename = "NOTICE")]
    Notice = 5,
    #[serde(rename = "INFO")]
    Info = 6,
    #[serde(rename = "DEBUG")]
    Debug = 7,
}

impl Severity {
    /// Every severity, most severe first
    pub const ALL: [Severity; 8] = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Critical,
        Severity::Error,
        Severity::Warning,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
    ];

    /// Token written into the header, both as leading token and `x-severity`
    pub const fn token(&self) -> &'static str {
        match self {
            Severity::Emerg => "EMERG",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRIT",
            Severity::Error => "ERR",
            Severity::Warning => "WARN",
            Severity::Notice => "NOTICE",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }

    /// Syslog numeric level (0-7)
    pub const fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EMERG" | "EMERGENCY" => Ok(Severity::Emerg),
            "ALERT" => Ok(Severity::Alert),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "NOTICE" => Ok(Severity::Notice),
            "INFO" => Ok(Severity::Info),
            "DEBUG" => Ok(Severity::Debug),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
