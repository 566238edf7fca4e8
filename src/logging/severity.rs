//! Syslog severity levels
//!
//! Ranks follow BSD syslog (RFC 3164, section 4.1.1): lower is more urgent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Label used for ranks outside the known severities
pub const FALLBACK_LABEL: &str = "LOG";

/// Severity of a log message, or the threshold of a logger
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// System is unusable
    Emerg = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Crit = 2,
    /// Error conditions
    Err = 3,
    /// Warning conditions
    Warn = 4,
    /// Normal but significant condition
    Notice = 5,
    /// Informational messages
    Info = 6,
    /// Debug messages
    Debug = 7,
    /// Threshold that disables logging entirely
    Off = 8,
}

impl Severity {
    /// All severities from most to least urgent, `Off` last
    pub const ALL: [Severity; 9] = [
        Severity::Emerg,
        Severity::Alert,
        Severity::Crit,
        Severity::Err,
        Severity::Warn,
        Severity::Notice,
        Severity::Info,
        Severity::Debug,
        Severity::Off,
    ];

    /// Numeric rank (0-8)
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a severity by rank
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Severity::Emerg),
            1 => Some(Severity::Alert),
            2 => Some(Severity::Crit),
            3 => Some(Severity::Err),
            4 => Some(Severity::Warn),
            5 => Some(Severity::Notice),
            6 => Some(Severity::Info),
            7 => Some(Severity::Debug),
            8 => Some(Severity::Off),
            _ => None,
        }
    }

    /// Label written into log lines
    pub const fn label(self) -> &'static str {
        label_for_rank(self.rank())
    }

    /// Short lowercase name, as accepted in configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Emerg => "emerg",
            Severity::Alert => "alert",
            Severity::Crit => "crit",
            Severity::Err => "err",
            Severity::Warn => "warn",
            Severity::Notice => "notice",
            Severity::Info => "info",
            Severity::Debug => "debug",
            Severity::Off => "off",
        }
    }

    /// Whether a message of `rank` passes this threshold
    pub const fn allows(self, rank: u8) -> bool {
        !matches!(self, Severity::Off) && rank <= self.rank()
    }
}

/// Label for a raw rank; unknown ranks (including `Off`) map to [`FALLBACK_LABEL`]
pub const fn label_for_rank(rank: u8) -> &'static str {
    match rank {
        0 => "EMERGENCY",
        1 => "ALERT",
        2 => "CRITICAL",
        3 => "ERROR",
        4 => "WARNING",
        5 => "NOTICE",
        6 => "INFORMATION",
        7 => "DEBUG",
        _ => FALLBACK_LABEL,
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity '{0}' (expected emerg, alert, crit, err, warn, notice, info, debug, off or 0-8)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, ParseSeverityError> {
        let name = s.trim().to_ascii_lowercase();
        let severity = match name.as_str() {
            "emerg" | "emergency" => Severity::Emerg,
            "alert" => Severity::Alert,
            "crit" | "critical" => Severity::Crit,
            "err" | "error" => Severity::Err,
            "warn" | "warning" => Severity::Warn,
            "notice" => Severity::Notice,
            "info" | "information" => Severity::Info,
            "debug" => Severity::Debug,
            "off" => Severity::Off,
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Severity::from_rank)
                .ok_or_else(|| ParseSeverityError(s.to_string()))?,
        };
        Ok(severity)
    }
}

/// A severity as written in configuration: a name or a bare rank
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSeverity {
    Name(String),
    Rank(i64),
}

impl TryFrom<RawSeverity> for Severity {
    type Error = ParseSeverityError;

    fn try_from(raw: RawSeverity) -> Result<Self, ParseSeverityError> {
        match raw {
            RawSeverity::Name(name) => name.parse(),
            RawSeverity::Rank(rank) => u8::try_from(rank)
                .ok()
                .and_then(Severity::from_rank)
                .ok_or_else(|| ParseSeverityError(rank.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawSeverity::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}
