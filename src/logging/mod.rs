//! Severity-leveled file logging
//!
//! Provides the syslog-style [`Severity`] scale, the line format, and the
//! [`Logger`] that appends filtered lines to a file.

mod file_logger;
mod format;
mod severity;

pub use file_logger::Logger;
pub use format::{format_line, line_header, validate_date_format, DEFAULT_DATE_FORMAT, LINE_ENDING};
pub use severity::{label_for_rank, ParseSeverityError, Severity, FALLBACK_LABEL};
