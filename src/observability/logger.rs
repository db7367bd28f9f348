//! Structured JSON logger
//!
//! - One log line = one event
//! - `event` first, then `severity`, then fields sorted by key
//! - Synchronous, written to stderr so stdout stays free for command output

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail
    Trace = 0,
    /// Normal operations
    Info = 1,
    /// Recoverable issues
    Warn = 2,
    /// Operation failures
    Error = 3,
    /// Unrecoverable, process exits
    Fatal = 4,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "INFO" => Ok(Severity::Info),
            "WARN" => Ok(Severity::Warn),
            "ERROR" => Ok(Severity::Error),
            "FATAL" => Ok(Severity::Fatal),
            other => Err(format!("Unknown severity: '{}'", other)),
        }
    }
}

/// A structured logger that outputs JSON lines.
///
/// Events below `min_severity` are dropped, as is everything when disabled.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    enabled: bool,
    min_severity: Severity,
}

impl Default for Logger {
    fn default() -> Self {
        Self {
            enabled: true,
            min_severity: Severity::Info,
        }
    }
}

impl Logger {
    /// Create a logger with the given gate
    pub fn new(enabled: bool, min_severity: Severity) -> Self {
        Self {
            enabled,
            min_severity,
        }
    }

    /// A logger that drops everything
    pub fn disabled() -> Self {
        Self::new(false, Severity::Fatal)
    }

    /// Whether an event at `severity` would be written
    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        self.enabled && severity >= self.min_severity
    }

    /// Log an event with the given severity and fields
    pub fn log(&self, severity: Severity, event: &str, fields: &[(&str, &str)]) {
        self.log_to_writer(severity, event, fields, &mut io::stderr());
    }

    /// Log implementation that writes to a given writer
    pub fn log_to_writer<W: Write>(
        &self,
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        if !self.is_enabled_for(severity) {
            return;
        }

        let line = format_line(severity, event, fields);

        // Logging never fails the caller
        let _ = writer.write_all(line.as_bytes());
        let _ = writer.flush();
    }
}

/// Render one JSON log line, newline terminated
fn format_line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(128);

    output.push_str("{\"event\":\"");
    escape_json_string(&mut output, event);
    output.push_str("\",\"severity\":\"");
    output.push_str(severity.as_str());
    output.push('"');

    let mut sorted_fields: Vec<_> = fields.iter().collect();
    sorted_fields.sort_by_key(|(k, _)| *k);

    for (key, value) in sorted_fields {
        output.push_str(",\"");
        escape_json_string(&mut output, key);
        output.push_str("\":\"");
        escape_json_string(&mut output, value);
        output.push('"');
    }

    output.push_str("}\n");
    output
}

fn escape_json_string(output: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => output.push_str("\\\""),
            '\\' => output.push_str("\\\\"),
            '\n' => output.push_str("\\n"),
            '\r' => output.push_str("\\r"),
            '\t' => output.push_str("\\t"),
            c if c.is_control() => {
                output.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => output.push(c),
        }
    }
}
