//! Loggable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// Content appended to a property file
    PropertyAppended,
    /// Append rejected (absent content or wrong type)
    PropertyRejected,
    /// Checksum derived
    ChecksumComputed,
    /// Checksum algorithm failed
    ChecksumFailed,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::PropertyAppended => "PROPERTY_APPENDED",
            Event::PropertyRejected => "PROPERTY_REJECTED",
            Event::ChecksumComputed => "CHECKSUM_COMPUTED",
            Event::ChecksumFailed => "CHECKSUM_FAILED",
        }
    }

    /// Severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::PropertyAppended => Severity::Trace,
            Event::ConfigLoaded | Event::ChecksumComputed => Severity::Info,
            Event::PropertyRejected | Event::ChecksumFailed => Severity::Error,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::ChecksumComputed.as_str(), "CHECKSUM_COMPUTED");
        assert_eq!(Event::PropertyRejected.to_string(), "PROPERTY_REJECTED");
    }

    #[test]
    fn test_failures_are_errors() {
        assert_eq!(Event::PropertyRejected.severity(), Severity::Error);
        assert_eq!(Event::ChecksumFailed.severity(), Severity::Error);
        assert!(Event::PropertyAppended.severity() < Event::ChecksumComputed.severity());
    }
}
