//! Observability
//!
//! Structured JSON logging of typed events.
//!
//! # Usage
//!
//! ```ignore
//! use propfile::observability::{Event, Logger};
//!
//! let logger = Logger::default();
//! logger.event(Event::ChecksumComputed, &[("crc32", "crc32:0000abcd")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

impl Logger {
    /// Log a typed event at its own severity
    pub fn event(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(event.severity(), event.as_str(), fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // This just verifies no panic
        Logger::default().event(Event::ChecksumComputed, &[("crc32", "crc32:00000000")]);
        Logger::disabled().event(Event::ChecksumFailed, &[]);
    }
}
