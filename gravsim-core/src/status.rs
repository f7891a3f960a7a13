//! Status line shown to the user
//!
//! Keeps the latest message for the label and a short history for the log
//! panel. Every entry is stamped with local wall-clock time.

use crate::events::Event;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

const HISTORY_LEN: usize = 64;

/// One timestamped message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEntry {
    pub at: DateTime<Local>,
    pub text: String,
}

impl StatusEntry {
    /// `HH:MM:SS:mmm: text`
    pub fn formatted(&self) -> String {
        format_status(&self.at, &self.text)
    }
}

/// Format a message with a millisecond timestamp prefix
pub fn format_status(at: &DateTime<Local>, text: &str) -> String {
    format!("{}: {}", at.format("%H:%M:%S:%3f"), text)
}

#[derive(Debug, Default)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.push_at(Local::now(), text);
    }

    pub fn push_at(&mut self, at: DateTime<Local>, text: impl Into<String>) {
        if self.entries.len() == HISTORY_LEN {
            self.entries.pop_front();
        }
        self.entries.push_back(StatusEntry { at, text: text.into() });
    }

    pub fn record(&mut self, event: &Event) {
        self.push(event.to_string());
    }

    pub fn latest(&self) -> Option<&StatusEntry> {
        self.entries.back()
    }

    /// Oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_has_millisecond_suffix() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 13, 4, 5).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(format_status(&at, "hello"), "13:04:05:042: hello");
    }

    #[test]
    fn history_is_bounded() {
        let mut log = StatusLog::new();
        for i in 0..(HISTORY_LEN + 10) {
            log.push(format!("message {i}"));
        }
        assert_eq!(log.len(), HISTORY_LEN);
        assert_eq!(log.entries().next().unwrap().text, "message 10");
        assert_eq!(log.latest().unwrap().text, format!("message {}", HISTORY_LEN + 9));
    }
}
