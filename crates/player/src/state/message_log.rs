//! Chat and game log feed.

use std::collections::VecDeque;

use chrono::{DateTime, Local};

/// Maximum number of log lines kept (oldest are evicted)
pub const MAX_LOG_LINES: usize = 500;

/// One line of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub at: DateTime<Local>,
    pub text: String,
}

/// Append-only feed with bounded memory.
#[derive(Debug, Clone)]
pub struct MessageLog {
    lines: VecDeque<LogLine>,
    capacity: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_LINES)
    }
}

impl MessageLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine {
            at: Local::now(),
            text: text.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    /// The most recent `n` lines, oldest first.
    pub fn tail(&self, n: usize) -> impl Iterator<Item = &LogLine> {
        self.lines.iter().skip(self.lines.len().saturating_sub(n))
    }

    pub fn last_text(&self) -> Option<&str> {
        self.lines.back().map(|line| line.text.as_str())
    }
}
