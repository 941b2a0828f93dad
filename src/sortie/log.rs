//! Mission log
//!
//! An ordered, append-only narrative of one resolution. Phases push entries;
//! nothing removes or rewrites them.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Pipeline phase that produced a log entry
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Orders,
    Readiness,
    Contact,
    Scoring,
    Outcome,
    Consequences,
    Finalization,
    Progression,
    Discovery,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub phase: Phase,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionLog {
    entries: Vec<LogEntry>,
}

impl MissionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, phase: Phase, text: impl Into<String>) {
        self.entries.push(LogEntry {
            phase,
            text: text.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.text.as_str())
    }

    pub fn last_line(&self) -> Option<&str> {
        self.entries.last().map(|e| e.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|l| l.contains(needle))
    }
}
