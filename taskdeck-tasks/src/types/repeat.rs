//! Recurrence rules for repeating tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a repeating task recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatKind {
    Daily,
    Weekly,
    Monthly,
    /// Every `interval` days
    Custom,
}

/// Recurrence rule attached to a task.
///
/// A task with no rule simply does not repeat; there is no "none" kind
/// (legacy snapshots that stored one are normalized to an absent rule
/// during load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatRule {
    pub kind: RepeatKind,
    /// Repeat every N units of the kind (weeks for weekly, days for custom).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    /// For weekly rules: days the task repeats on, 0 = Sunday .. 6 = Saturday.
    /// Empty means every matching day.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<u8>,
    /// The rule stops producing occurrences after this instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl RepeatRule {
    /// Create a rule of the given kind with defaults for the rest
    pub fn new(kind: RepeatKind) -> Self {
        Self {
            kind,
            interval: None,
            days_of_week: Vec::new(),
            end_date: None,
        }
    }

    /// Set the repeat interval
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Set the weekday mask (0 = Sunday .. 6 = Saturday)
    pub fn with_days_of_week(mut self, days: Vec<u8>) -> Self {
        self.days_of_week = days;
        self
    }

    /// Set the end of the recurrence
    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }
}
