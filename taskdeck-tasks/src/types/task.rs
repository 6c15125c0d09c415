//! Task and subtask types

use super::ids::{SubtaskId, TagId, TaskId};
use super::repeat::RepeatRule;
use super::status::{Priority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task owned by the repository.
///
/// `order` is the task's rank among tasks sharing its `status`: the
/// repository keeps each status partition's ranks dense and zero-based,
/// and the drag controller restores that invariant after every move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<TagId>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_rule: Option<RepeatRule>,
    /// Dense zero-based rank within the status partition
    #[serde(default)]
    pub order: usize,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TaskId>,
}

impl Task {
    /// Create a new task with the given title and status
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: String::new(),
            notes: String::new(),
            start_date: None,
            deadline: None,
            status,
            priority: Priority::default(),
            tags: Vec::new(),
            subtasks: Vec::new(),
            repeat_rule: None,
            order: 0,
            created_at: now,
            updated_at: now,
            completed_at: None,
            parent_id: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the free-form notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the start date
    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Set the deadline
    pub fn with_deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the recurrence rule
    pub fn with_repeat_rule(mut self, rule: RepeatRule) -> Self {
        self.repeat_rule = Some(rule);
        self
    }

    /// Mark this task as a child of another
    pub fn with_parent(mut self, parent: TaskId) -> Self {
        self.parent_id = Some(parent);
        self
    }

    /// Find a subtask by ID
    pub fn find_subtask(&self, id: &SubtaskId) -> Option<&Subtask> {
        self.subtasks.iter().find(|s| &s.id == id)
    }

    /// Find a subtask by ID (mutable)
    pub fn find_subtask_mut(&mut self, id: &SubtaskId) -> Option<&mut Subtask> {
        self.subtasks.iter_mut().find(|s| &s.id == id)
    }

    /// Fraction of completed subtasks, 0.0 when there are none
    pub fn progress(&self) -> f64 {
        if self.subtasks.is_empty() {
            return 0.0;
        }
        let completed = self.subtasks.iter().filter(|s| s.completed).count();
        completed as f64 / self.subtasks.len() as f64
    }
}

/// A checklist item within a task
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub id: SubtaskId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subtask {
    /// Create a new incomplete subtask
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: SubtaskId::new(),
            title: title.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }
}
