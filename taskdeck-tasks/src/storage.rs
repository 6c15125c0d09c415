//! JSON snapshot persistence
//!
//! The whole board is persisted as one pretty-printed JSON snapshot of
//! tasks and tags. Loading is where legacy data gets normalized: the
//! historical status vocabulary and the ancient flat task-list format are
//! both translated here, before anything reaches the core types, so the
//! rest of the system only ever sees the canonical model.

use crate::error::{Result, TaskError};
use crate::types::{Tag, Task, TaskId, TaskStatus};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// Everything the app persists: the task list and the tag list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Snapshot {
    /// Create a snapshot from parts
    pub fn new(tasks: Vec<Task>, tags: Vec<Tag>) -> Self {
        Self { tasks, tags }
    }

    /// True when there is nothing to persist
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.tags.is_empty()
    }
}

/// File-backed store for [`Snapshot`]s
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store writing to the given snapshot file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the snapshot, translating legacy formats and re-densifying
    /// per-status ranks. A missing file is an empty board, not an error.
    pub async fn load(&self) -> Result<Snapshot> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot yet, starting empty");
                return Ok(Snapshot::default());
            }
            Err(err) => return Err(err.into()),
        };

        let raw: Value = serde_json::from_str(&content)?;
        let mut snapshot = migrate(raw)?;
        normalize_orders(&mut snapshot.tasks);
        debug!(
            path = %self.path.display(),
            tasks = snapshot.tasks.len(),
            tags = snapshot.tags.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Write the snapshot, creating parent directories as needed
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), tasks = snapshot.tasks.len(), "snapshot saved");
        Ok(())
    }
}

/// Re-densify every status partition's ranks: sorted by their current rank
/// (stable, so collisions keep list position), then renumbered 0..count-1.
pub(crate) fn normalize_orders(tasks: &mut [Task]) {
    for status in TaskStatus::ALL {
        let mut indices: Vec<usize> = (0..tasks.len())
            .filter(|&i| tasks[i].status == status)
            .collect();
        indices.sort_by_key(|&i| tasks[i].order);
        for (rank, &i) in indices.iter().enumerate() {
            tasks[i].order = rank;
        }
    }
}

/// Translate a raw snapshot value into the canonical model
fn migrate(raw: Value) -> Result<Snapshot> {
    match raw {
        // The ancient format: a bare array of {id, text, completed} records
        Value::Array(items) => migrate_legacy_list(items),
        Value::Object(_) => {
            let mut raw = raw;
            if let Some(tasks) = raw.get_mut("tasks").and_then(Value::as_array_mut) {
                for task in tasks {
                    normalize_task_value(task);
                }
            }
            Ok(serde_json::from_value(raw)?)
        }
        _ => Err(TaskError::snapshot_format(
            "expected an object or a legacy task array",
        )),
    }
}

/// Rewrite one raw task record in place before typed deserialization
fn normalize_task_value(task: &mut Value) {
    if let Some(status) = task.get("status").and_then(Value::as_str) {
        if let Some(canonical) = legacy_status(status) {
            task["status"] = Value::String(canonical.as_str().to_string());
        }
    }

    // Rules stored as {"kind": "none"} mean "does not repeat"
    let is_none_rule = task
        .get("repeat_rule")
        .and_then(|rule| rule.get("kind"))
        .and_then(Value::as_str)
        == Some("none");
    if is_none_rule {
        if let Some(record) = task.as_object_mut() {
            record.remove("repeat_rule");
        }
    }
}

/// Map the historical status vocabulary onto the canonical one
fn legacy_status(status: &str) -> Option<TaskStatus> {
    match status {
        "progress" => Some(TaskStatus::InProgress),
        "done" => Some(TaskStatus::Completed),
        "archive" => Some(TaskStatus::Cancelled),
        _ => None,
    }
}

/// Lift the flat `{id, text, completed}` records of the oldest format into
/// full tasks
fn migrate_legacy_list(items: Vec<Value>) -> Result<Snapshot> {
    let now = Utc::now();
    let mut tasks = Vec::with_capacity(items.len());

    for item in items {
        let Some(text) = item.get("text").and_then(Value::as_str).filter(|t| !t.is_empty())
        else {
            warn!("dropping legacy record without text: {item}");
            continue;
        };
        let completed = item.get("completed").and_then(Value::as_bool).unwrap_or(false);

        let status = if completed {
            TaskStatus::Completed
        } else {
            TaskStatus::Planned
        };
        let mut task = Task::new(text, status);
        if let Some(id) = item.get("id").and_then(Value::as_str) {
            task.id = TaskId::from(id);
        }
        if completed {
            task.completed_at = Some(now);
        }
        tasks.push(task);
    }

    Ok(Snapshot::new(tasks, Vec::new()))
}
