//! Error types for the task domain

use taskdeck_common::{ErrorSeverity, Severity};
use thiserror::Error;

/// Result type for task operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors that can occur in task repository and storage operations
#[derive(Debug, Error)]
pub enum TaskError {
    /// Task not found
    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    /// Subtask not found on the given task
    #[error("subtask not found: {id} on task {task}")]
    SubtaskNotFound { task: String, id: String },

    /// Tag not found
    #[error("tag not found: {id}")]
    TagNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {kind} ID: {id}")]
    DuplicateId { kind: String, id: String },

    /// Empty title rejected
    #[error("task title cannot be empty")]
    EmptyTitle,

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Snapshot data that cannot be understood, even as a legacy format
    #[error("snapshot format error: {message}")]
    SnapshotFormat { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TaskError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Create a snapshot format error
    pub fn snapshot_format(message: impl Into<String>) -> Self {
        Self::SnapshotFormat {
            message: message.into(),
        }
    }
}

impl Severity for TaskError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            // Critical: the user's data is at risk
            TaskError::Io(_) => ErrorSeverity::Critical,
            TaskError::SnapshotFormat { .. } => ErrorSeverity::Critical,

            // Error: the operation failed, the repository is untouched
            TaskError::TaskNotFound { .. } => ErrorSeverity::Error,
            TaskError::SubtaskNotFound { .. } => ErrorSeverity::Error,
            TaskError::TagNotFound { .. } => ErrorSeverity::Error,
            TaskError::DuplicateId { .. } => ErrorSeverity::Error,
            TaskError::InvalidValue { .. } => ErrorSeverity::Error,
            TaskError::Json(_) => ErrorSeverity::Error,

            // Warning: validation the caller can correct
            TaskError::EmptyTitle => ErrorSeverity::Warning,
        }
    }
}
