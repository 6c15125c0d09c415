//! Task domain for taskdeck
//!
//! This crate owns the task data model and everything that operates on the
//! task list without touching drag state: the in-memory repository, JSON
//! snapshot persistence with legacy-format migration, filter/sort/group
//! predicates, date helpers, and the reminder planner.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskdeck_tasks::{Task, TaskRepository, TaskStatus};
//!
//! let mut repo = TaskRepository::new();
//! let id = repo.add_task(Task::new("Write the report", TaskStatus::Planned))?;
//!
//! repo.set_status(&id, TaskStatus::InProgress)?;
//! assert_eq!(repo.get(&id)?.status, TaskStatus::InProgress);
//! # Ok::<(), taskdeck_tasks::TaskError>(())
//! ```
//!
//! ## Ordering invariant
//!
//! Within each status partition, task `order` ranks are dense and
//! zero-based. Operations that move tasks between partitions append at the
//! end and rely on their caller (the kanban drag controller) to rewrite the
//! touched partitions with complete id lists; see
//! [`TaskRepository::reorder_tasks`].

pub mod auto_color;
pub mod dates;
mod error;
pub mod filter;
pub mod notify;
mod repository;
pub mod storage;
pub mod types;

pub use error::{Result, TaskError};
pub use repository::{SubtaskUpdate, TagUpdate, TaskRepository, TaskUpdate};
pub use storage::{Snapshot, SnapshotStore};

// Re-export commonly used types
pub use types::{
    Priority, RepeatKind, RepeatRule, Subtask, SubtaskId, Tag, TagId, Task, TaskId, TaskStatus,
};
