//! In-memory task repository
//!
//! The repository owns the authoritative task and tag lists. All mutation
//! goes through named methods; nothing else writes task state.
//!
//! Ordering contract: `order` is a dense zero-based rank within each status
//! partition. [`TaskRepository::set_status`] appends the moved task at the
//! end of its new partition but does not re-densify the partition it left;
//! callers performing a move follow up with [`TaskRepository::reorder_tasks`]
//! for every partition they touched, always passing the complete id list so
//! ranks are recomputed from scratch rather than patched.

use crate::error::{Result, TaskError};
use crate::types::{
    Priority, RepeatRule, Subtask, SubtaskId, Tag, TagId, Task, TaskId, TaskStatus,
};
use chrono::{DateTime, Utc};
use tracing::debug;

/// The authoritative store of tasks and tags for one board
#[derive(Debug, Default)]
pub struct TaskRepository {
    tasks: Vec<Task>,
    tags: Vec<Tag>,
}

impl TaskRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from already-loaded data
    pub fn from_parts(tasks: Vec<Task>, tags: Vec<Tag>) -> Self {
        Self { tasks, tags }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All tasks, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// All tags, in insertion order
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Look up a task, `None` if it does not exist
    pub fn find(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Look up a task, erroring if it does not exist
    pub fn get(&self, id: &TaskId) -> Result<&Task> {
        self.find(id).ok_or_else(|| TaskError::TaskNotFound {
            id: id.to_string(),
        })
    }

    /// Look up a tag
    pub fn find_tag(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|t| &t.id == id)
    }

    /// The tasks of one status partition, sorted ascending by rank.
    ///
    /// The sort is stable, so tasks whose ranks transiently collide keep
    /// their relative list position until the next renumbering.
    pub fn tasks_with_status(&self, status: TaskStatus) -> Vec<&Task> {
        let mut column: Vec<&Task> = self.tasks.iter().filter(|t| t.status == status).collect();
        column.sort_by_key(|t| t.order);
        column
    }

    /// The complete ordered id list of one status partition
    pub fn ordered_ids(&self, status: TaskStatus) -> Vec<TaskId> {
        self.tasks_with_status(status)
            .into_iter()
            .map(|t| t.id.clone())
            .collect()
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Rank for a task appended at the end of a partition, optionally
    /// ignoring one task (the one being moved into it)
    fn next_order(&self, status: TaskStatus, excluding: Option<&TaskId>) -> usize {
        self.tasks
            .iter()
            .filter(|t| t.status == status && excluding != Some(&t.id))
            .map(|t| t.order + 1)
            .max()
            .unwrap_or(0)
    }

    // =========================================================================
    // Task mutations
    // =========================================================================

    /// Add a task, appending it at the end of its status partition.
    ///
    /// Returns the id of the stored task.
    pub fn add_task(&mut self, mut task: Task) -> Result<TaskId> {
        if task.title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if self.find(&task.id).is_some() {
            return Err(TaskError::duplicate_id("task", task.id.as_str()));
        }

        task.order = self.next_order(task.status, None);
        let id = task.id.clone();
        debug!(task = %id, status = %task.status, order = task.order, "task added");
        self.tasks.push(task);
        Ok(id)
    }

    /// Apply a partial update to a task.
    ///
    /// Editing the status through here applies the completion-stamp rules
    /// but leaves ranks alone; moves between partitions go through
    /// [`set_status`](Self::set_status) + [`reorder_tasks`](Self::reorder_tasks).
    pub fn update_task(&mut self, id: &TaskId, update: TaskUpdate) -> Result<()> {
        let task = self.find_mut(id).ok_or_else(|| TaskError::TaskNotFound {
            id: id.to_string(),
        })?;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            task.title = title;
        }
        if let Some(description) = update.description {
            task.description = description;
        }
        if let Some(notes) = update.notes {
            task.notes = notes;
        }
        if let Some(start_date) = update.start_date {
            task.start_date = start_date;
        }
        if let Some(deadline) = update.deadline {
            task.deadline = deadline;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }
        if let Some(tags) = update.tags {
            task.tags = tags;
        }
        if let Some(repeat_rule) = update.repeat_rule {
            task.repeat_rule = repeat_rule;
        }
        if let Some(status) = update.status {
            let previous = task.status;
            if status == TaskStatus::Completed && previous != TaskStatus::Completed {
                task.completed_at = Some(Utc::now());
            } else if status != TaskStatus::Completed && previous == TaskStatus::Completed {
                task.completed_at = None;
            }
            task.status = status;
        }

        task.updated_at = Utc::now();
        Ok(())
    }

    /// Delete a task and its direct children, then re-densify the ranks of
    /// every partition that lost a task.
    pub fn delete_task(&mut self, id: &TaskId) -> Result<()> {
        if self.find(id).is_none() {
            return Err(TaskError::TaskNotFound {
                id: id.to_string(),
            });
        }

        let mut touched: Vec<TaskStatus> = Vec::new();
        self.tasks.retain(|t| {
            let doomed = &t.id == id || t.parent_id.as_ref() == Some(id);
            if doomed && !touched.contains(&t.status) {
                touched.push(t.status);
            }
            !doomed
        });

        for status in touched {
            let ids = self.ordered_ids(status);
            self.reorder_tasks(status, &ids);
        }
        debug!(task = %id, "task deleted");
        Ok(())
    }

    /// Flip a task between completed and planned
    pub fn toggle_status(&mut self, id: &TaskId) -> Result<()> {
        let current = self.get(id)?.status;
        let next = if current == TaskStatus::Completed {
            TaskStatus::Planned
        } else {
            TaskStatus::Completed
        };
        self.set_status(id, next)
    }

    /// Change a task's status.
    ///
    /// Side effects owned by the repository, not its callers:
    /// - entering `completed` stamps `completed_at`, leaving it clears it
    /// - entering `backlog` resets priority to normal
    /// - an actual status change appends the task at the end of the new
    ///   partition (`order = max + 1`)
    ///
    /// The partition the task left keeps its gap until the caller passes a
    /// complete id list to [`reorder_tasks`](Self::reorder_tasks).
    pub fn set_status(&mut self, id: &TaskId, status: TaskStatus) -> Result<()> {
        let next_order = self.next_order(status, Some(id));
        let task = self.find_mut(id).ok_or_else(|| TaskError::TaskNotFound {
            id: id.to_string(),
        })?;
        let previous = task.status;

        if status == TaskStatus::Completed {
            task.completed_at = Some(Utc::now());
        } else if previous == TaskStatus::Completed {
            task.completed_at = None;
        }

        if status == TaskStatus::Backlog {
            task.priority = Priority::Normal;
        }

        if previous != status {
            task.status = status;
            task.order = next_order;
        }
        task.updated_at = Utc::now();
        debug!(task = %id, from = %previous, to = %status, "status changed");
        Ok(())
    }

    /// Rewrite the ranks of one status partition from a complete ordered id
    /// list: each listed task of that status gets `order = index`.
    ///
    /// Tasks of the partition omitted from the list are left untouched, so
    /// callers must always pass the whole partition.
    pub fn reorder_tasks(&mut self, status: TaskStatus, ordered_ids: &[TaskId]) {
        let now = Utc::now();
        for task in &mut self.tasks {
            if task.status != status {
                continue;
            }
            if let Some(index) = ordered_ids.iter().position(|id| id == &task.id) {
                if task.order != index {
                    task.order = index;
                    task.updated_at = now;
                }
            }
        }
    }

    // =========================================================================
    // Subtask mutations
    // =========================================================================

    /// Add a subtask to a task
    pub fn add_subtask(&mut self, task_id: &TaskId, title: impl Into<String>) -> Result<SubtaskId> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        let task = self.find_mut(task_id).ok_or_else(|| TaskError::TaskNotFound {
            id: task_id.to_string(),
        })?;

        let subtask = Subtask::new(title);
        let id = subtask.id.clone();
        task.subtasks.push(subtask);
        task.updated_at = Utc::now();
        Ok(id)
    }

    /// Apply a partial update to a subtask
    pub fn update_subtask(
        &mut self,
        task_id: &TaskId,
        subtask_id: &SubtaskId,
        update: SubtaskUpdate,
    ) -> Result<()> {
        let task = self.find_mut(task_id).ok_or_else(|| TaskError::TaskNotFound {
            id: task_id.to_string(),
        })?;
        let subtask =
            task.find_subtask_mut(subtask_id)
                .ok_or_else(|| TaskError::SubtaskNotFound {
                    task: task_id.to_string(),
                    id: subtask_id.to_string(),
                })?;

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(TaskError::EmptyTitle);
            }
            subtask.title = title;
        }
        if let Some(completed) = update.completed {
            subtask.completed = completed;
        }
        subtask.updated_at = Utc::now();
        task.updated_at = Utc::now();
        Ok(())
    }

    /// Remove a subtask from a task
    pub fn delete_subtask(&mut self, task_id: &TaskId, subtask_id: &SubtaskId) -> Result<()> {
        let task = self.find_mut(task_id).ok_or_else(|| TaskError::TaskNotFound {
            id: task_id.to_string(),
        })?;
        if task.find_subtask(subtask_id).is_none() {
            return Err(TaskError::SubtaskNotFound {
                task: task_id.to_string(),
                id: subtask_id.to_string(),
            });
        }
        task.subtasks.retain(|s| &s.id != subtask_id);
        task.updated_at = Utc::now();
        Ok(())
    }

    // =========================================================================
    // Tag mutations
    // =========================================================================

    /// Add a tag
    pub fn add_tag(&mut self, tag: Tag) -> Result<TagId> {
        if self.find_tag(&tag.id).is_some() {
            return Err(TaskError::duplicate_id("tag", tag.id.as_str()));
        }
        let id = tag.id.clone();
        self.tags.push(tag);
        Ok(id)
    }

    /// Apply a partial update to a tag
    pub fn update_tag(&mut self, id: &TagId, update: TagUpdate) -> Result<()> {
        let tag = self
            .tags
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| TaskError::TagNotFound { id: id.to_string() })?;

        if let Some(name) = update.name {
            tag.name = name;
        }
        if let Some(color) = update.color {
            tag.color = color;
        }
        Ok(())
    }

    /// Remove a tag and strip it from every task that references it
    pub fn delete_tag(&mut self, id: &TagId) -> Result<()> {
        if self.find_tag(id).is_none() {
            return Err(TaskError::TagNotFound { id: id.to_string() });
        }
        self.tags.retain(|t| &t.id != id);
        for task in &mut self.tasks {
            task.tags.retain(|tag_id| tag_id != id);
        }
        Ok(())
    }
}

/// Partial update for [`TaskRepository::update_task`]
#[derive(Debug, Default, Clone)]
pub struct TaskUpdate {
    /// New title
    pub title: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New free-form notes
    pub notes: Option<String>,
    /// New start date (None = don't change, Some(None) = clear)
    pub start_date: Option<Option<DateTime<Utc>>>,
    /// New deadline (None = don't change, Some(None) = clear)
    pub deadline: Option<Option<DateTime<Utc>>>,
    /// New status
    pub status: Option<TaskStatus>,
    /// New priority
    pub priority: Option<Priority>,
    /// Replace all tags
    pub tags: Option<Vec<TagId>>,
    /// New recurrence rule (None = don't change, Some(None) = clear)
    pub repeat_rule: Option<Option<RepeatRule>>,
}

impl TaskUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set or clear the start date
    pub fn with_start_date(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.start_date = Some(start);
        self
    }

    /// Set or clear the deadline
    pub fn with_deadline(mut self, deadline: Option<DateTime<Utc>>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replace the tags
    pub fn with_tags(mut self, tags: Vec<TagId>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Set or clear the recurrence rule
    pub fn with_repeat_rule(mut self, rule: Option<RepeatRule>) -> Self {
        self.repeat_rule = Some(rule);
        self
    }
}

/// Partial update for [`TaskRepository::update_subtask`]
#[derive(Debug, Default, Clone)]
pub struct SubtaskUpdate {
    /// New title
    pub title: Option<String>,
    /// New completion state
    pub completed: Option<bool>,
}

impl SubtaskUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the completion state
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Partial update for [`TaskRepository::update_tag`]
#[derive(Debug, Default, Clone)]
pub struct TagUpdate {
    /// New name
    pub name: Option<String>,
    /// New color
    pub color: Option<String>,
}

impl TagUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(titles_and_statuses: &[(&str, TaskStatus)]) -> (TaskRepository, Vec<TaskId>) {
        let mut repo = TaskRepository::new();
        let ids = titles_and_statuses
            .iter()
            .map(|(title, status)| repo.add_task(Task::new(*title, *status)).unwrap())
            .collect();
        (repo, ids)
    }

    #[test]
    fn test_add_task_appends_rank() {
        let (repo, ids) = repo_with(&[
            ("a", TaskStatus::Planned),
            ("b", TaskStatus::Planned),
            ("c", TaskStatus::Backlog),
        ]);
        assert_eq!(repo.find(&ids[0]).unwrap().order, 0);
        assert_eq!(repo.find(&ids[1]).unwrap().order, 1);
        // Separate partition starts over at zero
        assert_eq!(repo.find(&ids[2]).unwrap().order, 0);
    }

    #[test]
    fn test_add_task_rejects_empty_title() {
        let mut repo = TaskRepository::new();
        let result = repo.add_task(Task::new("   ", TaskStatus::Planned));
        assert!(matches!(result, Err(TaskError::EmptyTitle)));
    }

    #[test]
    fn test_add_task_rejects_duplicate_id() {
        let mut repo = TaskRepository::new();
        let task = Task::new("one", TaskStatus::Planned);
        let twin = task.clone();
        repo.add_task(task).unwrap();
        assert!(matches!(
            repo.add_task(twin),
            Err(TaskError::DuplicateId { .. })
        ));
    }

    #[test]
    fn test_set_status_stamps_completion() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned)]);
        repo.set_status(&ids[0], TaskStatus::Completed).unwrap();
        assert!(repo.find(&ids[0]).unwrap().completed_at.is_some());

        repo.set_status(&ids[0], TaskStatus::Planned).unwrap();
        assert!(repo.find(&ids[0]).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_set_status_resets_priority_in_backlog() {
        let mut repo = TaskRepository::new();
        let id = repo
            .add_task(Task::new("hot", TaskStatus::Planned).with_priority(Priority::High))
            .unwrap();
        repo.set_status(&id, TaskStatus::Backlog).unwrap();
        assert_eq!(repo.find(&id).unwrap().priority, Priority::Normal);
    }

    #[test]
    fn test_set_status_appends_to_target_partition() {
        let (mut repo, ids) = repo_with(&[
            ("a", TaskStatus::Planned),
            ("b", TaskStatus::InProgress),
            ("c", TaskStatus::InProgress),
        ]);
        repo.set_status(&ids[0], TaskStatus::InProgress).unwrap();
        assert_eq!(repo.find(&ids[0]).unwrap().order, 2);
    }

    #[test]
    fn test_set_status_same_status_keeps_rank() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned), ("b", TaskStatus::Planned)]);
        repo.set_status(&ids[1], TaskStatus::Planned).unwrap();
        assert_eq!(repo.find(&ids[1]).unwrap().order, 1);
    }

    #[test]
    fn test_set_status_missing_task() {
        let mut repo = TaskRepository::new();
        let result = repo.set_status(&TaskId::from("ghost"), TaskStatus::Planned);
        assert!(matches!(result, Err(TaskError::TaskNotFound { .. })));
    }

    #[test]
    fn test_reorder_assigns_index_ranks() {
        let (mut repo, ids) = repo_with(&[
            ("a", TaskStatus::Planned),
            ("b", TaskStatus::Planned),
            ("c", TaskStatus::Planned),
        ]);
        repo.reorder_tasks(
            TaskStatus::Planned,
            &[ids[2].clone(), ids[0].clone(), ids[1].clone()],
        );
        assert_eq!(repo.find(&ids[2]).unwrap().order, 0);
        assert_eq!(repo.find(&ids[0]).unwrap().order, 1);
        assert_eq!(repo.find(&ids[1]).unwrap().order, 2);
    }

    #[test]
    fn test_reorder_ignores_other_partitions() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned), ("b", TaskStatus::Backlog)]);
        repo.reorder_tasks(TaskStatus::Planned, &[ids[1].clone(), ids[0].clone()]);
        // The backlog task is not in the planned partition, so its rank is untouched
        assert_eq!(repo.find(&ids[1]).unwrap().order, 0);
        // And the planned task takes its index from the list
        assert_eq!(repo.find(&ids[0]).unwrap().order, 1);
    }

    #[test]
    fn test_tasks_with_status_sorted_and_stable() {
        let (mut repo, ids) = repo_with(&[
            ("a", TaskStatus::Planned),
            ("b", TaskStatus::Planned),
            ("c", TaskStatus::Planned),
        ]);
        // Force a rank collision: b and c both claim rank 0
        repo.find_mut(&ids[1]).unwrap().order = 0;
        repo.find_mut(&ids[2]).unwrap().order = 0;
        repo.find_mut(&ids[0]).unwrap().order = 1;

        let column = repo.tasks_with_status(TaskStatus::Planned);
        // Stable sort keeps b before c, both before a
        assert_eq!(column[0].id, ids[1]);
        assert_eq!(column[1].id, ids[2]);
        assert_eq!(column[2].id, ids[0]);
    }

    #[test]
    fn test_delete_task_redensifies_partition() {
        let (mut repo, ids) = repo_with(&[
            ("a", TaskStatus::Planned),
            ("b", TaskStatus::Planned),
            ("c", TaskStatus::Planned),
        ]);
        repo.delete_task(&ids[1]).unwrap();

        let column = repo.tasks_with_status(TaskStatus::Planned);
        assert_eq!(column.len(), 2);
        assert_eq!(column[0].id, ids[0]);
        assert_eq!(column[0].order, 0);
        assert_eq!(column[1].id, ids[2]);
        assert_eq!(column[1].order, 1);
    }

    #[test]
    fn test_delete_task_removes_children() {
        let mut repo = TaskRepository::new();
        let parent = repo.add_task(Task::new("parent", TaskStatus::Planned)).unwrap();
        let child = repo
            .add_task(Task::new("child", TaskStatus::Planned).with_parent(parent.clone()))
            .unwrap();
        repo.delete_task(&parent).unwrap();
        assert!(repo.find(&parent).is_none());
        assert!(repo.find(&child).is_none());
    }

    #[test]
    fn test_toggle_status() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::InProgress)]);
        repo.toggle_status(&ids[0]).unwrap();
        assert_eq!(repo.find(&ids[0]).unwrap().status, TaskStatus::Completed);
        assert!(repo.find(&ids[0]).unwrap().completed_at.is_some());

        repo.toggle_status(&ids[0]).unwrap();
        assert_eq!(repo.find(&ids[0]).unwrap().status, TaskStatus::Planned);
        assert!(repo.find(&ids[0]).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_update_task_partial() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned)]);
        repo.update_task(
            &ids[0],
            TaskUpdate::new()
                .with_title("renamed")
                .with_priority(Priority::High),
        )
        .unwrap();

        let task = repo.find(&ids[0]).unwrap();
        assert_eq!(task.title, "renamed");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, TaskStatus::Planned);
    }

    #[test]
    fn test_update_task_status_stamps() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned)]);
        repo.update_task(&ids[0], TaskUpdate::new().with_status(TaskStatus::Completed))
            .unwrap();
        assert!(repo.find(&ids[0]).unwrap().completed_at.is_some());
    }

    #[test]
    fn test_subtask_lifecycle() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned)]);
        let sub = repo.add_subtask(&ids[0], "step one").unwrap();

        repo.update_subtask(&ids[0], &sub, SubtaskUpdate::new().with_completed(true))
            .unwrap();
        assert!(repo.find(&ids[0]).unwrap().find_subtask(&sub).unwrap().completed);

        repo.delete_subtask(&ids[0], &sub).unwrap();
        assert!(repo.find(&ids[0]).unwrap().subtasks.is_empty());
    }

    #[test]
    fn test_subtask_missing() {
        let (mut repo, ids) = repo_with(&[("a", TaskStatus::Planned)]);
        let result = repo.delete_subtask(&ids[0], &SubtaskId::from("ghost"));
        assert!(matches!(result, Err(TaskError::SubtaskNotFound { .. })));
    }

    #[test]
    fn test_delete_tag_strips_references() {
        let mut repo = TaskRepository::new();
        let tag = Tag::new("work");
        let tag_id = repo.add_tag(tag).unwrap();
        let task_id = repo
            .add_task(Task::new("a", TaskStatus::Planned).with_tags(vec![tag_id.clone()]))
            .unwrap();

        repo.delete_tag(&tag_id).unwrap();
        assert!(repo.find_tag(&tag_id).is_none());
        assert!(repo.find(&task_id).unwrap().tags.is_empty());
    }

    #[test]
    fn test_update_tag() {
        let mut repo = TaskRepository::new();
        let tag_id = repo.add_tag(Tag::new("work")).unwrap();
        repo.update_tag(&tag_id, TagUpdate::new().with_color("3b82f6"))
            .unwrap();
        assert_eq!(repo.find_tag(&tag_id).unwrap().color, "3b82f6");
    }
}
