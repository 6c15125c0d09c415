//! Filtering, sorting and grouping of the task list
//!
//! All pure functions over the task list: the drag engine never sees any of
//! this, and nothing here reads drag state.

use crate::dates;
use crate::types::{Priority, TagId, Task, TaskStatus};
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which view the app is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    List,
    Kanban,
    CalendarDay,
    CalendarWeek,
    CalendarMonth,
    Timeline,
}

/// Sort key for the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    Created,
    Deadline,
    Priority,
    Status,
    Title,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Deadline-based filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFilter {
    All,
    Today,
    Tomorrow,
    Week,
    Month,
    Overdue,
}

/// The user's current view and filter settings.
///
/// `None` in the set filters means "all"; an explicit list restricts to
/// its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub view_mode: ViewMode,
    pub date_filter: DateFilter,
    /// None = all statuses
    #[serde(default)]
    pub status_filter: Option<Vec<TaskStatus>>,
    /// None = all tags
    #[serde(default)]
    pub tag_filter: Option<Vec<TagId>>,
    /// None = all priorities
    #[serde(default)]
    pub priority_filter: Option<Vec<Priority>>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    #[serde(default)]
    pub search_query: String,
    pub hide_archived: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::List,
            date_filter: DateFilter::All,
            status_filter: None,
            tag_filter: None,
            priority_filter: None,
            sort_by: SortBy::Created,
            sort_order: SortOrder::Desc,
            search_query: String::new(),
            hide_archived: true,
        }
    }
}

impl FilterState {
    /// Reset every setting to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether one task passes every active filter
    pub fn matches(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            let hit = task.title.to_lowercase().contains(&query)
                || task.description.to_lowercase().contains(&query)
                || task.notes.to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if let Some(statuses) = &self.status_filter {
            if !statuses.contains(&task.status) {
                return false;
            }
        }

        if let Some(tags) = &self.tag_filter {
            if !task.tags.iter().any(|tag| tags.contains(tag)) {
                return false;
            }
        }

        if let Some(priorities) = &self.priority_filter {
            if !priorities.contains(&task.priority) {
                return false;
            }
        }

        if self.hide_archived && task.status == TaskStatus::Cancelled {
            return false;
        }

        self.matches_date(task, now)
    }

    fn matches_date(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if self.date_filter == DateFilter::All {
            return true;
        }
        let Some(deadline) = task.deadline else {
            return false;
        };
        let today = now.date_naive();
        let due = deadline.date_naive();

        match self.date_filter {
            DateFilter::All => true,
            DateFilter::Today => due == today,
            DateFilter::Tomorrow => due == today + Duration::days(1),
            DateFilter::Week => dates::same_week(due, today),
            DateFilter::Month => due.year() == today.year() && due.month() == today.month(),
            DateFilter::Overdue => dates::is_overdue(Some(deadline), now),
        }
    }

    /// Filter and sort the task list for display
    pub fn apply<'a>(&self, tasks: &'a [Task], now: DateTime<Utc>) -> Vec<&'a Task> {
        let mut visible: Vec<&Task> = tasks.iter().filter(|t| self.matches(t, now)).collect();
        self.sort(&mut visible);
        visible
    }

    /// Sort already-filtered tasks by the configured key and direction.
    /// The sort is stable; tasks without a deadline always sort last.
    pub fn sort(&self, tasks: &mut [&Task]) {
        use std::cmp::Ordering;

        let dir = |ordering: Ordering| match self.sort_order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        };

        tasks.sort_by(|a, b| match self.sort_by {
            SortBy::Created => dir(a.created_at.cmp(&b.created_at)),
            SortBy::Deadline => match (a.deadline, b.deadline) {
                (Some(x), Some(y)) => dir(x.cmp(&y)),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            SortBy::Priority => dir(a.priority.cmp(&b.priority)),
            SortBy::Status => dir(a.status.cmp(&b.status)),
            SortBy::Title => dir(a.title.to_lowercase().cmp(&b.title.to_lowercase())),
        });
    }
}

/// Group tasks by status for the kanban view. Every status is present in the
/// result, empty columns included, in board display order.
pub fn group_by_status<'a, I>(tasks: I) -> BTreeMap<TaskStatus, Vec<&'a Task>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut grouped: BTreeMap<TaskStatus, Vec<&Task>> = TaskStatus::ALL
        .into_iter()
        .map(|status| (status, Vec::new()))
        .collect();
    for task in tasks {
        grouped
            .entry(task.status)
            .or_default()
            .push(task);
    }
    grouped
}
