//! Reminder planning for upcoming deadlines
//!
//! A pure planner: given the task list, the configured reminder offsets and
//! the current instant, it computes which reminders should exist. The
//! embedder owns the actual timers and desktop notifications; diffing two
//! plans tells it exactly what to schedule and what to cancel.

use crate::types::{Task, TaskId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default reminder offsets: 15 minutes, 1 hour, 1 day before the deadline
pub const DEFAULT_REMINDER_OFFSETS_MIN: [u32; 3] = [15, 60, 1440];

/// Reminder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOptions {
    pub enabled: bool,
    /// Minutes before the deadline at which to remind
    pub offsets_minutes: Vec<u32>,
}

impl Default for ReminderOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            offsets_minutes: DEFAULT_REMINDER_OFFSETS_MIN.to_vec(),
        }
    }
}

/// One reminder that should fire in the future
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub task_id: TaskId,
    /// Which offset produced this reminder
    pub minutes_before: u32,
    pub fire_at: DateTime<Utc>,
}

/// What changed between two plans
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReminderDiff {
    /// Reminders present in the new plan but not (identically) in the old
    pub to_schedule: Vec<Reminder>,
    /// Reminders whose (task, offset) pair vanished from the plan
    pub to_cancel: Vec<Reminder>,
}

/// Compute every reminder that should currently be pending.
///
/// Tasks without a deadline and tasks already in a terminal status produce
/// nothing; reminder instants that are already in the past are skipped.
/// The result is sorted by fire time, then task id.
pub fn plan_reminders(
    tasks: &[Task],
    options: &ReminderOptions,
    now: DateTime<Utc>,
) -> Vec<Reminder> {
    if !options.enabled {
        return Vec::new();
    }

    let mut plan = Vec::new();
    for task in tasks {
        if task.status.is_terminal() {
            continue;
        }
        let Some(deadline) = task.deadline else {
            continue;
        };

        for &minutes in &options.offsets_minutes {
            let fire_at = deadline - Duration::minutes(minutes as i64);
            if fire_at > now {
                plan.push(Reminder {
                    task_id: task.id.clone(),
                    minutes_before: minutes,
                    fire_at,
                });
            }
        }
    }

    plan.sort_by(|a, b| {
        a.fire_at
            .cmp(&b.fire_at)
            .then_with(|| a.task_id.cmp(&b.task_id))
    });
    plan
}

/// Diff two plans by (task, offset) key. A reminder whose fire time moved
/// (the deadline was edited) shows up in `to_schedule` with its new time;
/// the embedder replaces the timer under the same key.
pub fn diff_reminders(previous: &[Reminder], next: &[Reminder]) -> ReminderDiff {
    let old: BTreeMap<(TaskId, u32), &Reminder> = previous
        .iter()
        .map(|r| ((r.task_id.clone(), r.minutes_before), r))
        .collect();
    let new: BTreeMap<(TaskId, u32), &Reminder> = next
        .iter()
        .map(|r| ((r.task_id.clone(), r.minutes_before), r))
        .collect();

    let to_schedule = next
        .iter()
        .filter(|r| {
            old.get(&(r.task_id.clone(), r.minutes_before))
                .map(|prev| prev.fire_at != r.fire_at)
                .unwrap_or(true)
        })
        .cloned()
        .collect();

    let to_cancel = previous
        .iter()
        .filter(|r| !new.contains_key(&(r.task_id.clone(), r.minutes_before)))
        .cloned()
        .collect();

    ReminderDiff {
        to_schedule,
        to_cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TaskStatus;
    use chrono::TimeZone;

    fn at(h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, h, min, 0).unwrap()
    }

    fn due_task(title: &str, deadline: DateTime<Utc>) -> Task {
        let mut task = Task::new(title, TaskStatus::Planned);
        task.deadline = Some(deadline);
        task
    }

    #[test]
    fn test_plan_skips_past_offsets() {
        let task = due_task("soon", at(10, 0));
        let options = ReminderOptions::default();

        // 09:30: the 1-day and 1-hour marks have passed, only 15-minute left
        let plan = plan_reminders(std::slice::from_ref(&task), &options, at(9, 30));
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].minutes_before, 15);
        assert_eq!(plan[0].fire_at, at(9, 45));
    }

    #[test]
    fn test_plan_skips_terminal_and_undated_tasks() {
        let mut done = due_task("done", at(18, 0));
        done.status = TaskStatus::Completed;
        let cancelled = {
            let mut t = due_task("cancelled", at(18, 0));
            t.status = TaskStatus::Cancelled;
            t
        };
        let undated = Task::new("undated", TaskStatus::Planned);

        let plan = plan_reminders(&[done, cancelled, undated], &ReminderOptions::default(), at(9, 0));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_disabled_is_empty() {
        let task = due_task("soon", at(18, 0));
        let options = ReminderOptions {
            enabled: false,
            ..Default::default()
        };
        assert!(plan_reminders(&[task], &options, at(9, 0)).is_empty());
    }

    #[test]
    fn test_plan_is_sorted_by_fire_time() {
        let early = due_task("early", at(12, 0));
        let late = due_task("late", at(18, 0));
        let plan = plan_reminders(&[late, early], &ReminderOptions::default(), at(9, 0));

        let times: Vec<_> = plan.iter().map(|r| r.fire_at).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
    }

    #[test]
    fn test_diff_schedules_new_and_cancels_gone() {
        let task_a = due_task("a", at(12, 0));
        let task_b = due_task("b", at(18, 0));
        let options = ReminderOptions {
            enabled: true,
            offsets_minutes: vec![15],
        };

        let before = plan_reminders(&[task_a.clone(), task_b.clone()], &options, at(9, 0));
        let after = plan_reminders(std::slice::from_ref(&task_b), &options, at(9, 0));

        let diff = diff_reminders(&before, &after);
        assert!(diff.to_schedule.is_empty());
        assert_eq!(diff.to_cancel.len(), 1);
        assert_eq!(diff.to_cancel[0].task_id, task_a.id);
    }

    #[test]
    fn test_diff_reschedules_moved_deadline() {
        let options = ReminderOptions {
            enabled: true,
            offsets_minutes: vec![15],
        };
        let task = due_task("moving", at(12, 0));
        let before = plan_reminders(std::slice::from_ref(&task), &options, at(9, 0));

        let mut moved = task.clone();
        moved.deadline = Some(at(14, 0));
        let after = plan_reminders(std::slice::from_ref(&moved), &options, at(9, 0));

        let diff = diff_reminders(&before, &after);
        assert_eq!(diff.to_schedule.len(), 1);
        assert_eq!(diff.to_schedule[0].fire_at, at(13, 45));
        assert!(diff.to_cancel.is_empty());
    }
}
