//! Date helpers for grouping, overdue checks and recurrence
//!
//! Everything here is a pure function of its inputs; "now" is always passed
//! in so views and tests agree on what today means.

use crate::types::{RepeatKind, RepeatRule, Task};
use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, Utc};
use serde::Serialize;

/// Which bucket a task's deadline falls into for date grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateGroup {
    Overdue,
    Today,
    Tomorrow,
    Week,
    Later,
}

/// A deadline is overdue once its calendar day has fully passed; a task due
/// today is not overdue yet.
pub fn is_overdue(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match deadline {
        Some(deadline) => deadline.date_naive() < now.date_naive(),
        None => false,
    }
}

/// Whether two dates fall in the same ISO week
pub fn same_week(a: NaiveDate, b: NaiveDate) -> bool {
    a.iso_week() == b.iso_week()
}

/// Bucket a task by its deadline. Tasks without one are simply "later".
pub fn date_group(task: &Task, now: DateTime<Utc>) -> DateGroup {
    let Some(deadline) = task.deadline else {
        return DateGroup::Later;
    };
    let today = now.date_naive();
    let due = deadline.date_naive();

    if due < today {
        DateGroup::Overdue
    } else if due == today {
        DateGroup::Today
    } else if due == today + Duration::days(1) {
        DateGroup::Tomorrow
    } else if same_week(due, today) {
        DateGroup::Week
    } else {
        DateGroup::Later
    }
}

/// The next occurrence after the current deadline, per the task's rule.
/// `None` when the task has no rule or no deadline to anchor on.
pub fn next_repeat_date(task: &Task) -> Option<DateTime<Utc>> {
    let rule = task.repeat_rule.as_ref()?;
    let deadline = task.deadline?;
    let interval = rule.interval.unwrap_or(1).max(1);

    match rule.kind {
        RepeatKind::Daily => Some(deadline + Duration::days(1)),
        RepeatKind::Weekly => Some(deadline + Duration::weeks(interval as i64)),
        RepeatKind::Monthly => deadline.checked_add_months(Months::new(interval)),
        RepeatKind::Custom => Some(deadline + Duration::days(interval as i64)),
    }
}

/// The calendar days within `[from, to]` a repeating task occurs on.
///
/// Occurrences are anchored on the task's deadline (or start date when there
/// is no deadline) and stop at the rule's end date. A task without a rule or
/// without an anchor has no occurrences.
pub fn repeat_occurrences(task: &Task, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let Some(rule) = task.repeat_rule.as_ref() else {
        return Vec::new();
    };
    let Some(anchor) = task.deadline.or(task.start_date).map(|d| d.date_naive()) else {
        return Vec::new();
    };

    let end = rule.end_date.map(|d| d.date_naive());
    let interval = rule.interval.unwrap_or(1).max(1) as i64;
    let mut occurrences = Vec::new();

    for date in from.iter_days().take_while(|d| *d <= to) {
        if let Some(end) = end {
            if date > end {
                break;
            }
        }

        let occurs = match rule.kind {
            RepeatKind::Daily => true,
            RepeatKind::Weekly => {
                if rule.days_of_week.is_empty() {
                    date.weekday() == anchor.weekday()
                } else {
                    rule.days_of_week
                        .contains(&(date.weekday().num_days_from_sunday() as u8))
                }
            }
            RepeatKind::Monthly => date.day() == anchor.day(),
            RepeatKind::Custom => {
                date >= anchor && (date - anchor).num_days() % interval == 0
            }
        };
        if occurs {
            occurrences.push(date);
        }
    }

    occurrences
}

/// Human-facing date: "Today", "Tomorrow", or e.g. "Mar 5, 2026"
pub fn format_task_date(date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(date) = date else {
        return String::new();
    };
    let today = now.date_naive();
    let day = date.date_naive();

    if day == today {
        "Today".to_string()
    } else if day == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        day.format("%b %-d, %Y").to_string()
    }
}

/// Human-facing time of day, 24h clock
pub fn format_task_time(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => date.format("%H:%M").to_string(),
        None => String::new(),
    }
}
