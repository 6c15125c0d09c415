//! The fixed board columns and the status classifier

use serde::Serialize;
use taskdeck_tasks::TaskStatus;

/// A workflow column on the kanban board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub status: TaskStatus,
    pub title: &'static str,
    /// Dropped from the board when the user hides archived tasks
    pub hidden: bool,
}

/// The board's columns, in display order
pub const BOARD_COLUMNS: [Column; 5] = [
    Column {
        status: TaskStatus::Backlog,
        title: "Backlog",
        hidden: false,
    },
    Column {
        status: TaskStatus::Planned,
        title: "Planned",
        hidden: false,
    },
    Column {
        status: TaskStatus::InProgress,
        title: "In Progress",
        hidden: false,
    },
    Column {
        status: TaskStatus::Completed,
        title: "Done",
        hidden: false,
    },
    Column {
        status: TaskStatus::Cancelled,
        title: "Archived",
        hidden: true,
    },
];

/// The columns to render: the fixed list, minus hidden columns when
/// archived tasks are hidden. Pure and total.
pub fn visible_columns(hide_archived: bool) -> Vec<&'static Column> {
    BOARD_COLUMNS
        .iter()
        .filter(|col| !col.hidden || !hide_archived)
        .collect()
}

/// Classifier: the column a task belongs to, from its status.
///
/// With the canonical status vocabulary this is a direct lookup. It stays a
/// named seam so a divergent legacy vocabulary could be translated here
/// without touching the drag machinery.
pub fn column_for_status(status: TaskStatus) -> &'static Column {
    match status {
        TaskStatus::Backlog => &BOARD_COLUMNS[0],
        TaskStatus::Planned => &BOARD_COLUMNS[1],
        TaskStatus::InProgress => &BOARD_COLUMNS[2],
        TaskStatus::Completed => &BOARD_COLUMNS[3],
        TaskStatus::Cancelled => &BOARD_COLUMNS[4],
    }
}
