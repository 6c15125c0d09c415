//! Drop target identification

use crate::columns::BOARD_COLUMNS;
use taskdeck_tasks::{TaskId, TaskStatus};

/// What the pointer is over during a drag: a card, or a column surface
/// (dropping on the surface itself means append/prepend semantics).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragTarget {
    Card(TaskId),
    Column(TaskStatus),
}

impl DragTarget {
    /// Resolve a raw surface id into a target.
    ///
    /// Ids matching one of the fixed column ids denote that column;
    /// everything else names a card.
    pub fn from_surface_id(id: &str) -> Self {
        match BOARD_COLUMNS.iter().find(|col| col.status.as_str() == id) {
            Some(column) => DragTarget::Column(column.status),
            None => DragTarget::Card(TaskId::from(id)),
        }
    }

    /// The card id, when this target is a card
    pub fn card(&self) -> Option<&TaskId> {
        match self {
            DragTarget::Card(id) => Some(id),
            DragTarget::Column(_) => None,
        }
    }
}

impl From<TaskId> for DragTarget {
    fn from(id: TaskId) -> Self {
        DragTarget::Card(id)
    }
}

impl From<TaskStatus> for DragTarget {
    fn from(status: TaskStatus) -> Self {
        DragTarget::Column(status)
    }
}
