//! Drag session controller
//!
//! A small state machine with two states. Idle: no active card. Dragging:
//! an active card and possibly a hover target. Pointer events arrive
//! serially from the drag surface; each handler runs to completion before
//! the next event, so no overlapping sessions are representable.
//!
//! The drop algorithm on drag-end is the only place that mutates the
//! repository, and it always hands over complete per-status id lists so
//! ranks are recomputed from scratch. Every resolution failure (no target,
//! vanished task, vanished drop target) is a silent abort that leaves the
//! repository untouched: a gesture ending over nothing is an expected
//! outcome, not a fault.

use crate::columns::column_for_status;
use crate::target::DragTarget;
use taskdeck_tasks::{Task, TaskId, TaskRepository, TaskStatus};
use tracing::{debug, warn};

/// Payload attached to a drag-start event by the drag surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    /// The card being picked up
    pub task: TaskId,
    /// The column the surface believes the card came from. Advisory only:
    /// the drop algorithm trusts the repository lookup, and logs when the
    /// two disagree.
    pub source_column: Option<TaskStatus>,
}

impl DragPayload {
    /// Create a payload for the given card
    pub fn new(task: impl Into<TaskId>) -> Self {
        Self {
            task: task.into(),
            source_column: None,
        }
    }

    /// Attach the surface's column hint
    pub fn with_source_column(mut self, column: TaskStatus) -> Self {
        self.source_column = Some(column);
        self
    }
}

/// What a completed gesture did to the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The gesture ended without a usable target; nothing was written
    Aborted,
    /// Ranks were rewritten within one column
    Reordered { column: TaskStatus },
    /// The card changed columns; both partitions were rewritten
    Transferred { from: TaskStatus, to: TaskStatus },
}

/// Tracks one in-flight drag gesture and applies the drop.
///
/// The three handlers are the only writers of the session state, and
/// `on_drag_end` is the only path from a gesture into the repository.
#[derive(Debug, Default)]
pub struct DragController {
    active: Option<TaskId>,
    over: Option<DragTarget>,
    source_hint: Option<TaskStatus>,
}

impl DragController {
    /// Create an idle controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the card being dragged, `None` when idle
    pub fn active_id(&self) -> Option<&TaskId> {
        self.active.as_ref()
    }

    /// The current hover target, if any
    pub fn over_target(&self) -> Option<&DragTarget> {
        self.over.as_ref()
    }

    /// Whether a gesture is in flight
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The dragged task, resolved against the repository at call time.
    /// `None` when idle or when the task has since been deleted.
    pub fn active_task<'a>(&self, repo: &'a TaskRepository) -> Option<&'a Task> {
        self.active.as_ref().and_then(|id| repo.find(id))
    }

    /// drag-start: Idle → Dragging
    pub fn on_drag_start(&mut self, payload: DragPayload) {
        debug!(task = %payload.task, "drag started");
        self.active = Some(payload.task);
        self.over = None;
        self.source_hint = payload.source_column;
    }

    /// drag-over: Dragging → Dragging.
    ///
    /// Tracks the hover target, clearing it when the pointer is over
    /// nothing or over the dragged card itself. No-op while idle.
    pub fn on_drag_over(&mut self, target: Option<DragTarget>) {
        let Some(active) = &self.active else {
            return;
        };
        self.over = match target {
            Some(DragTarget::Card(id)) if &id == active => None,
            Some(target) => Some(target),
            None => None,
        };
    }

    /// drag-end: Dragging → Idle, unconditionally.
    ///
    /// Resolves the drop and applies the minimal set of status/rank
    /// mutations:
    ///
    /// - dropped on a card of the same column: a single-element list move,
    ///   then one rank rewrite for that partition
    /// - dropped on another column (a card there, or the column surface
    ///   itself): status change, rank rewrite of the enlarged target
    ///   partition, rank rewrite of the shrunk source partition
    ///
    /// Status side effects (completion stamp, backlog priority reset) are
    /// the repository's own rules, triggered by the status change.
    pub fn on_drag_end(
        &mut self,
        repo: &mut TaskRepository,
        target: Option<DragTarget>,
    ) -> DropEffect {
        // The session resets no matter how the drop resolves
        let active = self.active.take();
        let hint = self.source_hint.take();
        self.over = None;

        let Some(active_id) = active else {
            return DropEffect::Aborted;
        };
        let Some(target) = target else {
            debug!(task = %active_id, "drag ended over nothing");
            return DropEffect::Aborted;
        };
        let Some(active_task) = repo.find(&active_id) else {
            debug!(task = %active_id, "dragged card no longer exists");
            return DropEffect::Aborted;
        };

        let source_status = column_for_status(active_task.status).status;
        if let Some(hint) = hint {
            if hint != source_status {
                warn!(
                    task = %active_id,
                    hint = %hint,
                    actual = %source_status,
                    "drag payload column hint disagrees with the repository"
                );
            }
        }

        // A card target pins the insertion point; a column target means
        // append/prepend semantics
        let (target_status, over_card) = match target {
            DragTarget::Column(status) => (status, None),
            DragTarget::Card(over_id) => {
                let Some(over_task) = repo.find(&over_id) else {
                    debug!(task = %active_id, over = %over_id, "drop target no longer exists");
                    return DropEffect::Aborted;
                };
                (column_for_status(over_task.status).status, Some(over_id))
            }
        };

        match over_card {
            Some(over_id) if source_status == target_status => {
                self.reorder_within(repo, source_status, &active_id, &over_id)
            }
            over_card => self.transfer(
                repo,
                source_status,
                target_status,
                &active_id,
                over_card.as_ref(),
            ),
        }
    }

    /// Same-column drop: move the card from its position to the hovered
    /// card's position in the ordered id list, then rewrite the partition.
    fn reorder_within(
        &self,
        repo: &mut TaskRepository,
        status: TaskStatus,
        active_id: &TaskId,
        over_id: &TaskId,
    ) -> DropEffect {
        let mut ids = repo.ordered_ids(status);
        let Some(from) = ids.iter().position(|id| id == active_id) else {
            return DropEffect::Aborted;
        };
        let Some(to) = ids.iter().position(|id| id == over_id) else {
            return DropEffect::Aborted;
        };

        let moved = ids.remove(from);
        ids.insert(to, moved);
        repo.reorder_tasks(status, &ids);

        debug!(task = %active_id, column = %status, from, to, "card reordered");
        DropEffect::Reordered { column: status }
    }

    /// Cross-column drop (or a drop on a column surface): insert the card
    /// into the target partition's id list, change its status, and rewrite
    /// both touched partitions.
    fn transfer(
        &self,
        repo: &mut TaskRepository,
        source_status: TaskStatus,
        target_status: TaskStatus,
        active_id: &TaskId,
        over_id: Option<&TaskId>,
    ) -> DropEffect {
        let mut target_ids: Vec<TaskId> = repo
            .ordered_ids(target_status)
            .into_iter()
            .filter(|id| id != active_id)
            .collect();

        // Dropping on the column surface or into an empty column prepends;
        // dropping on a card takes that card's position
        let insert_at = match over_id {
            Some(over_id) => target_ids
                .iter()
                .position(|id| id == over_id)
                .unwrap_or(0),
            None => 0,
        };
        target_ids.insert(insert_at, active_id.clone());

        let source_ids: Vec<TaskId> = repo
            .ordered_ids(source_status)
            .into_iter()
            .filter(|id| id != active_id)
            .collect();

        if let Err(err) = repo.set_status(active_id, target_status) {
            warn!(task = %active_id, %err, "status change failed, dropping the gesture");
            return DropEffect::Aborted;
        }
        repo.reorder_tasks(target_status, &target_ids);

        if source_status == target_status {
            // A drop on the card's own column surface: the target rewrite
            // above already covered the whole partition
            debug!(task = %active_id, column = %target_status, "card moved to column front");
            return DropEffect::Reordered {
                column: target_status,
            };
        }

        if !source_ids.is_empty() {
            repo.reorder_tasks(source_status, &source_ids);
        }

        debug!(
            task = %active_id,
            from = %source_status,
            to = %target_status,
            at = insert_at,
            "card transferred"
        );
        DropEffect::Transferred {
            from: source_status,
            to: target_status,
        }
    }
}
