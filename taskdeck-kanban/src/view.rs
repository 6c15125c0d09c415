//! Column view-model builder
//!
//! For one column and the current drag session, produces everything the
//! rendering layer needs: the sorted card sequence, the stable id list used
//! for position tracking, and the per-card hover/insertion flags.

use crate::columns::{column_for_status, Column};
use crate::target::DragTarget;
use serde::Serialize;
use taskdeck_tasks::{Task, TaskId, TaskStatus};

/// Per-card flags consumed by the drag surface
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CardProps {
    /// The pointer is hovering this exact card (not the column surface)
    pub is_over: bool,
    /// The drop indicator renders before this card rather than after it
    pub insert_before: bool,
}

/// The render model of one column for the current frame
#[derive(Debug)]
pub struct ColumnView<'a> {
    column: &'static Column,
    sorted: Vec<&'a Task>,
    active: Option<TaskId>,
    over: Option<DragTarget>,
    active_index: Option<usize>,
}

impl<'a> ColumnView<'a> {
    /// Build the view for one column.
    ///
    /// `tasks` may be the whole task list; only tasks the classifier puts in
    /// this column are kept. The sort by rank is stable, so ranks that
    /// transiently collide keep their incoming relative position.
    pub fn build<I>(
        status: TaskStatus,
        tasks: I,
        active: Option<&TaskId>,
        over: Option<&DragTarget>,
    ) -> Self
    where
        I: IntoIterator<Item = &'a Task>,
    {
        let mut sorted: Vec<&Task> = tasks
            .into_iter()
            .filter(|task| column_for_status(task.status).status == status)
            .collect();
        sorted.sort_by_key(|task| task.order);

        let active_index =
            active.and_then(|active_id| sorted.iter().position(|task| &task.id == active_id));

        Self {
            column: column_for_status(status),
            sorted,
            active: active.cloned(),
            over: over.cloned(),
            active_index,
        }
    }

    /// The column this view renders
    pub fn column(&self) -> &'static Column {
        self.column
    }

    /// Cards sorted ascending by rank
    pub fn sorted_tasks(&self) -> &[&'a Task] {
        &self.sorted
    }

    /// The id sequence the drag surface tracks positions with
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.sorted.iter().map(|task| task.id.clone()).collect()
    }

    /// Number of cards in the column
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    /// True when the column has no cards
    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Hover/insertion flags for the card at `index` in the sorted sequence.
    ///
    /// `insert_before` is set when the hovered card should show the drop
    /// indicator above itself: always for a card arriving from another
    /// column, and for downward moves within this one. Upward moves insert
    /// after the hovered card instead.
    pub fn card_props(&self, index: usize) -> CardProps {
        let Some(task) = self.sorted.get(index) else {
            return CardProps::default();
        };

        let is_over = matches!(&self.over, Some(DragTarget::Card(id)) if id == &task.id);
        let is_active = self.active.as_ref() == Some(&task.id);
        let insert_before = is_over
            && !is_active
            && match self.active_index {
                None => true,
                Some(active_index) => active_index < index,
            };

        CardProps {
            is_over,
            insert_before,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_tasks() -> Vec<Task> {
        let mut tasks = vec![
            Task::new("x", TaskStatus::Planned),
            Task::new("y", TaskStatus::Planned),
            Task::new("z", TaskStatus::Planned),
            Task::new("elsewhere", TaskStatus::Backlog),
        ];
        tasks[0].order = 0;
        tasks[1].order = 1;
        tasks[2].order = 2;
        tasks
    }

    #[test]
    fn test_build_filters_and_sorts() {
        let mut tasks = column_tasks();
        // Scramble stored order; ranks decide the view
        tasks[0].order = 2;
        tasks[2].order = 0;

        let view = ColumnView::build(TaskStatus::Planned, tasks.iter(), None, None);
        assert_eq!(view.len(), 3);
        assert_eq!(view.sorted_tasks()[0].title, "z");
        assert_eq!(view.sorted_tasks()[2].title, "x");
        assert_eq!(view.task_ids().len(), 3);
    }

    #[test]
    fn test_stable_sort_on_rank_collision() {
        let mut tasks = column_tasks();
        tasks[0].order = 0;
        tasks[1].order = 0;
        tasks[2].order = 0;

        let view = ColumnView::build(TaskStatus::Planned, tasks.iter(), None, None);
        assert_eq!(view.sorted_tasks()[0].title, "x");
        assert_eq!(view.sorted_tasks()[1].title, "y");
        assert_eq!(view.sorted_tasks()[2].title, "z");
    }

    #[test]
    fn test_is_over_only_for_hovered_card() {
        let tasks = column_tasks();
        let active = tasks[0].id.clone();
        let over = DragTarget::Card(tasks[2].id.clone());

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        assert!(!view.card_props(0).is_over);
        assert!(!view.card_props(1).is_over);
        assert!(view.card_props(2).is_over);
    }

    #[test]
    fn test_hovering_column_surface_marks_no_card() {
        let tasks = column_tasks();
        let active = tasks[0].id.clone();
        let over = DragTarget::Column(TaskStatus::Planned);

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        for index in 0..view.len() {
            assert_eq!(view.card_props(index), CardProps::default());
        }
    }

    #[test]
    fn test_downward_drag_inserts_before() {
        let tasks = column_tasks();
        // Dragging x (index 0) over z (index 2)
        let active = tasks[0].id.clone();
        let over = DragTarget::Card(tasks[2].id.clone());

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        assert!(view.card_props(2).insert_before);
    }

    #[test]
    fn test_upward_drag_inserts_after() {
        let tasks = column_tasks();
        // Dragging z (index 2) over x (index 0)
        let active = tasks[2].id.clone();
        let over = DragTarget::Card(tasks[0].id.clone());

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        let props = view.card_props(0);
        assert!(props.is_over);
        assert!(!props.insert_before);
    }

    #[test]
    fn test_cross_column_drag_always_inserts_before() {
        let tasks = column_tasks();
        // The active card lives in backlog, hovering the last planned card
        let active = tasks[3].id.clone();
        let over = DragTarget::Card(tasks[2].id.clone());

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        assert!(view.card_props(2).insert_before);
    }

    #[test]
    fn test_active_card_never_shows_indicator() {
        let tasks = column_tasks();
        let active = tasks[1].id.clone();
        // Stale hover over the active card itself
        let over = DragTarget::Card(tasks[1].id.clone());

        let view =
            ColumnView::build(TaskStatus::Planned, tasks.iter(), Some(&active), Some(&over));
        let props = view.card_props(1);
        assert!(props.is_over);
        assert!(!props.insert_before);
    }

    #[test]
    fn test_out_of_range_index_is_inert() {
        let tasks = column_tasks();
        let view = ColumnView::build(TaskStatus::Planned, tasks.iter(), None, None);
        assert_eq!(view.card_props(99), CardProps::default());
    }
}
