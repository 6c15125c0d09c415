//! Kanban board engine
//!
//! This crate turns the flat task list into a kanban board and interprets
//! pointer-drag gestures over it. The board is a fixed sequence of columns,
//! one per task status; dragging a card reorders it within its column or
//! moves it to another one, and the controller recomputes statuses and
//! ranks so every column's ordering stays dense and zero-based.
//!
//! ## Pieces
//!
//! - [`columns`] - the fixed column set, the visible-column filter and the
//!   status classifier
//! - [`target`] - typed drop targets (a card, or a column surface)
//! - [`view`] - the per-column view model: sorted cards, id sequence and
//!   hover/insertion flags for the drag surface
//! - [`drag`] - the drag session state machine and the drop algorithm
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskdeck_kanban::{DragController, DragPayload, DragTarget};
//! use taskdeck_tasks::{Task, TaskRepository, TaskStatus};
//!
//! let mut repo = TaskRepository::new();
//! let first = repo.add_task(Task::new("Draft the plan", TaskStatus::Planned))?;
//! let second = repo.add_task(Task::new("Review the plan", TaskStatus::Planned))?;
//!
//! // Drag the first card onto the second: a downward move within a column
//! let mut controller = DragController::new();
//! controller.on_drag_start(DragPayload::new(first.clone()));
//! controller.on_drag_over(Some(DragTarget::Card(second.clone())));
//! controller.on_drag_end(&mut repo, Some(DragTarget::Card(second.clone())));
//!
//! assert_eq!(repo.get(&second)?.order, 0);
//! assert_eq!(repo.get(&first)?.order, 1);
//! # Ok::<(), taskdeck_tasks::TaskError>(())
//! ```

pub mod columns;
pub mod drag;
pub mod target;
pub mod view;

pub use columns::{column_for_status, visible_columns, Column, BOARD_COLUMNS};
pub use drag::{DragController, DragPayload, DropEffect};
pub use target::DragTarget;
pub use view::{CardProps, ColumnView};
