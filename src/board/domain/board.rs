//! Board aggregate root.

use super::{BoardId, ColumnId, Task, TaskColumn, TaskId};

/// Title of the board returned when the remote API cannot be reached.
pub const DEFAULT_BOARD_TITLE: &str = "Default board";

/// The root aggregate: an ordered set of columns, unique by identifier.
///
/// The aggregate holds local state only; loading and synchronisation are the
/// responsibility of the service layer, which mutates the board in place
/// through the column operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskBoard {
    id: BoardId,
    title: String,
    description: String,
    columns: Vec<TaskColumn>,
}

impl TaskBoard {
    /// Assembles a board from already-constructed columns.
    #[must_use]
    pub fn from_parts(
        id: BoardId,
        title: impl Into<String>,
        description: impl Into<String>,
        columns: Vec<TaskColumn>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            columns,
        }
    }

    /// Returns the fixed fallback board used when loading fails: three empty
    /// columns named "To do", "In progress" and "Done".
    #[must_use]
    pub fn default_board() -> Self {
        let id = BoardId::new(0);
        Self::from_parts(
            id,
            DEFAULT_BOARD_TITLE,
            "Local board used while the remote API is unreachable",
            vec![
                TaskColumn::new(ColumnId::new(1), "To do", id, 1),
                TaskColumn::new(ColumnId::new(2), "In progress", id, 2),
                TaskColumn::new(ColumnId::new(3), "Done", id, 3),
            ],
        )
    }

    /// Returns the board identifier.
    #[must_use]
    pub const fn id(&self) -> BoardId {
        self.id
    }

    /// Returns the board title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the board description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the columns in their stored sequence.
    #[must_use]
    pub fn columns(&self) -> &[TaskColumn] {
        &self.columns
    }

    /// Returns the column with the given identifier, if present.
    #[must_use]
    pub fn find_column(&self, column_id: ColumnId) -> Option<&TaskColumn> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Returns mutable access to the column with the given identifier.
    pub fn find_column_mut(&mut self, column_id: ColumnId) -> Option<&mut TaskColumn> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    /// Scans every column for the given task.
    ///
    /// Returns the task together with the identifier of the column holding
    /// it, or `None` when no column contains the task.
    #[must_use]
    pub fn find_task_in_any_column(&self, task_id: TaskId) -> Option<(&Task, ColumnId)> {
        self.columns.iter().find_map(|column| {
            column
                .find_task(task_id)
                .map(|task| (task, column.id()))
        })
    }
}
