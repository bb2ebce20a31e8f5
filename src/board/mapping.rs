//! Mapping between wire records and domain entities.
//!
//! All record-to-entity conversion lives here, one function per entity, so
//! the aggregate never touches wire shapes. Conversion normalises what the
//! wire cannot guarantee: tasks are ordered by their `order` field rather
//! than storage sequence, then re-stamped densely by the owning column.

use crate::board::domain::{Task, TaskBoard, TaskColumn};
use crate::board::ports::{BoardRecord, ColumnRecord, TaskRecord};

/// Builds a domain task from its wire record.
#[must_use]
pub fn task_from_record(record: TaskRecord) -> Task {
    Task::new(
        record.id,
        record.title,
        record.description,
        record.column_id,
        record.order,
        record.created_at,
    )
}

/// Builds the wire record for a domain task.
#[must_use]
pub fn task_to_record(task: &Task) -> TaskRecord {
    TaskRecord {
        id: task.id(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        column_id: task.column_id(),
        order: task.order(),
        created_at: task.created_at(),
    }
}

/// Builds a domain column from its wire record.
///
/// Tasks are sorted by their wire `order` and appended through the column,
/// which re-stamps the owning column identifier and dense 1-based positions.
#[must_use]
pub fn column_from_record(record: ColumnRecord) -> TaskColumn {
    let mut column = TaskColumn::new(record.id, record.title, record.board_id, record.order);
    let mut tasks = record.tasks;
    tasks.sort_by_key(|task| task.order);
    for task in tasks {
        column.add_task(task_from_record(task));
    }
    column
}

/// Builds the domain board aggregate from its wire record.
///
/// Columns are sorted by their wire `order` before assembly.
#[must_use]
pub fn board_from_record(record: BoardRecord) -> TaskBoard {
    let mut columns = record.columns;
    columns.sort_by_key(|column| column.order);
    TaskBoard::from_parts(
        record.id,
        record.title,
        record.description,
        columns.into_iter().map(column_from_record).collect(),
    )
}
