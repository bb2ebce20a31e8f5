//! Task entity and partial-update patch.

use super::{ColumnId, TaskId};
use chrono::{DateTime, Utc};

/// A single work item on the board.
///
/// Tasks are plain data holders: every mutation beyond column placement goes
/// through [`Task::apply`], which overwrites exactly the fields the caller
/// supplied and validates nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    column_id: ColumnId,
    order: usize,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with the given identity and placement.
    #[must_use]
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        column_id: ColumnId,
        order: usize,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            column_id,
            order,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the identifier of the owning column.
    #[must_use]
    pub const fn column_id(&self) -> ColumnId {
        self.column_id
    }

    /// Returns the 1-based position within the owning column.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Overwrites the fields supplied by `patch`, leaving the rest intact.
    ///
    /// No field is validated; a patch carrying `id`, `column_id` or `order`
    /// rewrites placement data the column otherwise maintains, so callers
    /// supply those only when rewriting placement is the intent.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(column_id) = patch.column_id {
            self.column_id = column_id;
        }
        if let Some(order) = patch.order {
            self.order = order;
        }
    }

    /// Stamps the owning column and 1-based position.
    pub(crate) const fn assign_to(&mut self, column_id: ColumnId, order: usize) {
        self.column_id = column_id;
        self.order = order;
    }
}

/// Partial update for a [`Task`].
///
/// Only the fields set on the patch are written. `created_at` is immutable
/// after creation and therefore has no patch field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    id: Option<TaskId>,
    title: Option<String>,
    description: Option<String>,
    column_id: Option<ColumnId>,
    order: Option<usize>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement identifier.
    #[must_use]
    pub const fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement owning column.
    #[must_use]
    pub const fn with_column(mut self, column_id: ColumnId) -> Self {
        self.column_id = Some(column_id);
        self
    }

    /// Sets a replacement 1-based position.
    #[must_use]
    pub const fn with_order(mut self, order: usize) -> Self {
        self.order = Some(order);
        self
    }

    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.column_id.is_none()
            && self.order.is_none()
    }
}
