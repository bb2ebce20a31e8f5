//! Board orchestration service.
//!
//! Every mutation follows the same policy: check preconditions against
//! local state, attempt the remote call, then apply the local mutation
//! regardless of the remote outcome. The UI rendering from the aggregate is
//! never blocked or left stale because the API is unreachable; a failed
//! sync is surfaced as a [`SyncOutcome::LocalOnly`] value and a warning.

use std::sync::Arc;

use log::warn;
use mockable::Clock;
use thiserror::Error;

use crate::board::domain::{
    BoardId, ColumnId, Task, TaskBoard, TaskColumn, TaskId, TaskPatch,
};
use crate::board::mapping;
use crate::board::ports::{BoardGateway, GatewayError};

/// Result type for board service operations.
pub type BoardServiceResult<T> = Result<T, BoardServiceError>;

/// Hard precondition failures.
///
/// These abort the operation before any remote call or local mutation.
/// Transport failures are deliberately not represented here; they are soft
/// and travel inside [`SyncOutcome`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardServiceError {
    /// The referenced column does not exist on the board.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The referenced task does not exist in the referenced column.
    #[error("task {task} not found in column {column}")]
    TaskNotFound {
        /// Task that was looked up.
        task: TaskId,
        /// Column the lookup ran against.
        column: ColumnId,
    },
}

/// Outcome of a mutation that always applies locally.
///
/// Both variants mean the local state transition happened; the variants
/// differ only in whether the remote board saw it too.
#[derive(Debug)]
pub enum SyncOutcome<T> {
    /// The remote call succeeded; local and remote state agree.
    Synced(T),
    /// The remote call failed; local state advanced anyway and diverges
    /// from the server until the next successful load.
    LocalOnly {
        /// The locally applied value.
        value: T,
        /// The transport failure that was absorbed.
        reason: GatewayError,
    },
}

impl<T> SyncOutcome<T> {
    /// Returns `true` when the remote call succeeded.
    #[must_use]
    pub const fn is_synced(&self) -> bool {
        matches!(self, Self::Synced(_))
    }

    /// Returns the locally applied value.
    #[must_use]
    pub const fn value(&self) -> &T {
        match self {
            Self::Synced(value) | Self::LocalOnly { value, .. } => value,
        }
    }

    /// Consumes the outcome, returning the locally applied value.
    #[must_use]
    pub fn into_value(self) -> T {
        match self {
            Self::Synced(value) | Self::LocalOnly { value, .. } => value,
        }
    }

    /// Returns the absorbed transport failure, when there was one.
    #[must_use]
    pub const fn sync_error(&self) -> Option<&GatewayError> {
        match self {
            Self::Synced(_) => None,
            Self::LocalOnly { reason, .. } => Some(reason),
        }
    }

    fn from_parts(value: T, sync_error: Option<GatewayError>) -> Self {
        match sync_error {
            None => Self::Synced(value),
            Some(reason) => Self::LocalOnly { value, reason },
        }
    }
}

/// Orchestrates a [`TaskBoard`] aggregate against a remote gateway.
///
/// The service owns the aggregate; callers mutate it exclusively through
/// the operations here, each of which awaits exactly one gateway call
/// before applying its local state transition.
pub struct BoardService<G, C>
where
    G: BoardGateway,
    C: Clock + Send + Sync,
{
    board: TaskBoard,
    gateway: Arc<G>,
    clock: Arc<C>,
}

impl<G, C> BoardService<G, C>
where
    G: BoardGateway,
    C: Clock + Send + Sync,
{
    /// Loads a board through the gateway.
    ///
    /// On any load failure the service starts from the fixed default board
    /// instead: degrading to a usable empty board is deliberate, so loading
    /// never fails.
    pub async fn load(gateway: Arc<G>, clock: Arc<C>, board_id: BoardId) -> Self {
        let board = match gateway.load_board(board_id).await {
            Ok(record) => mapping::board_from_record(record),
            Err(error) => {
                warn!(
                    "board {board_id} could not be loaded, starting from the default board: {error}"
                );
                TaskBoard::default_board()
            }
        };
        Self::with_board(board, gateway, clock)
    }

    /// Wraps an already-constructed aggregate.
    #[must_use]
    pub const fn with_board(board: TaskBoard, gateway: Arc<G>, clock: Arc<C>) -> Self {
        Self {
            board,
            gateway,
            clock,
        }
    }

    /// Returns the aggregate in its current local state.
    #[must_use]
    pub const fn board(&self) -> &TaskBoard {
        &self.board
    }

    /// Creates a task at the end of the given column.
    ///
    /// The remote create supplies the server-assigned identifier; when it
    /// fails the task is inserted anyway under a locally unique identifier
    /// derived from the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`] when the column does
    /// not exist; a remote failure alone never fails the operation.
    pub async fn create_task(
        &mut self,
        title: impl Into<String> + Send,
        description: impl Into<String> + Send,
        column_id: ColumnId,
    ) -> BoardServiceResult<SyncOutcome<Task>> {
        let order = self
            .board
            .find_column(column_id)
            .map(TaskColumn::task_count)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))?
            + 1;
        let candidate = Task::new(
            TaskId::UNASSIGNED,
            title,
            description,
            column_id,
            order,
            self.clock.utc(),
        );
        let remote = self
            .gateway
            .create_task(&mapping::task_to_record(&candidate))
            .await;
        let (task, sync_error) = match remote {
            Ok(record) => (mapping::task_from_record(record), None),
            Err(error) => {
                note_degraded("task creation", &error);
                let mut local = candidate;
                local.apply(&TaskPatch::new().with_id(self.fallback_task_id()));
                (local, Some(error))
            }
        };
        let task_id = task.id();
        let column = self
            .board
            .find_column_mut(column_id)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))?;
        column.add_task(task);
        let stored = column
            .find_task(task_id)
            .cloned()
            .ok_or(BoardServiceError::TaskNotFound {
                task: task_id,
                column: column_id,
            })?;
        Ok(SyncOutcome::from_parts(stored, sync_error))
    }

    /// Patches a task in place.
    ///
    /// The remote update carries the merged current+patch record; the local
    /// task is patched whether or not that call succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when the column or the task within it
    /// does not exist.
    pub async fn update_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        patch: &TaskPatch,
    ) -> BoardServiceResult<SyncOutcome<Task>> {
        let mut merged = self
            .board
            .find_column(column_id)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))?
            .find_task(task_id)
            .ok_or(BoardServiceError::TaskNotFound {
                task: task_id,
                column: column_id,
            })?
            .clone();
        merged.apply(patch);
        let sync_error = self
            .gateway
            .update_task(task_id, &mapping::task_to_record(&merged))
            .await
            .err();
        if let Some(error) = &sync_error {
            note_degraded("task update", error);
        }
        let updated = self
            .board
            .find_column_mut(column_id)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))?
            .update_task(task_id, patch)
            .cloned()
            .ok_or(BoardServiceError::TaskNotFound {
                task: task_id,
                column: column_id,
            })?;
        Ok(SyncOutcome::from_parts(updated, sync_error))
    }

    /// Deletes a task from the given column.
    ///
    /// Removal is idempotent: the outcome value tells whether a task was
    /// actually removed, and an absent task is a no-op success.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError::ColumnNotFound`] when the column does
    /// not exist.
    pub async fn delete_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
    ) -> BoardServiceResult<SyncOutcome<bool>> {
        if self.board.find_column(column_id).is_none() {
            return Err(BoardServiceError::ColumnNotFound(column_id));
        }
        let sync_error = self.gateway.delete_task(task_id).await.err();
        if let Some(error) = &sync_error {
            note_degraded("task deletion", error);
        }
        let removed = self
            .board
            .find_column_mut(column_id)
            .ok_or(BoardServiceError::ColumnNotFound(column_id))?
            .remove_task(task_id)
            .is_some();
        Ok(SyncOutcome::from_parts(removed, sync_error))
    }

    /// Moves a task from one column to the end of another.
    ///
    /// Moving a task onto its own column is a no-op success. Otherwise the
    /// task leaves the source column and joins the target column whatever
    /// the remote call did, so a task is never in two columns or in none.
    ///
    /// # Errors
    ///
    /// Returns [`BoardServiceError`] when either column does not exist or
    /// the task is not in the source column.
    pub async fn move_task(
        &mut self,
        task_id: TaskId,
        source_column_id: ColumnId,
        target_column_id: ColumnId,
    ) -> BoardServiceResult<SyncOutcome<()>> {
        if source_column_id == target_column_id {
            return Ok(SyncOutcome::Synced(()));
        }
        let source = self
            .board
            .find_column(source_column_id)
            .ok_or(BoardServiceError::ColumnNotFound(source_column_id))?;
        if source.find_task(task_id).is_none() {
            return Err(BoardServiceError::TaskNotFound {
                task: task_id,
                column: source_column_id,
            });
        }
        let order = self
            .board
            .find_column(target_column_id)
            .map(TaskColumn::task_count)
            .ok_or(BoardServiceError::ColumnNotFound(target_column_id))?
            + 1;
        let sync_error = self
            .gateway
            .move_task(task_id, target_column_id, order)
            .await
            .err();
        if let Some(error) = &sync_error {
            note_degraded("task move", error);
        }
        let moved = self
            .board
            .find_column_mut(source_column_id)
            .ok_or(BoardServiceError::ColumnNotFound(source_column_id))?
            .remove_task(task_id);
        if let Some(task) = moved {
            self.board
                .find_column_mut(target_column_id)
                .ok_or(BoardServiceError::ColumnNotFound(target_column_id))?
                .add_task(task);
        }
        Ok(SyncOutcome::from_parts((), sync_error))
    }

    /// Derives a locally unique identifier from the current clock time for
    /// a task the server never acknowledged.
    fn fallback_task_id(&self) -> TaskId {
        let millis = u64::try_from(self.clock.utc().timestamp_millis()).unwrap_or_default();
        let mut candidate = millis.max(1);
        while self
            .board
            .find_task_in_any_column(TaskId::new(candidate))
            .is_some()
        {
            candidate += 1;
        }
        TaskId::new(candidate)
    }
}

/// Logs a transport failure that was absorbed into a local-only outcome.
fn note_degraded(operation: &str, error: &GatewayError) {
    warn!("{operation} did not reach the remote board, keeping the local change: {error}");
}
