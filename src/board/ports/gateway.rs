//! Gateway port for remote board persistence.

use crate::board::domain::{BoardId, ColumnId, TaskId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Remote persistence contract for the task board.
///
/// Implementations perform simple request/response calls; the service layer
/// treats every failure as a soft, absorbable condition and never retries.
#[async_trait]
pub trait BoardGateway: Send + Sync {
    /// Fetches a full board with its columns and their tasks.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, a non-success status
    /// or a malformed response body.
    async fn load_board(&self, board_id: BoardId) -> GatewayResult<BoardRecord>;

    /// Creates a task record remotely.
    ///
    /// The submitted record carries no identifier; the returned record is
    /// the stored one with the server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, a non-success status
    /// or a malformed response body.
    async fn create_task(&self, task: &TaskRecord) -> GatewayResult<TaskRecord>;

    /// Replaces the task record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, a non-success status
    /// or a malformed response body.
    async fn update_task(&self, task_id: TaskId, task: &TaskRecord) -> GatewayResult<TaskRecord>;

    /// Deletes the task record with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure or a non-success
    /// status.
    async fn delete_task(&self, task_id: TaskId) -> GatewayResult<()>;

    /// Reassigns a task to `target_column_id` at the given 1-based position.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, a non-success status
    /// or a malformed response body.
    async fn move_task(
        &self,
        task_id: TaskId,
        target_column_id: ColumnId,
        order: usize,
    ) -> GatewayResult<()>;
}

/// Wire representation of a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    /// Server-assigned identifier; unassigned records omit it on the wire.
    #[serde(default, skip_serializing_if = "TaskId::is_unassigned")]
    pub id: TaskId,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Identifier of the owning column.
    pub column_id: ColumnId,
    /// 1-based position within the owning column.
    pub order: usize,
    /// Creation timestamp, RFC 3339 on the wire.
    pub created_at: DateTime<Utc>,
}

/// Wire representation of a column.
///
/// Column listings arrive without tasks; [`BoardGateway::load_board`]
/// assembles the nested form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnRecord {
    /// Column identifier.
    pub id: ColumnId,
    /// Column title.
    pub title: String,
    /// Identifier of the owning board.
    pub board_id: BoardId,
    /// Position among sibling columns.
    pub order: usize,
    /// Tasks owned by the column, ordered by their `order` field.
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
}

/// Wire representation of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardRecord {
    /// Board identifier.
    pub id: BoardId,
    /// Board title.
    pub title: String,
    /// Board description.
    pub description: String,
    /// Columns of the board with their tasks.
    #[serde(default)]
    pub columns: Vec<ColumnRecord>,
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Endpoint the request was sent to.
        endpoint: String,
    },

    /// The response body could not be decoded into the expected record.
    #[error("malformed response from {endpoint}: {detail}")]
    MalformedResponse {
        /// Endpoint the response came from.
        endpoint: String,
        /// Decoder diagnostic.
        detail: String,
    },
}

impl GatewayError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
