//! In-memory gateway for board service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::{BoardId, ColumnId, TaskId};
use crate::board::ports::{BoardGateway, BoardRecord, GatewayError, GatewayResult, TaskRecord};

/// Thread-safe in-memory board gateway.
///
/// Stores nested board records and assigns task identifiers the way the
/// real server does. Transport failures can be injected with
/// [`Self::set_failing`] to exercise the degraded local-only paths.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBoardGateway {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    boards: HashMap<BoardId, BoardRecord>,
    next_task_id: u64,
    failing: bool,
}

impl InMemoryBoardGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway seeded with one board.
    #[must_use]
    pub fn with_board(board: BoardRecord) -> Self {
        let gateway = Self::new();
        gateway.insert_board(board);
        gateway
    }

    /// Stores a board record, replacing any existing record with its id.
    pub fn insert_board(&self, board: BoardRecord) {
        if let Ok(mut state) = self.state.write() {
            let highest_task_id = board
                .columns
                .iter()
                .flat_map(|column| column.tasks.iter())
                .map(|task| task.id.value())
                .max()
                .unwrap_or(0);
            state.next_task_id = state.next_task_id.max(highest_task_id + 1);
            state.boards.insert(board.id, board);
        }
    }

    /// Makes every subsequent call fail with a transport error until reset.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut state) = self.state.write() {
            state.failing = failing;
        }
    }

    /// Returns the stored board record, if present.
    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<BoardRecord> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.boards.get(&board_id).cloned())
    }

    /// Returns the stored task record, if present on any board.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<TaskRecord> {
        let state = self.state.read().ok()?;
        state
            .boards
            .values()
            .flat_map(|board| board.columns.iter())
            .flat_map(|column| column.tasks.iter())
            .find(|task| task.id == task_id)
            .cloned()
    }

    fn injected_failure() -> GatewayError {
        GatewayError::transport(std::io::Error::other("injected transport failure"))
    }

    fn lock_error(err: impl std::fmt::Display) -> GatewayError {
        GatewayError::transport(std::io::Error::other(err.to_string()))
    }
}

#[async_trait]
impl BoardGateway for InMemoryBoardGateway {
    async fn load_board(&self, board_id: BoardId) -> GatewayResult<BoardRecord> {
        let state = self.state.read().map_err(Self::lock_error)?;
        if state.failing {
            return Err(Self::injected_failure());
        }
        state
            .boards
            .get(&board_id)
            .cloned()
            .ok_or_else(|| GatewayError::UnexpectedStatus {
                status: 404,
                endpoint: format!("boards/{board_id}"),
            })
    }

    async fn create_task(&self, task: &TaskRecord) -> GatewayResult<TaskRecord> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if state.failing {
            return Err(Self::injected_failure());
        }
        let next_id = state.next_task_id.max(1);
        let assigned = TaskRecord {
            id: TaskId::new(next_id),
            ..task.clone()
        };
        state.next_task_id = next_id + 1;
        let column_id = assigned.column_id;
        let stored = assigned.clone();
        let column = state
            .boards
            .values_mut()
            .flat_map(|board| board.columns.iter_mut())
            .find(|column| column.id == column_id)
            .ok_or_else(|| GatewayError::UnexpectedStatus {
                status: 404,
                endpoint: format!("columns/{column_id}"),
            })?;
        column.tasks.push(stored);
        Ok(assigned)
    }

    async fn update_task(&self, task_id: TaskId, task: &TaskRecord) -> GatewayResult<TaskRecord> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if state.failing {
            return Err(Self::injected_failure());
        }
        let stored = state
            .boards
            .values_mut()
            .flat_map(|board| board.columns.iter_mut())
            .flat_map(|column| column.tasks.iter_mut())
            .find(|stored| stored.id == task_id)
            .ok_or_else(|| GatewayError::UnexpectedStatus {
                status: 404,
                endpoint: format!("tasks/{task_id}"),
            })?;
        *stored = TaskRecord {
            id: task_id,
            ..task.clone()
        };
        Ok(stored.clone())
    }

    async fn delete_task(&self, task_id: TaskId) -> GatewayResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if state.failing {
            return Err(Self::injected_failure());
        }
        for board in state.boards.values_mut() {
            for column in &mut board.columns {
                column.tasks.retain(|task| task.id != task_id);
            }
        }
        Ok(())
    }

    async fn move_task(
        &self,
        task_id: TaskId,
        target_column_id: ColumnId,
        order: usize,
    ) -> GatewayResult<()> {
        let mut state = self.state.write().map_err(Self::lock_error)?;
        if state.failing {
            return Err(Self::injected_failure());
        }
        let moved = state
            .boards
            .values_mut()
            .flat_map(|board| board.columns.iter_mut())
            .find_map(|column| {
                let index = column.tasks.iter().position(|task| task.id == task_id)?;
                Some(column.tasks.remove(index))
            })
            .ok_or_else(|| GatewayError::UnexpectedStatus {
                status: 404,
                endpoint: format!("tasks/{task_id}"),
            })?;
        let target = state
            .boards
            .values_mut()
            .flat_map(|board| board.columns.iter_mut())
            .find(|column| column.id == target_column_id)
            .ok_or_else(|| GatewayError::UnexpectedStatus {
                status: 404,
                endpoint: format!("columns/{target_column_id}"),
            })?;
        target.tasks.push(TaskRecord {
            column_id: target_column_id,
            order,
            ..moved
        });
        Ok(())
    }
}
