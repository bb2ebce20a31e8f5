//! HTTP gateway speaking the json-server REST dialect of the Eventify API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::session::ApiSession;
use crate::board::domain::{BoardId, ColumnId, TaskId};
use crate::board::ports::{BoardGateway, BoardRecord, ColumnRecord, GatewayError, GatewayResult, TaskRecord};

/// REST gateway over `reqwest`.
///
/// Boards, columns and tasks are flat collections on the server; this
/// adapter composes them into the nested shapes the port promises. The
/// server has no dedicated move endpoint, so a move is composed here as a
/// fetch followed by a full record replacement.
#[derive(Debug, Clone)]
pub struct HttpBoardGateway {
    client: Client,
    session: ApiSession,
}

impl HttpBoardGateway {
    /// Creates a gateway with a fresh HTTP client.
    #[must_use]
    pub fn new(session: ApiSession) -> Self {
        Self::with_client(Client::new(), session)
    }

    /// Creates a gateway reusing an existing HTTP client.
    #[must_use]
    pub const fn with_client(client: Client, session: ApiSession) -> Self {
        Self { client, session }
    }

    /// Returns the session the gateway calls with.
    #[must_use]
    pub const fn session(&self) -> &ApiSession {
        &self.session
    }

    fn ensure_success(endpoint: &str, response: Response) -> GatewayResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(GatewayError::UnexpectedStatus {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
            })
        }
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> GatewayResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|err| GatewayError::MalformedResponse {
                endpoint: endpoint.to_owned(),
                detail: err.to_string(),
            })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> GatewayResult<T> {
        let endpoint = self.session.endpoint(path);
        let response = self
            .session
            .authorize(self.client.get(&endpoint))
            .send()
            .await
            .map_err(GatewayError::transport)?;
        let checked = Self::ensure_success(&endpoint, response)?;
        Self::decode(&endpoint, checked).await
    }

    async fn fetch_task(&self, task_id: TaskId) -> GatewayResult<TaskRecord> {
        self.get_json(&format!("tasks/{task_id}")).await
    }
}

#[async_trait]
impl BoardGateway for HttpBoardGateway {
    async fn load_board(&self, board_id: BoardId) -> GatewayResult<BoardRecord> {
        let mut board: BoardRecord = self.get_json(&format!("boards/{board_id}")).await?;
        let mut columns: Vec<ColumnRecord> = self
            .get_json(&format!("columns?boardId={board_id}&_sort=order&_order=asc"))
            .await?;
        for column in &mut columns {
            column.tasks = self
                .get_json(&format!(
                    "tasks?columnId={}&_sort=order&_order=asc",
                    column.id
                ))
                .await?;
        }
        board.columns = columns;
        Ok(board)
    }

    async fn create_task(&self, task: &TaskRecord) -> GatewayResult<TaskRecord> {
        let endpoint = self.session.endpoint("tasks");
        let response = self
            .session
            .authorize(self.client.post(&endpoint))
            .json(task)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        let checked = Self::ensure_success(&endpoint, response)?;
        Self::decode(&endpoint, checked).await
    }

    async fn update_task(&self, task_id: TaskId, task: &TaskRecord) -> GatewayResult<TaskRecord> {
        let endpoint = self.session.endpoint(&format!("tasks/{task_id}"));
        let response = self
            .session
            .authorize(self.client.put(&endpoint))
            .json(task)
            .send()
            .await
            .map_err(GatewayError::transport)?;
        let checked = Self::ensure_success(&endpoint, response)?;
        Self::decode(&endpoint, checked).await
    }

    async fn delete_task(&self, task_id: TaskId) -> GatewayResult<()> {
        let endpoint = self.session.endpoint(&format!("tasks/{task_id}"));
        let response = self
            .session
            .authorize(self.client.delete(&endpoint))
            .send()
            .await
            .map_err(GatewayError::transport)?;
        Self::ensure_success(&endpoint, response)?;
        Ok(())
    }

    async fn move_task(
        &self,
        task_id: TaskId,
        target_column_id: ColumnId,
        order: usize,
    ) -> GatewayResult<()> {
        let current = self.fetch_task(task_id).await?;
        let moved = TaskRecord {
            column_id: target_column_id,
            order,
            ..current
        };
        self.update_task(task_id, &moved).await?;
        Ok(())
    }
}
