//! Shared world state for task board behaviour scenarios.

use std::sync::Arc;

use eventify_board::board::adapters::memory::InMemoryBoardGateway;
use eventify_board::board::domain::{BoardId, ColumnId, Task};
use eventify_board::board::ports::{BoardRecord, ColumnRecord};
use eventify_board::board::services::BoardService;
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryBoardGateway, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    pub gateway: Arc<InMemoryBoardGateway>,
    pub service: Option<TestBoardService>,
    pub last_task: Option<Task>,
    pub last_sync_was_remote: Option<bool>,
}

impl BoardWorld {
    /// Creates a world with an empty gateway and no loaded board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gateway: Arc::new(InMemoryBoardGateway::new()),
            service: None,
            last_task: None,
            last_sync_was_remote: None,
        }
    }

    /// Returns the board record the scenarios seed the gateway with.
    #[must_use]
    pub fn sprint_board_record() -> BoardRecord {
        let board_id = BoardId::new(1);
        BoardRecord {
            id: board_id,
            title: "Sprint board".to_owned(),
            description: "Tasks for the current sprint".to_owned(),
            columns: vec![
                ColumnRecord {
                    id: ColumnId::new(1),
                    title: "To do".to_owned(),
                    board_id,
                    order: 1,
                    tasks: Vec::new(),
                },
                ColumnRecord {
                    id: ColumnId::new(2),
                    title: "In progress".to_owned(),
                    board_id,
                    order: 2,
                    tasks: Vec::new(),
                },
            ],
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Loads board 1 through the world's gateway into the world.
pub fn load_board_into(world: &mut BoardWorld) {
    world.service = Some(run_async(BoardService::load(
        Arc::clone(&world.gateway),
        Arc::new(DefaultClock),
        BoardId::new(1),
    )));
}

/// Creates a task through the loaded board service, recording the outcome.
pub fn create_task_on_board(
    world: &mut BoardWorld,
    title: &str,
    column_id: u64,
) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_mut()
        .ok_or_else(|| eyre::eyre!("scenario has no loaded board"))?;
    let outcome = run_async(service.create_task(
        title,
        "created by scenario",
        ColumnId::new(column_id),
    ))
    .map_err(|err| eyre::eyre!("task creation precondition failed: {err}"))?;
    world.last_sync_was_remote = Some(outcome.is_synced());
    world.last_task = Some(outcome.into_value());
    Ok(())
}
