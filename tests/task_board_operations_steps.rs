//! Behaviour tests for task board mutations and degraded-mode fallbacks.

mod task_board_steps;

use rstest_bdd_macros::scenario;
use task_board_steps::world::{BoardWorld, world};

#[scenario(
    path = "tests/features/task_board_operations.feature",
    name = "Create a task in a column"
)]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_in_a_column(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board_operations.feature",
    name = "Move a task between columns"
)]
#[tokio::test(flavor = "multi_thread")]
async fn move_task_between_columns(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board_operations.feature",
    name = "A lost connection does not block a rename"
)]
#[tokio::test(flavor = "multi_thread")]
async fn lost_connection_does_not_block_a_rename(world: BoardWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_board_operations.feature",
    name = "An unreachable server yields the default board"
)]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_yields_the_default_board(world: BoardWorld) {
    let _ = world;
}
