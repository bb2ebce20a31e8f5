//! Given steps for task board behaviour scenarios.

use super::world::{BoardWorld, create_task_on_board, load_board_into};
use rstest_bdd_macros::given;

#[given(r#"a remote board with columns "To do" and "In progress""#)]
fn remote_board(world: &mut BoardWorld) {
    world.gateway.insert_board(BoardWorld::sprint_board_record());
}

#[given("a loaded board")]
fn loaded_board(world: &mut BoardWorld) {
    load_board_into(world);
}

#[given(r#"a loaded board with a task "{title}" in column {column_id:u64}"#)]
fn loaded_board_with_task(
    world: &mut BoardWorld,
    title: String,
    column_id: u64,
) -> Result<(), eyre::Report> {
    load_board_into(world);
    create_task_on_board(world, &title, column_id)
}

#[given("the connection to the server is lost")]
fn connection_lost(world: &mut BoardWorld) {
    world.gateway.set_failing(true);
}
