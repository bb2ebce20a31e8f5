//! Then steps for task board behaviour scenarios.

use super::world::BoardWorld;
use eventify_board::board::domain::{ColumnId, DEFAULT_BOARD_TITLE};
use eyre::ensure;
use rstest_bdd_macros::then;

fn loaded_board(world: &BoardWorld) -> Result<&eventify_board::board::domain::TaskBoard, eyre::Report> {
    world
        .service
        .as_ref()
        .map(|service| service.board())
        .ok_or_else(|| eyre::eyre!("scenario has no loaded board"))
}

#[then("the task count of column {column_id:u64} is {count:u64}")]
fn column_task_count(world: &BoardWorld, column_id: u64, count: u64) -> Result<(), eyre::Report> {
    let board = loaded_board(world)?;
    let column = board
        .find_column(ColumnId::new(column_id))
        .ok_or_else(|| eyre::eyre!("column {column_id} is not on the board"))?;
    let actual = u64::try_from(column.task_count())?;
    ensure!(
        actual == count,
        "expected column {column_id} to hold {count} tasks, found {actual}"
    );
    Ok(())
}

#[then("the task sits in column {column_id:u64} at position {order:u64}")]
fn task_sits_at(world: &BoardWorld, column_id: u64, order: u64) -> Result<(), eyre::Report> {
    let task_id = world
        .last_task
        .as_ref()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("scenario created no task"))?;
    let board = loaded_board(world)?;
    let (task, owning_column) = board
        .find_task_in_any_column(task_id)
        .ok_or_else(|| eyre::eyre!("task {task_id} is on no column"))?;
    ensure!(
        owning_column == ColumnId::new(column_id),
        "expected task {task_id} in column {column_id}, found it in {owning_column}"
    );
    let actual = u64::try_from(task.order())?;
    ensure!(
        actual == order,
        "expected task {task_id} at position {order}, found {actual}"
    );
    Ok(())
}

#[then("the creation was synced to the server")]
fn creation_was_synced(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.last_sync_was_remote == Some(true),
        "expected the last mutation to reach the server"
    );
    Ok(())
}

#[then("the rename was kept local only")]
fn rename_was_local_only(world: &BoardWorld) -> Result<(), eyre::Report> {
    ensure!(
        world.last_sync_was_remote == Some(false),
        "expected the last mutation to be absorbed locally"
    );
    Ok(())
}

#[then(r#"the task title on the board is "{title}""#)]
fn task_title_on_board(world: &BoardWorld, title: String) -> Result<(), eyre::Report> {
    let task_id = world
        .last_task
        .as_ref()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("scenario created no task"))?;
    let board = loaded_board(world)?;
    let (task, _) = board
        .find_task_in_any_column(task_id)
        .ok_or_else(|| eyre::eyre!("task {task_id} is on no column"))?;
    ensure!(
        task.title() == title,
        "expected task title {title:?}, found {:?}",
        task.title()
    );
    Ok(())
}

#[then("the board falls back to the default board")]
fn board_is_the_default(world: &BoardWorld) -> Result<(), eyre::Report> {
    let board = loaded_board(world)?;
    ensure!(
        board.title() == DEFAULT_BOARD_TITLE,
        "expected the default board, found {:?}",
        board.title()
    );
    ensure!(
        board.columns().len() == 3,
        "expected three default columns, found {}",
        board.columns().len()
    );
    ensure!(
        board.columns().iter().all(|column| column.task_count() == 0),
        "expected the default columns to be empty"
    );
    Ok(())
}
