//! When steps for task board behaviour scenarios.

use super::world::{BoardWorld, create_task_on_board, load_board_into, run_async};
use eventify_board::board::domain::{ColumnId, TaskPatch};
use rstest_bdd_macros::when;

#[when("the board is loaded")]
fn board_is_loaded(world: &mut BoardWorld) {
    load_board_into(world);
}

#[when(r#"a task "{title}" is created in column {column_id:u64}"#)]
fn task_is_created(
    world: &mut BoardWorld,
    title: String,
    column_id: u64,
) -> Result<(), eyre::Report> {
    create_task_on_board(world, &title, column_id)
}

#[when("the task is moved from column {source:u64} to column {target:u64}")]
fn task_is_moved(world: &mut BoardWorld, source: u64, target: u64) -> Result<(), eyre::Report> {
    let task_id = world
        .last_task
        .as_ref()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("scenario created no task to move"))?;
    let service = world
        .service
        .as_mut()
        .ok_or_else(|| eyre::eyre!("scenario has no loaded board"))?;
    let outcome = run_async(service.move_task(
        task_id,
        ColumnId::new(source),
        ColumnId::new(target),
    ))
    .map_err(|err| eyre::eyre!("move precondition failed: {err}"))?;
    world.last_sync_was_remote = Some(outcome.is_synced());
    Ok(())
}

#[when(r#"the task is renamed to "{title}""#)]
fn task_is_renamed(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let (task_id, column_id) = world
        .last_task
        .as_ref()
        .map(|task| (task.id(), task.column_id()))
        .ok_or_else(|| eyre::eyre!("scenario created no task to rename"))?;
    let service = world
        .service
        .as_mut()
        .ok_or_else(|| eyre::eyre!("scenario has no loaded board"))?;
    let outcome = run_async(service.update_task(
        task_id,
        column_id,
        &TaskPatch::new().with_title(title),
    ))
    .map_err(|err| eyre::eyre!("rename precondition failed: {err}"))?;
    world.last_sync_was_remote = Some(outcome.is_synced());
    world.last_task = Some(outcome.into_value());
    Ok(())
}
