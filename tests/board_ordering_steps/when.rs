//! When steps for board ordering scenarios.

use super::world::{BoardWorld, parse_list};
use eyre::eyre;
use kanban_board::board::domain::TaskId;
use rstest_bdd_macros::when;

#[when("the board is initialized")]
fn initialize_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .service
        .initialize()
        .map_err(|err| eyre!("initialize failed: {err}"))?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"a task "{content}" is added to "{list}""#)]
fn add_task(world: &mut BoardWorld, content: String, list: String) -> Result<(), eyre::Report> {
    let list_id = parse_list(&list)?;
    world.add_named(list_id, &content)
}

#[when(r#"the task "{content}" is deleted"#)]
fn delete_task(world: &mut BoardWorld, content: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    let outcome = world
        .service
        .delete_task(task_id)
        .map_err(|err| eyre!("delete failed: {err}"))?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("an unknown task is deleted")]
fn delete_unknown_task(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let outcome = world
        .service
        .delete_task(TaskId::from_raw("no-such-task"))
        .map_err(|err| eyre!("delete failed: {err}"))?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the task "{content}" is moved from "{from}" to "{to}" at {index:usize}"#)]
fn move_task(
    world: &mut BoardWorld,
    content: String,
    from: String,
    to: String,
    index: usize,
) -> Result<(), eyre::Report> {
    let task_id = world.task_id(&content)?;
    let outcome = world
        .service
        .move_task(task_id, parse_list(&from)?, parse_list(&to)?, index)
        .map_err(|err| eyre!("move failed: {err}"))?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when(r#"the "{list}" task at {old_index:usize} is reordered to {new_index:usize}"#)]
fn reorder_task(
    world: &mut BoardWorld,
    list: String,
    old_index: usize,
    new_index: usize,
) -> Result<(), eyre::Report> {
    let outcome = world
        .service
        .reorder_task(parse_list(&list)?, old_index, new_index)
        .map_err(|err| eyre!("reorder failed: {err}"))?;
    world.last_outcome = Some(outcome);
    Ok(())
}

#[when("the board is reopened from storage")]
fn reopen_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world.reopen();
    Ok(())
}
