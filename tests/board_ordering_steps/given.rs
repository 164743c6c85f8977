//! Given steps for board ordering scenarios.

use super::world::{BoardWorld, parse_list};
use eyre::eyre;
use rstest_bdd_macros::given;

#[given("an empty board")]
fn empty_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if !world.service.snapshot().is_empty() {
        return Err(eyre!("expected a fresh board"));
    }
    Ok(())
}

#[given("an initialized board")]
fn initialized_board(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    world
        .service
        .initialize()
        .map_err(|err| eyre!("initialize failed: {err}"))?;
    Ok(())
}

#[given(r#"a task "{content}" in "{list}""#)]
fn task_in_list(world: &mut BoardWorld, content: String, list: String) -> Result<(), eyre::Report> {
    let list_id = parse_list(&list)?;
    world.add_named(list_id, &content)
}
