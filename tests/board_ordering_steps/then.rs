//! Then steps for board ordering scenarios.

use super::world::{BoardWorld, parse_list};
use eyre::eyre;
use kanban_board::board::domain::List;
use rstest_bdd_macros::then;

fn list_named<'a>(world: &'a BoardWorld, name: &str) -> Result<&'a List, eyre::Report> {
    let list_id = parse_list(name)?;
    world
        .service
        .snapshot()
        .list(list_id)
        .ok_or_else(|| eyre!("list '{name}' is missing from the board"))
}

#[then("the board has {count:usize} lists")]
fn board_has_lists(world: &mut BoardWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.service.snapshot().lists().count();
    if found != count {
        return Err(eyre!("expected {count} lists, found {found}"));
    }
    Ok(())
}

#[then("every list is empty")]
fn every_list_empty(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    if let Some(list) = world.service.snapshot().lists().find(|list| !list.is_empty()) {
        return Err(eyre!("list '{}' holds {} tasks", list.id(), list.len()));
    }
    Ok(())
}

#[then(r#"the "{list}" list is titled "{title}""#)]
fn list_titled(world: &mut BoardWorld, list: String, title: String) -> Result<(), eyre::Report> {
    let found = list_named(world, &list)?.title();
    if found != title {
        return Err(eyre!("expected title '{title}', found '{found}'"));
    }
    Ok(())
}

#[then(r#"the "{list}" list holds "{contents}""#)]
fn list_holds(world: &mut BoardWorld, list: String, contents: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = contents.split(", ").collect();
    let found: Vec<&str> = list_named(world, &list)?
        .tasks()
        .iter()
        .map(|task| task.content())
        .collect();
    if found != expected {
        return Err(eyre!("expected {expected:?} in '{list}', found {found:?}"));
    }
    Ok(())
}

#[then(r#"the "{list}" list is empty"#)]
fn list_is_empty(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let found = list_named(world, &list)?.len();
    if found != 0 {
        return Err(eyre!("expected '{list}' to be empty, found {found} tasks"));
    }
    Ok(())
}

#[then(r#"the "{list}" orders are dense"#)]
fn orders_dense(world: &mut BoardWorld, list: String) -> Result<(), eyre::Report> {
    let found = list_named(world, &list)?;
    let orders: Vec<usize> = found.tasks().iter().map(|task| task.order()).collect();
    let expected: Vec<usize> = (0..found.len()).collect();
    if orders != expected {
        return Err(eyre!("expected orders {expected:?}, found {orders:?}"));
    }
    world
        .service
        .snapshot()
        .check_invariants()
        .map_err(|err| eyre!("board invariant broken: {err}"))
}

#[then("the last change was ignored")]
fn last_change_ignored(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    match &world.last_outcome {
        Some(outcome) if !outcome.is_applied() => Ok(()),
        Some(outcome) => Err(eyre!("expected an ignored change, got {outcome:?}")),
        None => Err(eyre!("no change recorded in scenario")),
    }
}
