//! Drag events resolved into intents and applied through the service.

use super::helpers::{MemoryBoardService, contents, seed, service};
use kanban_board::board::{
    domain::ListId,
    gesture::{DragPhase, DropTarget, resolve_drop},
};
use rstest::rstest;

#[rstest]
fn hover_then_release_lands_task_before_hovered_card(mut service: MemoryBoardService) {
    let todo = seed(&mut service, ListId::Defined, &["drag me", "stay"]);
    let doing = seed(&mut service, ListId::InProgress, &["first", "second"]);
    let active = todo.first().cloned().expect("active");
    let over = doing.get(1).cloned().expect("over");

    let hover = resolve_drop(
        service.snapshot(),
        &active,
        &DropTarget::task(over.clone()),
        DragPhase::Over,
    )
    .expect("hover moves across lists");
    service.apply(hover).expect("apply hover");
    let release = resolve_drop(
        service.snapshot(),
        &active,
        &DropTarget::task(over),
        DragPhase::End,
    )
    .expect("release settles the order");
    service.apply(release).expect("apply release");

    assert_eq!(
        contents(service.snapshot(), ListId::InProgress),
        vec!["first", "second", "drag me"]
    );
    assert_eq!(contents(service.snapshot(), ListId::Defined), vec!["stay"]);
    assert_eq!(service.snapshot().check_invariants(), Ok(()));
}

#[rstest]
fn drop_on_empty_list_appends(mut service: MemoryBoardService) {
    let ids = seed(&mut service, ListId::Inbox, &["only"]);
    let active = ids.first().cloned().expect("active");

    let intent = resolve_drop(
        service.snapshot(),
        &active,
        &DropTarget::from_raw("cancelled"),
        DragPhase::End,
    )
    .expect("drop resolves");
    service.apply(intent).expect("apply");

    assert_eq!(contents(service.snapshot(), ListId::Cancelled), vec!["only"]);
    assert!(contents(service.snapshot(), ListId::Inbox).is_empty());
}
