//! Board service behaviour over the in-memory store.

use super::helpers::{MemoryBoardService, contents, open_service, seed, service, store};
use kanban_board::board::{
    adapters::InMemoryKeyValueStore,
    domain::{ListId, TaskId},
    engine::{IgnoreReason, Outcome},
};
use rstest::rstest;

#[rstest]
fn initialize_creates_catalog_lists(service: MemoryBoardService) {
    let titles: Vec<&str> = service.snapshot().lists().map(|list| list.title()).collect();

    assert_eq!(
        titles,
        vec![
            "Inbox",
            "Defined",
            "Backlog",
            "Blocked",
            "In Progress",
            "Validating",
            "Done",
            "Cancelled",
        ]
    );
    assert_eq!(titles, ListId::ALL.map(ListId::title).to_vec());
    assert_eq!(service.snapshot().task_count(), 0);
}

#[rstest]
fn update_task_rewrites_content_only(mut service: MemoryBoardService) {
    let ids = seed(&mut service, ListId::Defined, &["draft", "other"]);
    let first = ids.first().cloned().expect("first id");
    let created = service
        .snapshot()
        .find_task(&first)
        .map(|task| task.created_at())
        .expect("task exists");

    let outcome = service.update_task(first.clone(), "final").expect("update");

    let task = service.snapshot().find_task(&first).expect("task exists");
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(task.content(), "final");
    assert_eq!(task.order(), 0);
    assert_eq!(task.created_at(), created);
    assert!(task.updated_at() >= created);
    assert_eq!(contents(service.snapshot(), ListId::Defined), vec!["final", "other"]);
}

#[rstest]
fn move_with_stale_source_is_ignored(mut service: MemoryBoardService) {
    let ids = seed(&mut service, ListId::Inbox, &["a"]);
    let task_id = ids.first().cloned().expect("id");
    let before = service.snapshot().clone();

    let outcome = service
        .move_task(task_id.clone(), ListId::Backlog, ListId::Done, 0)
        .expect("move");

    assert_eq!(
        outcome,
        Outcome::Ignored(IgnoreReason::TaskNotInList {
            task_id,
            list_id: ListId::Backlog,
        })
    );
    assert_eq!(service.snapshot(), &before);
}

#[rstest]
fn reorder_out_of_range_is_ignored(mut service: MemoryBoardService) {
    seed(&mut service, ListId::Validating, &["a", "b"]);

    let outcome = service.reorder_task(ListId::Validating, 5, 0).expect("reorder");

    assert!(!outcome.is_applied());
    assert_eq!(contents(service.snapshot(), ListId::Validating), vec!["a", "b"]);
}

#[rstest]
fn changes_survive_reopening(store: InMemoryKeyValueStore) {
    let mut first = open_service(&store);
    first.initialize().expect("initialize");
    let ids = seed(&mut first, ListId::Backlog, &["one", "two", "three"]);
    first.reorder_task(ListId::Backlog, 2, 0).expect("reorder");
    first
        .move_task(
            ids.first().cloned().expect("id"),
            ListId::Backlog,
            ListId::Blocked,
            3,
        )
        .expect("move");

    let reopened = open_service(&store);

    assert_eq!(reopened.snapshot(), first.snapshot());
    assert_eq!(contents(reopened.snapshot(), ListId::Backlog), vec!["three", "two"]);
    assert_eq!(contents(reopened.snapshot(), ListId::Blocked), vec!["one"]);
    assert_eq!(reopened.snapshot().check_invariants(), Ok(()));
}

#[rstest]
fn delete_of_unknown_task_changes_nothing(mut service: MemoryBoardService) {
    seed(&mut service, ListId::Inbox, &["keep"]);
    let before = service.envelope().clone();

    let outcome = service
        .delete_task(TaskId::from_raw("missing"))
        .expect("delete");

    assert!(!outcome.is_applied());
    assert_eq!(service.envelope(), &before);
}
