//! Shared world state for board ordering BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use eyre::eyre;
use kanban_board::board::{
    adapters::InMemoryKeyValueStore,
    domain::{ListId, TaskId},
    engine::Outcome,
    persistence::BoardRepository,
    services::BoardService,
};
use mockable::DefaultClock;
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestBoardService = BoardService<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for board ordering behaviour tests.
pub struct BoardWorld {
    pub store: InMemoryKeyValueStore,
    pub service: TestBoardService,
    pub named: HashMap<String, TaskId>,
    pub last_outcome: Option<Outcome>,
}

impl BoardWorld {
    /// Creates a world backed by an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryKeyValueStore::new();
        let service = open_service(&store);
        Self {
            store,
            service,
            named: HashMap::new(),
            last_outcome: None,
        }
    }

    /// Replaces the service with one reloaded from the same store.
    pub fn reopen(&mut self) {
        self.service = open_service(&self.store);
    }

    /// Looks up the id of a task created under `content` in this scenario.
    pub fn task_id(&self, content: &str) -> Result<TaskId, eyre::Report> {
        self.named
            .get(content)
            .cloned()
            .ok_or_else(|| eyre!("no task named '{content}' in scenario"))
    }

    /// Adds a task and remembers its id by content.
    pub fn add_named(&mut self, list_id: ListId, content: &str) -> Result<(), eyre::Report> {
        let outcome = self
            .service
            .add_task(list_id, content)
            .map_err(|err| eyre!("add task failed: {err}"))?;
        let task_id = self
            .service
            .snapshot()
            .list(list_id)
            .and_then(|list| list.tasks().last())
            .map(|task| task.id().clone())
            .ok_or_else(|| eyre!("task '{content}' missing from {list_id}"))?;
        self.named.insert(content.to_owned(), task_id);
        self.last_outcome = Some(outcome);
        Ok(())
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn open_service(store: &InMemoryKeyValueStore) -> TestBoardService {
    BoardService::open(
        BoardRepository::new(Arc::new(store.clone())),
        Arc::new(DefaultClock),
    )
}

/// Parses a list name used in feature files.
pub fn parse_list(raw: &str) -> Result<ListId, eyre::Report> {
    ListId::try_from(raw).map_err(|err| eyre!("{err}"))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
