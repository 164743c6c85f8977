//! Command-line front-end for a file-backed kanban board.
//!
//! Usage:
//!
//! ```text
//! kanban [--data-dir DIR] [--key KEY] <command>
//! ```
//!
//! Commands mirror the board intents: `show`, `add`, `edit`, `delete`,
//! `move`, and `reorder`. The board is initialized on first use and every
//! change is written back before the command exits. Set `RUST_LOG=debug` to
//! see which intents were applied or ignored.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use eyre::WrapErr;
use kanban_board::board::{
    adapters::FileKeyValueStore,
    domain::{Board, ListId, TaskId},
    engine::Outcome,
    gesture::{normalize_content, resolve_edit},
    persistence::BoardRepository,
    services::BoardService,
};
use kanban_board::config::StoreConfig;
use mockable::DefaultClock;
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "kanban", about = "Single-user kanban board")]
struct Cli {
    /// Directory holding the board file.
    #[arg(long, global = true)]
    data_dir: Option<Utf8PathBuf>,

    /// Storage key the board is saved under.
    #[arg(long, global = true)]
    key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every list and its tasks.
    Show,
    /// Append a task to a list.
    Add {
        /// Target list, e.g. `inbox` or `inProgress`.
        list: ListId,
        /// Task content.
        content: String,
    },
    /// Replace a task's content.
    Edit {
        /// Task identifier.
        task: String,
        /// Replacement content.
        content: String,
    },
    /// Delete a task.
    Delete {
        /// Task identifier.
        task: String,
    },
    /// Move a task to another list.
    Move {
        /// Task identifier.
        task: String,
        /// List currently holding the task.
        from: ListId,
        /// Destination list.
        to: ListId,
        /// Destination position; past the end appends.
        index: usize,
    },
    /// Move a task within one list.
    Reorder {
        /// List to reorder.
        list: ListId,
        /// Current position.
        old_index: usize,
        /// New position.
        new_index: usize,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    let store = FileKeyValueStore::open(config.data_dir())
        .wrap_err_with(|| format!("open board directory {}", config.data_dir()))?;
    let repository = BoardRepository::with_key(Arc::new(store), config.storage_key());
    let mut service = BoardService::open(repository, Arc::new(DefaultClock));
    service.initialize().wrap_err("initialize board")?;

    let outcome = run_command(&mut service, cli.command)?;
    let mut out = io::stdout().lock();
    if let Some(Outcome::Ignored(reason)) = outcome {
        writeln!(out, "nothing changed: {reason}")?;
    }
    render(&mut out, service.snapshot())?;
    Ok(())
}

fn resolve_config(cli: &Cli) -> eyre::Result<StoreConfig> {
    let mut config = StoreConfig::from_env()?;
    if let Some(data_dir) = &cli.data_dir {
        config = config.with_data_dir(data_dir.clone());
    }
    if let Some(key) = &cli.key {
        config = config.with_storage_key(key)?;
    }
    Ok(config)
}

fn run_command(
    service: &mut BoardService<FileKeyValueStore, DefaultClock>,
    command: Command,
) -> eyre::Result<Option<Outcome>> {
    let outcome = match command {
        Command::Show => return Ok(None),
        Command::Add { list, content } => {
            let text = normalize_content(&content)
                .ok_or_else(|| eyre::eyre!("task content must not be empty"))?;
            service.add_task(list, text)?
        }
        Command::Edit { task, content } => {
            if normalize_content(&content).is_none() {
                return Err(eyre::eyre!("task content must not be empty"));
            }
            let task_id = TaskId::from_raw(task);
            let Some(intent) = resolve_edit(service.snapshot(), &task_id, &content) else {
                tracing::debug!(task = %task_id, "content unchanged, skipping edit");
                return Ok(None);
            };
            service.apply(intent)?
        }
        Command::Delete { task } => service.delete_task(TaskId::from_raw(task))?,
        Command::Move {
            task,
            from,
            to,
            index,
        } => service.move_task(TaskId::from_raw(task), from, to, index)?,
        Command::Reorder {
            list,
            old_index,
            new_index,
        } => service.reorder_task(list, old_index, new_index)?,
    };
    Ok(Some(outcome))
}

fn render(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for list in board.lists() {
        writeln!(out, "{} ({})", list.title(), list.len())?;
        for task in list.tasks() {
            writeln!(out, "  {}. {}  [{}]", task.order(), task.content(), task.id())?;
        }
    }
    Ok(())
}
