//! Command-line entry point for tasktrack core.
//!
//! # Responsibility
//! - Run task search and reminder selection over a JSON task export.
//! - Print machine-readable JSON results to stdout.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::json;
use std::path::{Path, PathBuf};
use tasktrack_core::db::open_db;
use tasktrack_core::{
    init_logging, reminder_payloads_json, search_tasks, CooldownStore, CoreConfig,
    MemoryCooldownStore, ReminderService, SqliteCooldownStore, Task, TaskId,
};

#[derive(Debug, Parser)]
#[command(name = "tasktrack", version, about = "Fuzzy task search and deadline reminders")]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank tasks by title similarity to a query.
    Search {
        #[command(flatten)]
        input: TaskInput,
        /// Free-text query.
        #[arg(long)]
        query: String,
    },
    /// List near-deadline tasks whose reminder should fire now.
    Reminders {
        #[command(flatten)]
        input: TaskInput,
        /// Current time in Unix epoch milliseconds.
        #[arg(long)]
        now: i64,
        /// SQLite file holding cooldown records; in-memory when omitted.
        #[arg(long)]
        store: Option<PathBuf>,
        /// Session key scoping cooldown records in the store.
        #[arg(long, default_value = "cli")]
        session: String,
    },
}

#[derive(Debug, Args)]
struct TaskInput {
    /// JSON file with an array of tasks.
    #[arg(long)]
    tasks: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CoreConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CoreConfig::default(),
    };
    if config.logging.log_dir.is_some() {
        init_logging(&config.logging).map_err(anyhow::Error::msg)?;
    }

    match cli.command {
        Command::Search { input, query } => {
            let tasks = load_tasks(&input.tasks)?;
            let hits = search_tasks(&tasks, &query, &config.search)
                .into_iter()
                .map(|hit| {
                    json!({
                        "id": hit.item.id,
                        "title": hit.item.title,
                        "distance": hit.distance,
                    })
                })
                .collect::<Vec<_>>();
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Command::Reminders {
            input,
            now,
            store,
            session,
        } => {
            let tasks = load_tasks(&input.tasks)?;
            let due = match store {
                Some(path) => {
                    let conn = open_db(&path)
                        .with_context(|| format!("opening cooldown store {}", path.display()))?;
                    let store = SqliteCooldownStore::try_new(&conn, session)?;
                    let service = ReminderService::new(store, config.reminders.clone());
                    due_task_ids(&service, &tasks, now)
                }
                None => due_task_ids(
                    &ReminderService::new(MemoryCooldownStore::new(), config.reminders.clone()),
                    &tasks,
                    now,
                ),
            };
            let due_tasks = tasks
                .iter()
                .filter(|task| due.contains(&task.id))
                .collect::<Vec<_>>();
            println!("{}", reminder_payloads_json(&due_tasks, now)?);
        }
    }

    Ok(())
}

fn due_task_ids<S: CooldownStore>(
    service: &ReminderService<S>,
    tasks: &[Task],
    now: i64,
) -> Vec<TaskId> {
    service
        .due_reminders(tasks, now)
        .into_iter()
        .map(|task| task.id)
        .collect()
}

fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading tasks {}", path.display()))?;
    let tasks: Vec<Task> =
        serde_json::from_str(&raw).with_context(|| format!("parsing tasks {}", path.display()))?;
    for task in &tasks {
        task.validate()
            .with_context(|| format!("invalid task {}", task.id))?;
    }
    Ok(tasks)
}
